//! Machine identifier introspection.
//!
//! Supplies the raw processor identifier (the `uname -m` value) that the
//! architecture classifier consumes. On Unix the kernel is asked via
//! `uname(2)` and its answer is passed on untouched; elsewhere, or when that
//! call fails, the compile-time target architecture name is used instead.

use crate::arch::Arch;
use log::{debug, trace};

/// Abstraction over the source of the machine identifier.
#[cfg_attr(test, mockall::automock)]
pub trait MachineProbe {
    /// Return the machine identifier, or `None` when it is unavailable.
    fn machine(&self) -> Option<String>;
}

/// Probe backed by the running kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemMachine;

impl MachineProbe for SystemMachine {
    fn machine(&self) -> Option<String> {
        uname_machine()
    }
}

#[cfg(unix)]
fn uname_machine() -> Option<String> {
    let info = match nix::sys::utsname::uname() {
        Ok(info) => info,
        Err(err) => {
            debug!("uname failed: {err}");
            return None;
        }
    };
    let Some(machine) = info.machine().to_str() else {
        debug!("uname reported a non-UTF-8 machine identifier");
        return None;
    };
    if machine.is_empty() {
        None
    } else {
        Some(machine.to_owned())
    }
}

#[cfg(not(unix))]
fn uname_machine() -> Option<String> {
    None
}

/// Return the machine identifier reported by `probe`.
///
/// Falls back to [`std::env::consts::ARCH`] when the probe has no answer.
#[must_use]
pub fn kernel_machine_with(probe: &dyn MachineProbe) -> String {
    if let Some(machine) = probe.machine() {
        trace!("kernel reports machine {machine}");
        return machine;
    }
    debug!(
        "machine identifier unavailable; using build target {}",
        std::env::consts::ARCH
    );
    std::env::consts::ARCH.to_owned()
}

/// Return the running machine's identifier.
#[must_use]
pub fn kernel_machine() -> String {
    kernel_machine_with(&SystemMachine)
}

/// Classify the running machine.
#[must_use]
pub fn detect_architecture() -> Arch {
    Arch::classify(&kernel_machine())
}
