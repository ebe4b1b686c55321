//! Kibana artefact CLI library.
//!
//! Holds everything the `kibana-artefact` binary does apart from process
//! setup, so that command dispatch can be exercised from tests with
//! in-memory output buffers.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - CLI error type and exit codes
//! - [`logging`] - Logger initialisation
//! - [`output`] - Text and JSON rendering

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;

use crate::cli::{ArchArgs, Cli, Command, ResolveArgs, VersionsArgs};
use crate::error::{CliError, Result};
use kibana_artefact::catalog::Catalog;
use kibana_artefact::machine::kernel_machine;
use kibana_artefact::{Arch, Settings, resolve_artefact};
use log::{debug, info};
use std::io::Write;

/// Run the parsed command, writing results to `stdout`.
///
/// # Errors
///
/// Returns an error when settings cannot be loaded, the artefact cannot be
/// resolved, or output cannot be written.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Resolve(args) => run_resolve(args, stdout),
        Command::Versions(args) => run_versions(args, stdout),
        Command::Arch(args) => run_arch(args, stdout),
    }
}

fn run_resolve(args: &ResolveArgs, stdout: &mut dyn Write) -> Result<()> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    args.apply_to(&mut settings);

    let machine = machine_identifier(args.machine.as_deref());
    let arch = Arch::classify(&machine);
    info!(
        "resolving Kibana {} ({}) for {arch}",
        settings.version, settings.install_method
    );

    let resolved = resolve_artefact(&settings, arch)?;
    output::write_resolved(stdout, &resolved, args.json)
}

fn run_versions(args: &VersionsArgs, stdout: &mut dyn Write) -> Result<()> {
    let listings = output::version_listings(Catalog::builtin());
    output::write_versions(stdout, &listings, args.json)
}

fn run_arch(args: &ArchArgs, stdout: &mut dyn Write) -> Result<()> {
    let machine = machine_identifier(args.machine.as_deref());
    output::write_arch(stdout, &machine, Arch::classify(&machine))
}

fn machine_identifier(explicit: Option<&str>) -> String {
    explicit.map_or_else(kernel_machine, |machine| {
        debug!("using machine identifier {machine} from the command line");
        machine.to_owned()
    })
}

/// Convert a run result into a process exit code, reporting any error.
pub fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_error(stderr, &err);
            err.exit_code()
        }
    }
}

fn write_error(stderr: &mut dyn Write, err: &CliError) {
    write_stderr_line(stderr, format_args!("error: {err}"));
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        write_stderr_line(stderr, format_args!("  caused by: {cause}"));
        source = cause.source();
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use kibana_artefact::ResolveError;

    fn run_args(argv: &[&str]) -> (Result<()>, String) {
        let cli = Cli::parse_from(argv.iter().copied());
        let mut stdout = Vec::new();
        let result = run(&cli, &mut stdout);
        let text = String::from_utf8(stdout).expect("stdout is UTF-8");
        (result, text)
    }

    #[test]
    fn resolve_prints_release_url_and_checksum() {
        let (result, text) = run_args(&[
            "kibana-artefact",
            "resolve",
            "--base-url",
            "https://example.com",
            "--machine",
            "x86_64",
        ]);
        result.expect("default release resolves");
        assert_eq!(
            text,
            concat!(
                "url=https://example.com/kibana-6.2.4-linux-x86_64.tar.gz\n",
                "checksum=53fb5ddcb3055209f8e3dffcad62d24bdbdedbe8e2f66c1773bac4a1f8b629af\n"
            )
        );
    }

    #[test]
    fn resolve_reports_unsupported_version() {
        let (result, text) =
            run_args(&["kibana-artefact", "resolve", "-k", "9.9.9", "--machine", "x86_64"]);
        let err = result.expect_err("9.9.9 is not catalogued");
        assert!(matches!(
            err,
            CliError::Resolve(ResolveError::UnsupportedVersion { .. })
        ));
        assert!(text.is_empty());
    }

    #[test]
    fn resolve_reads_settings_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("kibana.toml");
        std::fs::write(&path, "version = \"5.4.1\"\ninstall_method = \"windows\"\n")
            .expect("write settings");
        let path = path.to_str().expect("temp path is UTF-8");

        let (result, text) = run_args(&[
            "kibana-artefact",
            "resolve",
            "--config",
            path,
            "--base-url",
            "https://example.com",
            "--machine",
            "i686",
        ]);

        result.expect("settings resolve");
        assert!(text.contains("url=https://example.com/kibana-5.4.1-windows-x86.zip\n"));
        assert!(text.contains(
            "checksum=bf88a207b5d4be62c02b83cf2d1cce14aac1a48a9feb084817b93e4690b00983\n"
        ));
    }

    #[test]
    fn command_line_overrides_settings_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("kibana.toml");
        std::fs::write(&path, "checksum = \"from-file\"\n").expect("write settings");
        let path = path.to_str().expect("temp path is UTF-8");

        let (result, text) = run_args(&[
            "kibana-artefact",
            "resolve",
            "-c",
            path,
            "--checksum",
            "from-flag",
            "--machine",
            "x86_64",
        ]);

        result.expect("override resolves");
        assert!(text.ends_with("checksum=from-flag\n"));
    }

    #[test]
    fn resolve_reports_missing_settings_file() {
        let (result, _) = run_args(&[
            "kibana-artefact",
            "resolve",
            "--config",
            "/nonexistent/kibana.toml",
        ]);
        let err = result.expect_err("settings file is absent");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn versions_lists_catalog() {
        let (result, text) = run_args(&["kibana-artefact", "versions"]);
        result.expect("listing succeeds");
        assert_eq!(text.lines().count(), 9);
        assert!(text.starts_with("6.2.4 release:x86_64,x86 windows:x86 darwin:x86_64\n"));
        assert!(text.contains("5.4.0 release:x86_64,x86 windows:x64\n"));
        assert!(text.ends_with("5.2.0 release:x86_64,x86 windows:x64\n"));
    }

    #[test]
    fn arch_classifies_explicit_machine() {
        let (result, text) = run_args(&["kibana-artefact", "arch", "--machine", "aarch64"]);
        result.expect("arch succeeds");
        assert_eq!(text, "machine=aarch64\narch=x86\n");
    }

    #[test]
    fn exit_code_is_zero_on_success() {
        let mut stderr = Vec::new();
        assert_eq!(exit_code_for_run_result(Ok(()), &mut stderr), 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_reports_error_and_cause() {
        let err = CliError::from(kibana_artefact::SettingsError::Read {
            path: camino::Utf8PathBuf::from("/nowhere.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let mut stderr = Vec::new();

        let code = exit_code_for_run_result(Err(err), &mut stderr);

        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert_eq!(code, 2);
        assert!(text.starts_with("error: failed to read settings file /nowhere.toml"));
        assert!(text.contains("caused by:"));
    }
}
