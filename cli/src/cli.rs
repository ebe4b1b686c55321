//! CLI argument definitions for the Kibana artefact resolver.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the entrypoint so that parsing can be tested without running
//! anything.

use camino::Utf8PathBuf;
use clap::{ArgAction, Args, Parser, Subcommand};
use kibana_artefact::Settings;

/// Resolve Kibana download URLs and checksums.
#[derive(Parser, Debug)]
#[command(name = "kibana-artefact")]
#[command(version, about)]
#[command(long_about = concat!(
    "Resolve Kibana download URLs and checksums.\n\n",
    "Given a Kibana version and install method, prints the archive URL and the ",
    "checksum the archive is expected to have. The machine architecture is ",
    "detected from the running kernel unless --machine is given. Nothing is ",
    "downloaded.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Resolve the default release for this machine:\n",
    "    $ kibana-artefact resolve\n\n",
    "  Resolve the Windows zip for 5.6.5 as JSON:\n",
    "    $ kibana-artefact resolve -k 5.6.5 -m windows --json\n\n",
    "  Read inputs from a settings file:\n",
    "    $ kibana-artefact resolve --config kibana.toml\n\n",
    "  List catalogued versions:\n",
    "    $ kibana-artefact versions",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve the download URL and checksum for an artefact.
    Resolve(ResolveArgs),

    /// List catalogued versions with their install methods.
    Versions(VersionsArgs),

    /// Print the architecture tag for this machine.
    Arch(ArchArgs),
}

/// Arguments for the resolve command.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Settings file to read defaults from.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Kibana version to resolve.
    #[arg(short = 'k', long = "kibana-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Install method (release, windows, darwin).
    #[arg(short = 'm', long, value_name = "METHOD")]
    pub install_method: Option<String>,

    /// Base URL the archive name is appended to.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Explicit download URL, bypassing the URL templates.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Explicit checksum, bypassing the catalog.
    #[arg(long, value_name = "CHECKSUM")]
    pub checksum: Option<String>,

    /// Machine identifier to classify instead of asking the kernel.
    #[arg(long, value_name = "ID")]
    pub machine: Option<String>,

    /// Emit JSON instead of key=value lines.
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    /// Layer the command-line values over `settings`.
    ///
    /// Flags that were not given leave the corresponding setting untouched.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(version) = &self.version {
            settings.version.clone_from(version);
        }
        if let Some(install_method) = &self.install_method {
            settings.install_method.clone_from(install_method);
        }
        if let Some(base_url) = &self.base_url {
            settings.distribution_base_url.clone_from(base_url);
        }
        if self.url.is_some() {
            settings.url.clone_from(&self.url);
        }
        if self.checksum.is_some() {
            settings.checksum.clone_from(&self.checksum);
        }
    }
}

/// Arguments for the versions command.
#[derive(Args, Debug, Clone, Default)]
pub struct VersionsArgs {
    /// Emit JSON instead of one line per version.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the arch command.
#[derive(Args, Debug, Clone, Default)]
pub struct ArchArgs {
    /// Machine identifier to classify instead of asking the kernel.
    #[arg(long, value_name = "ID")]
    pub machine: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
