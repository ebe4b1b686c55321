//! Kibana artefact CLI entrypoint.
//!
//! Prints the download URL and expected checksum of a Kibana distribution
//! archive for use by provisioning scripts.

use clap::Parser;
use kibana_artefact_cli::cli::Cli;
use kibana_artefact_cli::exit_code_for_run_result;
use kibana_artefact_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let result = kibana_artefact_cli::run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
