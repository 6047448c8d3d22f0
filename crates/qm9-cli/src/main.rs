mod cli;
mod commands;
mod error;
mod logging;
mod toolkit;

use clap::Parser;
use tracing::{debug, error};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);
    debug!("argumentos: {:?}", &cli);

    if let Err(e) = commands::run(cli.command, cli.pretty) {
        error!("comando fallido: {e}");
        eprintln!("error: {e}");
        let code = match e {
            error::CliError::Persistence(qm9_persistence::PersistenceError::InvalidArgument(_)) => 2,
            error::CliError::Io { .. } | error::CliError::Domain(_) => 2,
            _ => 5,
        };
        std::process::exit(code);
    }
}
