pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    // Config discovery is relative to each command's source path, so the
    // handlers load it themselves.
    let result = match &cli.command {
        types::Commands::Generate { source, destination, quiet, verbose } => {
            commands::handle_generate_command(
                source,
                destination.as_ref(),
                *quiet,
                *verbose,
                cli.config.as_deref(),
            )
        }
        types::Commands::List { source, json } => {
            commands::handle_list_command(source, *json, cli.config.as_deref())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
