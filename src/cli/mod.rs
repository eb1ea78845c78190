pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::ConfigOverrides;

/// Run the command-line interface
pub async fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug, cli.quiet);

    let site_dir = cli.site.clone().unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(types::Commands::Build { config, output, hostname }) => {
            let overrides = ConfigOverrides {
                output_dir: output,
                hostname,
            };
            commands::handle_build_command(&site_dir, config.as_deref(), &overrides)
        }
        Some(types::Commands::Serve { config, host, port, no_watch }) => {
            commands::handle_serve_command(&site_dir, config.as_deref(), &host, port, !no_watch)
                .await
        }
        Some(types::Commands::Clean { config }) => {
            commands::handle_clean_command(&site_dir, config.as_deref())
        }
        None => {
            // Default to build command if none provided
            commands::handle_build_command(&site_dir, None, &ConfigOverrides::default())
        }
    }
}
