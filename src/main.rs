//! Local Cluster Config
//!
//! Entry point for the local-cluster-config tool.

use std::process::ExitCode;

use local_cluster_config::config::{
    ConfigError, initialize_configuration, render_config_to_file,
};

mod app;
mod cli;

#[cfg(test)]
mod cli_tests;

use app::{exit_code, print_config_hint, setup_tracing};
use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    setup_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Resolves the configuration and dispatches the subcommand.
fn run(cli: &Cli) -> Result<(), ConfigError> {
    let args = cli.to_field_args();
    let config = initialize_configuration(&args)?;

    tracing::debug!(cluster = %config.cluster_name, "configuration resolved");

    match &cli.command {
        Command::Resolve => {
            let rendered = serde_yaml::to_string(&config).map_err(ConfigError::Serialize)?;
            print!("{rendered}");
        }
        Command::Configure { output } => {
            render_config_to_file(output, &config)?;
            println!("Configuration written to: {}", output.display());
        }
    }

    Ok(())
}
