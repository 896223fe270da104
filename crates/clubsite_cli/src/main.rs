//! Clubsite CLI

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clubsite_cli::commands;
use clubsite_cli::logging::{init_logging, LogConfig};
use clubsite_cli::SiteConfig;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format));

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when the command ran but found problems
async fn run(cli: Cli) -> Result<bool> {
    let config = SiteConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Check => {
            let report = commands::check(&config).await;
            print!("{report}");
            Ok(report.is_ok())
        }
        Command::Meta { path } => {
            print!("{}", commands::meta(&config, &path));
            Ok(true)
        }
        Command::Theme { action } => {
            println!("{}", commands::theme(&config, action.into()));
            Ok(true)
        }
        Command::Reveal { path } => {
            let data = config.data_source().load_all().await;
            let timeline = commands::reveal(&config, &path, &data);
            println!("{timeline}");
            Ok(true)
        }
    }
}
