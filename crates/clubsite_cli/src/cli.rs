//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clubsite_cli::commands::ThemeAction;
use clubsite_cli::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "clubsite")]
#[command(about = "Coding club site tooling: data checks, page metadata, theme and reveal previews")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file or directory containing clubsite.toml
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load every data file and report what was found
    Check,

    /// Print the SEO head tags for a page path
    Meta {
        /// Page path, e.g. /events
        #[arg(default_value = "/")]
        path: String,
    },

    /// Inspect or change the persisted theme
    Theme {
        #[arg(value_enum, default_value = "show")]
        action: ThemeArg,
    },

    /// Simulate scrolling through a page and print its reveal timeline
    Reveal {
        /// Page path, e.g. /team
        #[arg(default_value = "/")]
        path: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    /// Show the current scheme and where it came from
    Show,
    /// Flip between light and dark and store the choice
    Toggle,
    /// Forget the stored choice
    Reset,
}

impl From<ThemeArg> for ThemeAction {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Show => ThemeAction::Show,
            ThemeArg::Toggle => ThemeAction::Toggle,
            ThemeArg::Reset => ThemeAction::Reset,
        }
    }
}
