use crate::types::ViewMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// buildsheet - configure a vehicle and see retail and dealer pricing live
#[derive(Parser, Debug)]
#[command(name = "buildsheet")]
#[command(about = "A terminal vehicle configurator with live retail and dealer invoice pricing")]
#[command(version)]
pub struct Cli {
    /// Settings file (JSON). Defaults are used when it does not exist.
    #[arg(long, global = true, default_value = "buildsheet.json")]
    pub settings: PathBuf,

    /// Catalog directory, overriding the settings file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive configurator (default)
    Configure,
    /// Load the catalog and report integrity issues
    Validate,
    /// List the options that fit a vehicle, grouped by category
    Options {
        /// Vehicle id
        #[arg(short, long)]
        vehicle: String,
    },
    /// Price a configuration without the TUI
    Price {
        /// Vehicle id
        #[arg(short, long)]
        vehicle: String,
        /// Option id to add (repeatable, in selection order)
        #[arg(short, long = "option")]
        options: Vec<String>,
        /// Pricing perspective
        #[arg(long, default_value = "customer")]
        view: ViewMode,
        /// Print the full pricing breakdown as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
