// CLI module for fridge-chef
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// fridge-chef - Suggest recipes from a photo of your fridge
#[derive(Parser, Debug)]
#[command(name = "fridge-chef", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.fridge-chef/config.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Port to listen on, overriding PORT and the config file
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}
