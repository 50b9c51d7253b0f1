pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::validation::parse_shift;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-code")]
#[command(about = "Encode and decode messages with a Caesar shift cipher")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Without a subcommand an interactive session is started
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encode a message and print the result
    Encode {
        #[arg(short, long, allow_negative_numbers = true, value_parser = parse_shift)]
        shift: i64,
        message: String,
    },
    /// Decode a message and print the result
    Decode {
        #[arg(short, long, allow_negative_numbers = true, value_parser = parse_shift)]
        shift: i64,
        message: String,
    },
}
