//! CLI for deriving SLIP-0010 ed25519 keys.

mod handlers;

use anyhow::{Error, Result};
use clap::Parser;
use slip10_common::logging::{self, LoggerConfig};

use crate::handlers::{derive, validate};

mod cli;

fn main() -> Result<(), Error> {
    logging::init(LoggerConfig::with_base_name("slip10-cli"));

    let cli = cli::Cli::parse();
    match cli.command {
        cli::Commands::Derive(args) => derive::handle_derive(args),
        cli::Commands::Validate(args) => validate::handle_validate(args),
    }
}
