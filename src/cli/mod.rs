//! CLI module for the Khmer text gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Khmer Text Gateway - summarization and spell correction over
/// interchangeable pretrained models
#[derive(Parser)]
#[command(name = "khmer-text-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
