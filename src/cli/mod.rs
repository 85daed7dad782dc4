//! Command line interface
//!
//! - `serve`: HTTP API server (default)
//! - `retrieve`: run the retrieval pipeline once and print the outcome

pub mod retrieve;
pub mod serve;

use clap::{Parser, Subcommand};

/// Sui / Move / Walrus knowledge chat API
#[derive(Parser)]
#[command(name = "sui-chat-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Retrieve context for a single query without calling the LLM
    Retrieve(retrieve::RetrieveArgs),
}
