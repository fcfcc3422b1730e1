//! Command line argument parsing for the Thesaurize CLI using clap.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Thesaurize - rewrite phrases word-by-word with thesaurus synonyms
#[derive(Parser, Debug, Clone)]
#[command(name = "thesaurize")]
#[command(about = "Rewrite phrases word-by-word with thesaurus synonyms")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ThesaurizeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ThesaurizeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rewrite a phrase once and print the result
    Rewrite(RewriteArgs),

    /// Run the slash-command webhook server
    Serve(ServeArgs),
}

/// Arguments for a one-shot rewrite
#[derive(Parser, Debug, Clone)]
pub struct RewriteArgs {
    /// The message to rewrite
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Arguments for the webhook server
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Synonym source selection, shared by all commands
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Thesaurus API key
    #[arg(long, env = "API_TOKEN", hide_env_values = true)]
    pub api_key: Option<String>,

    /// JSON synonym-group dictionary to use instead of the API
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}
