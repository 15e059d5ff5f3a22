use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "santa-server")]
#[command(about = "Secret-Santa draw and SMS notifications. Serve the HTTP gateway, or draw once.")]
pub(crate) struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run HTTP server. Default bind: 0.0.0.0:8080
    Serve {
        /// Listen address (e.g. 0.0.0.0:8080); overrides the settings file.
        #[arg(long)]
        bind: Option<String>,
    },
    /// One-shot draw: print assignments for the given names and exit.
    Draw {
        /// Participant entry, repeatable; `NAME` or `NAME=+48123456789`.
        #[arg(long = "name", required = true)]
        name: Vec<String>,
    },
}
