// CLI module for running the server and administrative operations

pub mod migrate;

use clap::{Parser, Subcommand};

/// Shopping list backend
#[derive(Parser, Debug)]
#[command(name = "shopping_list_backend")]
#[command(about = "Item record service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Subcommand to run, falling back to `serve` when none was given
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
