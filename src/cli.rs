// Command router: the clap surface and the dispatch from a parsed
// command to its handler.

use crate::api::ApiClient;
use crate::commands;
use crate::config::AppConfig;
use crate::report::Reporter;
use crate::storage::Storage;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "filebox")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Categorized file storage, HTTP fetches and shell commands")]
#[command(long_about = "filebox - a small utility CLI\n\n\
    Files are sorted into folders by extension:\n\
      .txt .md    -> texts/\n\
      .json .csv  -> data/\n\
      .log        -> logs/\n\
      anything    -> misc/\n\n\
    Examples:\n\
      filebox write notes.txt \"hello\"\n\
      filebox read notes.txt\n\
      filebox fetch https://example.com\n\
      filebox exec \"echo hi\"\n\
      filebox greet Ana -u")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write content to a file (auto-detect category)
    Write { filename: String, content: String },

    /// Read content from a file (auto-detect category)
    Read { filename: String },

    /// Delete a file (auto-detect category)
    Delete { filename: String },

    /// Fetch data from a given API URL
    Fetch { url: String },

    /// Fetch a random user from the Random User API
    RandomUser,

    /// Execute a shell command
    Exec { cmd: String },

    /// Print a greeting
    Greet {
        name: String,

        /// Shout the greeting
        #[arg(short, long)]
        uppercase: bool,
    },
}

/// Dispatch one parsed command. Handled failures are reported through
/// `reporter`; an `Err` means an unexpected storage failure.
pub fn run(command: Commands, config: &AppConfig, reporter: &mut Reporter) -> Result<()> {
    log::debug!("dispatching {:?}", command);
    let storage = Storage::new(&config.base_dir);

    match command {
        Commands::Write { filename, content } => commands::write(&storage, reporter, &filename, &content)?,
        Commands::Read { filename } => commands::read(&storage, reporter, &filename)?,
        Commands::Delete { filename } => commands::delete(&storage, reporter, &filename)?,
        Commands::Fetch { url } => {
            let api = ApiClient::new(config.random_user_url.as_str())?;
            commands::fetch(&api, reporter, &url);
        }
        Commands::RandomUser => {
            let api = ApiClient::new(config.random_user_url.as_str())?;
            commands::random_user(&api, reporter);
        }
        Commands::Exec { cmd } => commands::exec(reporter, &cmd),
        Commands::Greet { name, uppercase } => commands::greet(reporter, &name, uppercase),
    }
    Ok(())
}
