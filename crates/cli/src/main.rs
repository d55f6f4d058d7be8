//! mvc CLI - mini version control for single files

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cli::cmd;

/// Mini version control - per-file commit history with time-travel
#[derive(Parser)]
#[command(name = "mvc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository folder (overrides the configured default)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a repository folder and remember it as the default
    Init {
        /// Folder that will hold the commit artifacts
        path: PathBuf,

        /// Don't save the folder as the default repository
        #[arg(long)]
        no_default: bool,
    },
    /// Record a file's current contents as a new commit
    Commit {
        /// File to commit
        file: PathBuf,

        /// Commit message
        #[arg(short, long)]
        message: String,
    },
    /// Show the commit timeline, newest first
    Log {
        /// Number of commits to show (default: all)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print a commit's stored content
    Show {
        /// Commit number
        commit: u64,

        /// Read the index as it stood at this version
        #[arg(long)]
        at: Option<u64>,

        /// Show the nearest older commit instead
        #[arg(long)]
        prev: bool,

        /// Show the nearest newer commit instead
        #[arg(long)]
        next: bool,
    },
    /// Permanently remove all commits newer than the given one
    Rollback {
        /// Commit to keep as the new head
        commit: u64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let repo = cli.repo.as_deref();

    match cli.command {
        Commands::Init { path, no_default } => cmd::init::run(&path, no_default),
        Commands::Commit { file, message } => cmd::commit::run(repo, &file, &message),
        Commands::Log { limit } => cmd::log::run(repo, limit),
        Commands::Show {
            commit,
            at,
            prev,
            next,
        } => cmd::show::run(repo, commit, at, prev, next),
        Commands::Rollback { commit, yes } => cmd::rollback::run(repo, commit, yes),
    }
}
