//! Initialize a repository folder

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use repo::Repository;
use std::path::Path;

use crate::{system_config, util};

pub fn run(path: &Path, no_default: bool) -> Result<()> {
    let repository = Repository::init(path)
        .with_context(|| format!("failed to initialize repository at {}", path.display()))?;

    println!(
        "{} Initialized repository at {}",
        "✓".green(),
        repository.store().root().display()
    );

    if !repository.is_empty() {
        println!(
            "  {} Replayed {} from existing artifacts",
            "✓".green(),
            util::count_noun(repository.len(), "commit")
        );
    }

    if no_default {
        println!(
            "{} Not saved as default (--no-default)",
            "→".yellow()
        );
    } else {
        let root = std::fs::canonicalize(path)
            .with_context(|| format!("failed to resolve {}", path.display()))?;
        let mut config = system_config::load()?;
        config.repo_root = Some(root);
        system_config::save(&config)?;
        println!("{} Saved as the default repository", "✓".green());
    }

    println!();
    println!("Next steps:");
    println!("  {} mvc commit <file> -m <message>", "→".cyan());
    println!("  {} mvc log", "→".cyan());

    Ok(())
}
