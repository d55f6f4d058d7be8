//! Permanently remove all commits newer than a given one

use anyhow::{anyhow, Context, Result};
use owo_colors::OwoColorize;
use repo::Repository;
use std::path::Path;

use crate::util;

pub fn run(repo_flag: Option<&Path>, commit: u64, yes: bool) -> Result<()> {
    let root = util::resolve_repo_root(repo_flag)?;
    let mut repository = Repository::open(&root)
        .with_context(|| format!("failed to open repository at {}", root.display()))?;

    let node = repository
        .get(commit)
        .ok_or_else(|| anyhow!("unknown commit {}", commit))?;

    let doomed = repository
        .timeline()
        .iter()
        .filter(|n| n.commit() > commit)
        .count();
    if doomed == 0 {
        println!("Nothing newer than commit {}; repository unchanged", commit);
        return Ok(());
    }

    println!("{}", "Rollback".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("Keep:   commit {} ({})", commit.yellow(), node.record().message);
    println!("Remove: {}", util::count_noun(doomed, "newer commit").red());
    println!();
    println!(
        "{}",
        "⚠ Warning: removed commits are deleted from disk and cannot be recovered"
            .red()
            .bold()
    );
    println!();

    if !yes && !util::confirm("Continue?")? {
        println!("{}", "Rollback cancelled".yellow());
        return Ok(());
    }

    repository.rollback(commit)?;

    println!();
    println!(
        "{} Rolled back to commit {}; removed {}",
        "✓".green(),
        commit.yellow(),
        util::count_noun(doomed, "commit")
    );

    Ok(())
}
