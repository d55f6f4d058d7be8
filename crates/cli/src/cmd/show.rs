//! Print a commit's stored content

use anyhow::{anyhow, bail, Context, Result};
use owo_colors::OwoColorize;
use repo::Repository;
use std::path::Path;

use crate::util;

pub fn run(
    repo_flag: Option<&Path>,
    commit: u64,
    at: Option<u64>,
    prev: bool,
    next: bool,
) -> Result<()> {
    if prev && next {
        bail!("--prev and --next are mutually exclusive");
    }

    let root = util::resolve_repo_root(repo_flag)?;
    let repository = Repository::open(&root)
        .with_context(|| format!("failed to open repository at {}", root.display()))?;

    let head = repository
        .head()
        .ok_or_else(|| anyhow!("repository has no commits"))?;
    let version = at.unwrap_or(head);

    let node = if prev {
        repository
            .predecessor(commit, version)
            .ok_or_else(|| anyhow!("no commit before {} at version {}", commit, version))?
    } else if next {
        repository
            .successor(commit, version)
            .ok_or_else(|| anyhow!("no commit after {} at version {}", commit, version))?
    } else {
        repository
            .get_at(commit, version)
            .ok_or_else(|| anyhow!("no commit {} at version {}", commit, version))?
    };

    let record = node.record();
    print!("{} {}", "Commit".bold(), node.commit().yellow());
    if version != head {
        print!(" {}", format!("(as of version {})", version).dimmed());
    }
    println!();
    if !record.message.is_empty() {
        println!("Message: {}", record.message);
    }
    if !record.diff_summary.is_empty() {
        println!("Diff:    {}", record.diff_summary.cyan());
    }
    println!();

    let content = repository.read_content(node.commit())?;
    print!("{}", content);

    Ok(())
}
