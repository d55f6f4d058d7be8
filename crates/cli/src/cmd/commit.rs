//! Record a file's current contents as a new commit

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use repo::Repository;
use std::fs;
use std::path::Path;

use crate::util;

pub fn run(repo_flag: Option<&Path>, file: &Path, message: &str) -> Result<()> {
    let root = util::resolve_repo_root(repo_flag)?;
    let mut repository = Repository::open(&root)
        .with_context(|| format!("failed to open repository at {}", root.display()))?;

    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;

    let n = repository.commit(&content, message)?;
    let node = repository
        .get(n)
        .expect("commit just recorded is retrievable");

    println!(
        "{} Committed {} as {}",
        "✓".green(),
        file.display(),
        node.record().file_name.yellow()
    );
    if !node.record().diff_summary.is_empty() {
        println!("  {}", node.record().diff_summary.dimmed());
    }

    Ok(())
}
