//! Display the commit timeline

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use repo::Repository;
use std::path::Path;

use crate::util;

pub fn run(repo_flag: Option<&Path>, limit: Option<usize>) -> Result<()> {
    let root = util::resolve_repo_root(repo_flag)?;
    let repository = Repository::open(&root)
        .with_context(|| format!("failed to open repository at {}", root.display()))?;

    let timeline = repository.timeline();
    if timeline.is_empty() {
        println!("{}", "No commits yet".dimmed());
        println!();
        println!(
            "{}",
            "Tip: record one with 'mvc commit <file> -m <message>'".dimmed()
        );
        return Ok(());
    }

    println!("{}", "Commit History".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();

    let total = timeline.len();
    let shown = limit.unwrap_or(total).min(total);

    // Newest first.
    for node in timeline.iter().rev().take(shown) {
        let record = node.record();
        print!("{} ", node.commit().yellow());
        print!("{} ", record.file_name);
        if !record.diff_summary.is_empty() {
            print!("[{}] ", record.diff_summary.cyan());
        }
        if !record.message.is_empty() {
            print!("- {}", record.message);
        }
        println!();
    }

    println!();
    if total > shown {
        println!(
            "{}",
            format!("Showing {} of {}", shown, util::count_noun(total, "commit")).dimmed()
        );
    } else {
        println!("{}", format!("Total: {}", util::count_noun(total, "commit")).dimmed());
    }

    Ok(())
}
