//! Shared utilities for CLI commands

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::system_config;

/// Resolve the repository folder for this invocation.
///
/// Precedence: `--repo` flag, then the `MVC_REPO` environment variable,
/// then the configured default.
pub fn resolve_repo_root(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("MVC_REPO") {
        if !env_path.is_empty() {
            return Ok(PathBuf::from(env_path));
        }
    }

    if let Some(root) = system_config::load()?.repo_root {
        return Ok(root);
    }

    anyhow::bail!("no repository configured; run 'mvc init <path>' or pass --repo")
}

/// Ask a yes/no question on stdout, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Singular/plural phrase, e.g. `1 commit` / `3 commits`.
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let path = Path::new("/tmp/somewhere");
        assert_eq!(resolve_repo_root(Some(path)).unwrap(), path);
    }

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(1, "commit"), "1 commit");
        assert_eq!(count_noun(4, "commit"), "4 commits");
        assert_eq!(count_noun(0, "commit"), "0 commits");
    }
}
