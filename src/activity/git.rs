//! `git log` backed history queries

use super::error::QueryError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters of one history query.
#[derive(Debug, Clone, Copy)]
pub struct LogQuery<'a> {
    pub files: &'a [String],
    pub since: NaiveDate,
    /// Restrict to commits whose author matches this string.
    pub author: Option<&'a str>,
}

/// Source of commit history for a set of paths.
pub trait HistoryQuery {
    /// Return the one-line-per-commit log for the query.
    fn log(&self, query: &LogQuery<'_>) -> Result<String, QueryError>;
}

/// Runs `git log` in a working tree.
pub struct GitLog {
    root: PathBuf,
}

impl GitLog {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
}

/// Command-line arguments for `git` (without the program name).
///
/// No `--` separator is emitted: git then rejects paths that are missing from
/// the tree instead of silently reporting zero commits.
pub fn log_args(query: &LogQuery<'_>) -> Vec<String> {
    let mut args = vec!["log".to_string()];
    if let Some(author) = query.author {
        args.push(format!("--author={author}"));
    }
    args.push(format!("--since={}", query.since.format("%Y-%m-%d")));
    args.push("--oneline".to_string());
    args.extend(query.files.iter().cloned());
    args
}

impl HistoryQuery for GitLog {
    fn log(&self, query: &LogQuery<'_>) -> Result<String, QueryError> {
        let args = log_args(query);
        tracing::debug!("git {}", args.join(" "));

        let output = Command::new("git").args(&args).current_dir(&self.root).output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(QueryError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Number of commits in a `--oneline` log: one per non-empty line.
pub fn count_commits(log: &str) -> u64 {
    log.lines().filter(|line| !line.trim().is_empty()).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
    }

    #[test]
    fn builds_author_filtered_args() {
        let files = vec!["drivers/net/".to_string(), "include/net/*.h".to_string()];
        let query = LogQuery { files: &files, since: date("2023-02-01"), author: Some("Alice Able") };
        assert_eq!(
            log_args(&query),
            vec![
                "log",
                "--author=Alice Able",
                "--since=2023-02-01",
                "--oneline",
                "drivers/net/",
                "include/net/*.h"
            ]
        );
    }

    #[test]
    fn omits_author_when_not_filtering() {
        let files = vec!["drivers/tee/".to_string()];
        let query = LogQuery { files: &files, since: date("2023-02-01"), author: None };
        assert!(!log_args(&query).iter().any(|a| a.starts_with("--author")));
    }

    #[test]
    fn counts_non_empty_lines() {
        assert_eq!(count_commits(""), 0);
        assert_eq!(count_commits("abc123 one\n"), 1);
        assert_eq!(count_commits("a one\nb two\nc three\nd four\ne five\n"), 5);
        assert_eq!(count_commits("a one\n\nb two"), 2);
    }

    #[test]
    fn missing_directory_fails_to_spawn() {
        let git = GitLog::new("/nonexistent/maintainer-map/tree");
        let files = vec!["drivers/".to_string()];
        let query = LogQuery { files: &files, since: date("2023-02-01"), author: None };
        assert!(git.log(&query).is_err());
    }
}
