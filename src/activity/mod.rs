//! Git activity scoring
//!
//! Each ownership record is matched against `git log` for its files over a
//! time window. The commit count is normalized to a yearly rate and mapped to
//! a display tier.

pub mod error;
pub mod git;
pub mod scorer;
pub mod window;

pub use error::QueryError;
pub use git::{count_commits, GitLog, HistoryQuery, LogQuery};
pub use scorer::ActivityScorer;
pub use window::{default_since, parse_since, ActivityWindow};
