//! Core data types shared by the parser, scorer and renderers.

use serde::Deserialize;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

pub const DEFAULT_INTERNAL_DOMAIN: &str = "linaro.org";
pub const DEFAULT_MANIFEST_HEADER: &str = "Maintainers List";
pub const DEFAULT_TITLE: &str = "Linux kernel";

/// One subsystem entry from the manifest, bound to the engineers that own it
/// and the file globs it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipRecord {
    pub subsystem: String,
    pub engineers: Vec<String>,
    pub files: Vec<String>,
}

impl OwnershipRecord {
    /// Engineers joined the way the mind map and the git author filter expect.
    pub fn engineer_list(&self) -> String {
        self.engineers.join(", ")
    }

    pub fn file_list(&self) -> String {
        self.files.join(" ")
    }

    /// More than one engineer owns this subsystem, so commits cannot be
    /// attributed to a single author.
    pub fn has_shared_ownership(&self) -> bool {
        self.engineers.len() > 1
    }
}

/// Activity classification computed from a yearly commit rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    High,
    Medium,
    Low,
}

impl ActivityLevel {
    /// Thresholds are in commits per year: above 52 is high, above 12 is medium.
    pub fn from_yearly_rate(rate: f64) -> Self {
        if rate > 52.0 {
            ActivityLevel::High
        } else if rate > 12.0 {
            ActivityLevel::Medium
        } else {
            ActivityLevel::Low
        }
    }
}

/// Display tier of a scored record.
///
/// Overrides (`AmbiguousAuthor`, `QueryFailed`) are resolved once by the scorer
/// and win over any computed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Computed(ActivityLevel),
    AmbiguousAuthor,
    QueryFailed,
}

impl Tier {
    pub fn color(self) -> &'static str {
        match self {
            Tier::Computed(ActivityLevel::High) => "#009900",
            Tier::Computed(ActivityLevel::Medium) => "#ff6600",
            Tier::Computed(ActivityLevel::Low) => "#990000",
            Tier::AmbiguousAuthor => "#3333FF",
            Tier::QueryFailed => "#C0C0C0",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Computed(ActivityLevel::High) => "high",
            Tier::Computed(ActivityLevel::Medium) => "medium",
            Tier::Computed(ActivityLevel::Low) => "low",
            Tier::AmbiguousAuthor => "ambiguous-author",
            Tier::QueryFailed => "unknown",
        }
    }
}

/// An ownership record annotated with its git activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub record: OwnershipRecord,
    /// `None` when the history query failed.
    pub commits: Option<u64>,
    pub tier: Tier,
}

impl ScoredRecord {
    /// Commit count as shown in the outputs, `-1` when the query failed.
    pub fn activity_count(&self) -> i64 {
        match self.commits {
            Some(count) => i64::try_from(count).unwrap_or(i64::MAX),
            None => -1,
        }
    }
}

/// Which maintainer lines the parser keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePolicy {
    /// Keep engineers listed in the assignee exclusion list.
    pub include_assignees: bool,
    /// Recognize configured alternate identities as internal engineers.
    pub use_alt_identities: bool,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self { include_assignees: false, use_alt_identities: true }
    }
}

/// Side configuration, loaded once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Names omitted from ownership unless assignees are explicitly requested.
    pub assignees: Vec<String>,
    /// Engineers recognized as internal even without an internal address.
    #[serde(alias = "non_linaro_email")]
    pub alt_identities: Vec<String>,
    pub internal_domain: String,
    pub manifest_header: String,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assignees: Vec::new(),
            alt_identities: Vec::new(),
            internal_domain: DEFAULT_INTERNAL_DOMAIN.to_string(),
            manifest_header: DEFAULT_MANIFEST_HEADER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
