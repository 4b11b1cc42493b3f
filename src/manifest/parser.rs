//! Line-oriented state machine over a MAINTAINERS-style manifest.
//!
//! Records are separated by blank lines. The first non-blank line after a
//! separator names the subsystem; `M:` lines name maintainers and `F:` lines
//! list the file globs they own. Everything before the header line is ignored.

use crate::domain::{Config, OwnershipRecord, ParsePolicy};
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static FILE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^F:\t(.*)").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    NotStarted,
    AwaitingSubsystem,
    InRecord,
}

/// Fields collected for the record currently being scanned.
#[derive(Debug, Default)]
struct PendingRecord {
    subsystem: Option<String>,
    engineers: Vec<String>,
    files: Vec<String>,
}

impl PendingRecord {
    fn add_engineer(&mut self, name: &str) {
        if !self.engineers.iter().any(|e| e == name) {
            self.engineers.push(name.to_string());
        }
    }

    fn add_file(&mut self, file: &str) {
        if !self.files.iter().any(|f| f == file) {
            self.files.push(file.to_string());
        }
    }

    fn accepts_files(&self) -> bool {
        self.subsystem.is_some() && !self.engineers.is_empty()
    }

    /// Consume the pending fields, yielding a record only when it has a
    /// subsystem, at least one engineer and at least one file.
    fn finish(&mut self) -> Option<OwnershipRecord> {
        let pending = std::mem::take(self);
        let subsystem = pending.subsystem?;
        if pending.engineers.is_empty() || pending.files.is_empty() {
            return None;
        }
        Some(OwnershipRecord { subsystem, engineers: pending.engineers, files: pending.files })
    }
}

pub struct ManifestParser<'a> {
    config: &'a Config,
    policy: ParsePolicy,
    engineer_line: Regex,
    alt_identity_lines: Vec<(String, Regex)>,
}

impl<'a> ManifestParser<'a> {
    pub fn new(config: &'a Config, policy: ParsePolicy) -> Result<Self> {
        let domain = regex::escape(config.internal_domain.trim());
        let engineer_line = Regex::new(&format!(r"(?i)^M:\t(.*) <.*@{domain}.*"))
            .with_context(|| format!("Invalid internal domain: {}", config.internal_domain))?;

        let mut alt_identity_lines = Vec::new();
        if policy.use_alt_identities {
            for name in config.alt_identities.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
                // only the tag is case-insensitive; the name must match as configured
                let pattern = format!(r"^(?i:M:)\t({}) <.*@.*", regex::escape(name));
                let re = Regex::new(&pattern)
                    .with_context(|| format!("Invalid alternate identity: {name}"))?;
                alt_identity_lines.push((name.to_string(), re));
            }
        }

        Ok(Self { config, policy, engineer_line, alt_identity_lines })
    }

    /// Parse the full manifest text into ownership records, in manifest order.
    pub fn parse(&self, text: &str) -> Vec<OwnershipRecord> {
        let mut state = ScanState::NotStarted;
        let mut pending = PendingRecord::default();
        let mut records = Vec::new();

        for line in text.lines() {
            match state {
                ScanState::NotStarted => {
                    if line.starts_with(self.config.manifest_header.as_str()) {
                        tracing::debug!("Found manifest header: {}", line.trim());
                        state = ScanState::InRecord;
                    }
                }
                ScanState::AwaitingSubsystem => {
                    let name = line.trim();
                    if !name.is_empty() {
                        pending.subsystem = Some(name.to_string());
                        state = ScanState::InRecord;
                    }
                }
                ScanState::InRecord => {
                    if let Some(engineer) = self.match_engineer(line) {
                        if self.is_excluded_assignee(&engineer) {
                            tracing::debug!("Skipping assignee {engineer}");
                        } else {
                            pending.add_engineer(&engineer);
                        }
                    } else if let Some(caps) = FILE_LINE.captures(line) {
                        let file = caps[1].trim();
                        if pending.accepts_files() && !file.is_empty() {
                            pending.add_file(file);
                        }
                    } else if line.trim().is_empty() {
                        records.extend(self.finish(&mut pending));
                        state = ScanState::AwaitingSubsystem;
                    }
                }
            }
        }

        if pending.subsystem.is_some() {
            tracing::debug!("Dropping unterminated record at end of manifest");
        }
        records
    }

    fn finish(&self, pending: &mut PendingRecord) -> Option<OwnershipRecord> {
        let record = pending.finish()?;
        tracing::debug!(
            "Parsed subsystem {} ({} engineers, {} files)",
            record.subsystem,
            record.engineers.len(),
            record.files.len()
        );
        Some(record)
    }

    /// Display name of an internal engineer on an `M:` line, if any.
    fn match_engineer(&self, line: &str) -> Option<String> {
        if let Some(caps) = self.engineer_line.captures(line) {
            let name = caps[1].trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }

        self.alt_identity_lines
            .iter()
            .find(|(_, re)| re.is_match(line))
            .map(|(name, _)| name.clone())
    }

    fn is_excluded_assignee(&self, engineer: &str) -> bool {
        !self.policy.include_assignees
            && self
                .config
                .assignees
                .iter()
                .map(|a| a.trim())
                .any(|assignee| !assignee.is_empty() && engineer.contains(assignee))
    }
}
