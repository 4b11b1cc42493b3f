//! Annotate ownership records with their git activity.

use super::git::{count_commits, HistoryQuery, LogQuery};
use super::window::ActivityWindow;
use crate::domain::{ActivityLevel, OwnershipRecord, ScoredRecord, Tier};

pub struct ActivityScorer<'q> {
    history: &'q dyn HistoryQuery,
    window: ActivityWindow,
    author_only: bool,
}

impl<'q> ActivityScorer<'q> {
    pub fn new(history: &'q dyn HistoryQuery, window: ActivityWindow, author_only: bool) -> Self {
        Self { history, window, author_only }
    }

    /// Score records one at a time, in order. A failed query degrades its own
    /// record and never stops the rest.
    pub fn score_all(&self, records: Vec<OwnershipRecord>) -> Vec<ScoredRecord> {
        records.into_iter().map(|record| self.score(record)).collect()
    }

    pub fn score(&self, record: OwnershipRecord) -> ScoredRecord {
        let engineers = record.engineer_list();

        // git has no notion of several authors in one filter; the joined
        // string is still passed and the result is flagged.
        let ambiguous = self.author_only && record.has_shared_ownership();
        if ambiguous {
            tracing::warn!(
                "{}: multiple maintainers ({}), per-author statistics will be incorrect",
                record.subsystem,
                engineers
            );
        }

        let query = LogQuery {
            files: &record.files,
            since: self.window.since(),
            author: self.author_only.then_some(engineers.as_str()),
        };

        let commits = match self.history.log(&query) {
            Ok(log) => Some(count_commits(&log)),
            Err(e) => {
                tracing::warn!("{}: history query failed: {}", record.subsystem, e);
                None
            }
        };

        let tier = match commits {
            _ if ambiguous => Tier::AmbiguousAuthor,
            None => Tier::QueryFailed,
            Some(count) => {
                let yearly = count as f64 * self.window.scaling_factor();
                Tier::Computed(ActivityLevel::from_yearly_rate(yearly))
            }
        };

        tracing::debug!(
            "{}: {} commits, tier {}",
            record.subsystem,
            commits.map_or_else(|| "unknown".to_string(), |c| c.to_string()),
            tier.as_str()
        );

        ScoredRecord { record, commits, tier }
    }
}
