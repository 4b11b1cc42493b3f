//! Time window of the activity query and its yearly scaling factor.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

const DAYS_PER_YEAR: f64 = 365.0;

/// The span `[since, until)` that commits are counted over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityWindow {
    since: NaiveDate,
    until: NaiveDate,
}

impl ActivityWindow {
    /// `since` must be strictly before `until`; an empty window has no rate.
    pub fn new(since: NaiveDate, until: NaiveDate) -> Result<Self> {
        if since >= until {
            anyhow::bail!("Activity window start {since} must be before {until}");
        }
        Ok(Self { since, until })
    }

    pub fn since(&self) -> NaiveDate {
        self.since
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    pub fn days(&self) -> i64 {
        (self.until - self.since).num_days()
    }

    /// Converts a count over this window into a count per year.
    pub fn scaling_factor(&self) -> f64 {
        DAYS_PER_YEAR / self.days() as f64
    }
}

/// One year before `today`.
pub fn default_since(today: NaiveDate) -> NaiveDate {
    today - Duration::days(365)
}

/// Parse a `--since` value (`YYYY-MM-DD`).
pub fn parse_since(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid --since date '{value}': expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_since(s).expect("date")
    }

    #[test]
    fn one_year_window_scales_to_one() {
        let window = ActivityWindow::new(date("2023-03-01"), date("2024-02-29")).expect("window");
        assert_eq!(window.days(), 365);
        assert!((window.scaling_factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_window_scales_up() {
        let window = ActivityWindow::new(date("2024-01-01"), date("2024-01-31")).expect("window");
        assert_eq!(window.days(), 30);
        assert!((window.scaling_factor() - 365.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn empty_or_inverted_window_is_rejected() {
        assert!(ActivityWindow::new(date("2024-01-01"), date("2024-01-01")).is_err());
        assert!(ActivityWindow::new(date("2024-02-01"), date("2024-01-01")).is_err());
    }

    #[test]
    fn default_since_is_365_days_back() {
        assert_eq!(default_since(date("2024-06-15")), date("2023-06-16"));
    }

    #[test]
    fn malformed_since_is_rejected() {
        assert!(parse_since("last year").is_err());
        assert!(parse_since("2024-13-01").is_err());
        assert_eq!(parse_since(" 2024-01-02 ").expect("trimmed"), date("2024-01-02"));
    }
}
