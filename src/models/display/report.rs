//! Scan report display model
//!
//! [`render`] turns a [`ScanResult`] into a [`RenderedReport`]: every string
//! that came from the service is escaped here, once, so the back-ends can
//! insert fields into markup as-is. [`render_for`] applies the same rules with
//! terminal sanitizing instead of markup escaping, for the pretty view.

use log::debug;
use serde::Serialize;

use crate::client::models::{ScanResult, ScanStats, Severity, TestResult, TestStatus};
use crate::output::escape::{escape_html, sanitize_terminal};
use crate::output::formatters::format_timestamp_local;

/// Entry delay between consecutive cards
pub const CARD_STAGGER_MS: u64 = 100;

/// Where the rendered text ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    /// HTML markup: `& < > " '` escaped
    Markup,
    /// A terminal: control characters replaced
    Terminal,
}

impl TextTarget {
    fn apply(self, text: &str) -> String {
        match self {
            TextTarget::Markup => escape_html(text),
            TextTarget::Terminal => sanitize_terminal(text),
        }
    }
}

/// Score band used for visual emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Good,
    Caution,
    Poor,
}

impl ScoreTier {
    /// `>= 80` good, `50..80` caution, below 50 poor. Boundaries go to the
    /// higher tier.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreTier::Good
        } else if score >= 50 {
            ScoreTier::Caution
        } else {
            ScoreTier::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Good => "good",
            ScoreTier::Caution => "caution",
            ScoreTier::Poor => "poor",
        }
    }
}

/// Score summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBlock {
    pub value: u32,
    /// e.g. `87%`
    pub percent: String,
    pub tier: ScoreTier,
}

/// Per-status counts exactly as the service reported them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub safe: u32,
    pub warning: u32,
    pub vulnerable: u32,
}

/// One rendered check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCard {
    /// Position in the scan's test list
    pub index: usize,
    pub delay_ms: u64,
    pub status: TestStatus,
    /// Inline SVG for `status`
    #[serde(skip)]
    pub icon: &'static str,
    pub severity: Severity,
    /// Escaped
    pub name: String,
    /// Escaped
    pub description: String,
    /// Escaped evidence lines; `None` when the check had none
    pub details: Option<Vec<String>>,
}

/// Display view of one scan.
///
/// Text fields are escaped for the [`TextTarget`] the report was rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    /// Escaped
    pub domain: String,
    /// Escaped
    pub nameserver: String,
    /// Local, human-readable, escaped
    pub scanned_at: String,
    pub score: ScoreBlock,
    pub counts: StatusCounts,
    pub cards: Vec<TestCard>,
}

/// Render a scan result for markup.
///
/// Counts are displayed as given even when they disagree with the number of
/// tests.
pub fn render(result: &ScanResult) -> RenderedReport {
    render_for(result, TextTarget::Markup)
}

/// Render a scan result with service strings prepared for `target`.
pub fn render_for(result: &ScanResult, target: TextTarget) -> RenderedReport {
    // The service leaves `missing` and `error` checks out of the counts, so a
    // mismatch is routine.
    if !result.stats.is_consistent_with(&result.tests) {
        debug!(
            "Scan stats for {} count {} checks but {} were returned",
            result.domain,
            result.stats.counted(),
            result.tests.len()
        );
    }

    RenderedReport {
        domain: target.apply(&result.domain),
        nameserver: target.apply(&result.nameserver),
        scanned_at: target.apply(&format_timestamp_local(&result.timestamp)),
        score: score_block(&result.stats),
        counts: StatusCounts {
            safe: result.stats.safe,
            warning: result.stats.warning,
            vulnerable: result.stats.vulnerable,
        },
        cards: result
            .tests
            .iter()
            .enumerate()
            .map(|(index, test)| render_card(index, test, target))
            .collect(),
    }
}

fn score_block(stats: &ScanStats) -> ScoreBlock {
    ScoreBlock {
        value: stats.score,
        percent: format!("{}%", stats.score),
        tier: ScoreTier::from_score(stats.score),
    }
}

fn render_card(index: usize, test: &TestResult, target: TextTarget) -> TestCard {
    let status = test.resolved_status();
    let details = if test.details.is_empty() {
        None
    } else {
        Some(test.details.iter().map(|d| target.apply(d)).collect())
    };

    TestCard {
        index,
        delay_ms: index as u64 * CARD_STAGGER_MS,
        status,
        icon: status_icon(status),
        severity: test.resolved_severity(),
        name: target.apply(&test.name),
        description: target.apply(&test.description),
        details,
    }
}

/// Inline SVG icon for a resolved status.
pub fn status_icon(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Safe => ICON_SAFE,
        TestStatus::Warning => ICON_WARNING,
        TestStatus::Vulnerable => ICON_VULNERABLE,
        TestStatus::Error => ICON_ERROR,
    }
}

const ICON_SAFE: &str = r#"<svg class="icon-safe" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M22 4L12 14.01l-3-3" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const ICON_WARNING: &str = r#"<svg class="icon-warning" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M12 9v4M12 17h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const ICON_VULNERABLE: &str = r#"<svg class="icon-vulnerable" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M15 9L9 15M9 9l6 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const ICON_ERROR: &str = r#"<svg class="icon-error" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M12 8v4M12 16h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
