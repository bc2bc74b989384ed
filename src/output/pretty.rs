//! Pretty terminal output for scan reports

use colored::{ColoredString, Colorize};

use crate::client::models::{Severity, TestStatus};
use crate::models::ScoreTier;
use crate::models::display::{RenderedReport, TestCard};

const RULE: &str = "══════════════════════════════════════════════════════";
const THIN_RULE: &str = "────────────────────────────────────────────────────";

/// Format a rendered report for the terminal.
///
/// Expects a report rendered with `TextTarget::Terminal`, so service strings
/// are already free of escape sequences.
pub fn format_report(report: &RenderedReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Scan: {}", report.domain.bold()));
    lines.push(RULE.to_string());
    let nameserver = if report.nameserver.is_empty() {
        "--"
    } else {
        report.nameserver.as_str()
    };
    lines.push(format!("Nameserver: {}", nameserver));
    lines.push(format!("Scanned:    {}", report.scanned_at));
    lines.push(String::new());

    lines.push(format!(
        "Score: {}   {} safe   {} warning   {} vulnerable",
        tier_color(report.score.tier, &report.score.percent).bold(),
        report.counts.safe.to_string().green(),
        report.counts.warning.to_string().yellow(),
        report.counts.vulnerable.to_string().red(),
    ));

    lines.push(String::new());
    lines.push("Checks".to_string());
    lines.push(THIN_RULE.to_string());

    if report.cards.is_empty() {
        lines.push("  No checks returned".to_string());
    }
    for card in &report.cards {
        lines.extend(format_card(card));
    }

    lines.join("\n")
}

fn format_card(card: &TestCard) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} {}",
        status_marker(card.status),
        card.name.bold(),
        severity_badge(card.severity)
    )];
    if !card.description.is_empty() {
        lines.push(format!("    {}", card.description.dimmed()));
    }
    for detail in card.details.iter().flatten() {
        lines.push(format!("    • {}", detail));
    }
    lines
}

fn tier_color(tier: ScoreTier, text: &str) -> ColoredString {
    match tier {
        ScoreTier::Good => text.green(),
        ScoreTier::Caution => text.yellow(),
        ScoreTier::Poor => text.red(),
    }
}

fn status_marker(status: TestStatus) -> ColoredString {
    match status {
        TestStatus::Safe => "✓".green(),
        TestStatus::Warning => "⚠".yellow(),
        TestStatus::Vulnerable => "✗".red(),
        TestStatus::Error => "?".dimmed(),
    }
}

fn severity_badge(severity: Severity) -> ColoredString {
    let label = format!("[{}]", severity.as_str().to_uppercase());
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.dimmed(),
    }
}
