//! HTML report output
//!
//! Builds markup from a [`RenderedReport`]. Report fields are already
//! escaped; the only unescaped text written here is this module's own
//! markup and the static status icons.

use std::fmt::Write as _;

use crate::models::display::{RenderedReport, TestCard};

/// Render the results region: summary plus the list of check cards.
pub fn report_html(report: &RenderedReport) -> String {
    let mut html = String::new();

    html.push_str("<section id=\"results\" class=\"results\">\n");
    let _ = writeln!(
        html,
        "  <div class=\"results-meta\">\n    <span id=\"resultDomain\">{}</span>\n    <span id=\"resultNameserver\">{}</span>\n    <span id=\"resultTime\">{}</span>\n  </div>",
        report.domain, report.nameserver, report.scanned_at
    );

    let _ = writeln!(
        html,
        "  <div class=\"stats\">\n    <div class=\"score-card {tier}\"><span id=\"scoreValue\">{percent}</span></div>\n    <div class=\"stat safe\"><span id=\"safeCount\">{safe}</span> safe</div>\n    <div class=\"stat warning\"><span id=\"warningCount\">{warning}</span> warning</div>\n    <div class=\"stat vulnerable\"><span id=\"vulnerableCount\">{vulnerable}</span> vulnerable</div>\n  </div>",
        tier = report.score.tier.as_str(),
        percent = report.score.percent,
        safe = report.counts.safe,
        warning = report.counts.warning,
        vulnerable = report.counts.vulnerable,
    );

    html.push_str("  <div id=\"testsContainer\" class=\"tests\">\n");
    for card in &report.cards {
        html.push_str(&card_html(card));
    }
    html.push_str("  </div>\n</section>\n");

    html
}

/// Render a single check card.
pub fn card_html(card: &TestCard) -> String {
    let mut html = String::new();
    let status = card.status.as_str();
    let severity = card.severity.as_str();

    let _ = writeln!(
        html,
        "    <div class=\"test-card\" style=\"animation-delay: {:.1}s\">",
        card.delay_ms as f64 / 1000.0
    );
    let _ = writeln!(
        html,
        "      <div class=\"test-header\">\n        <div class=\"test-status-icon {status}\">{icon}</div>\n        <div class=\"test-info\">\n          <div class=\"test-title\">{name} <span class=\"severity-badge {severity}\">{severity}</span></div>\n          <div class=\"test-description\">{description}</div>\n        </div>\n      </div>",
        icon = card.icon,
        name = card.name,
        description = card.description,
    );

    if let Some(details) = &card.details {
        html.push_str("      <div class=\"test-details\">\n        <ul>\n");
        for detail in details {
            let _ = writeln!(html, "          <li>{}</li>", detail);
        }
        html.push_str("        </ul>\n      </div>\n");
    }

    html.push_str("    </div>\n");
    html
}

/// Wrap the results region in a self-contained page for saving to disk.
pub fn standalone_document(report: &RenderedReport) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>DNS scan: {domain}</title>\n<style>{style}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        domain = report.domain,
        style = REPORT_STYLE,
        body = report_html(report),
    )
}

const REPORT_STYLE: &str = "body{font-family:system-ui,sans-serif;background:#0b1020;color:#e6e9f2;margin:2rem}\
.results-meta span{margin-right:1.5rem;opacity:.8}\
.stats{display:flex;gap:1rem;margin:1.5rem 0}\
.score-card{border:3px solid;border-radius:12px;padding:1rem 1.5rem;font-size:2rem}\
.score-card.good{border-color:#22c55e}.score-card.caution{border-color:#f59e0b}.score-card.poor{border-color:#ef4444}\
.stat{padding:1rem;border-radius:12px;background:#151b30}\
.test-card{background:#151b30;border-radius:12px;padding:1rem;margin-bottom:1rem}\
.test-header{display:flex;gap:1rem}.test-status-icon svg{width:28px;height:28px}\
.test-status-icon.safe{color:#22c55e}.test-status-icon.warning{color:#f59e0b}\
.test-status-icon.vulnerable{color:#ef4444}.test-status-icon.error{color:#94a3b8}\
.severity-badge{font-size:.75rem;text-transform:uppercase;padding:.1rem .5rem;border-radius:6px;background:#334155}\
.severity-badge.high,.severity-badge.critical{background:#7f1d1d}.severity-badge.medium{background:#78350f}\
.test-details li{font-family:ui-monospace,monospace;font-size:.85rem}";
