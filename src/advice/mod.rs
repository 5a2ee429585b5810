//! Recommendation engine: QuickScan → AdviceReport
//!
//! Pure and deterministic. Sector and challenges are compared lowercased,
//! employees numerically. See [`rules`] for the decision table.

pub mod rules;

use tracing::debug;

use crate::schema::{AdviceItem, AdviceReport, QuickScan};
use rules::{ScanProfile, FALLBACK, RULES};

/// Summary attached to every report
pub const SUMMARY: &str = "We hebben kansen geïdentificeerd om tijd te besparen en kwaliteit te verhogen met gerichte AI-workflows.";

/// Evaluate all rules against a scan
pub fn evaluate(scan: &QuickScan) -> AdviceReport {
    let profile = ScanProfile::new(&scan.sector, scan.employees, &scan.challenges);
    let recommendations = recommend(&profile);

    AdviceReport {
        summary: SUMMARY.to_string(),
        recommendations,
    }
}

/// Items of every matching rule in table order, or the fallback item
pub fn recommend(profile: &ScanProfile) -> Vec<AdviceItem> {
    let mut items = Vec::new();

    for rule in &RULES {
        if (rule.applies)(profile) {
            debug!(rule = rule.name, "Advice rule matched");
            items.extend(rule.items.iter().map(|t| t.to_item()));
        }
    }

    if items.is_empty() {
        debug!("No advice rule matched, using fallback");
        items.push(FALLBACK.to_item());
    }

    items
}
