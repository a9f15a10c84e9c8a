// ✅ Validator - advisory data-quality checks over the facts relation
//
// Every check appends exactly one log entry; nothing here filters or
// mutates the data. The QA log is append-only and ends up as one of the
// run artifacts.

use crate::config::{VALID_L1, VALID_SEGMENTS};
use crate::model::Fact;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// QA LOG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QaStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "INFO")]
    Info,
}

impl QaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QaStatus::Pass => "PASS",
            QaStatus::Fail => "FAIL",
            QaStatus::Warning => "WARNING",
            QaStatus::Info => "INFO",
        }
    }
}

impl fmt::Display for QaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QaEntry {
    #[serde(rename = "Check")]
    pub check: String,
    #[serde(rename = "Status")]
    pub status: QaStatus,
    #[serde(rename = "Details")]
    pub details: String,
}

impl QaEntry {
    pub fn pass(check: &str, details: &str) -> Self {
        QaEntry {
            check: check.to_string(),
            status: QaStatus::Pass,
            details: details.to_string(),
        }
    }

    pub fn warning(check: &str, details: &str) -> Self {
        QaEntry {
            check: check.to_string(),
            status: QaStatus::Warning,
            details: details.to_string(),
        }
    }

    pub fn info(check: &str, details: &str) -> Self {
        QaEntry {
            check: check.to_string(),
            status: QaStatus::Info,
            details: details.to_string(),
        }
    }
}

// ============================================================================
// FACTS VALIDATION
// ============================================================================

/// Run the fixed check sequence over the combined facts relation.
/// All findings are advisory; validation never aborts the run.
pub fn validate_facts(facts: &[Fact]) -> Vec<QaEntry> {
    let mut log = Vec::new();

    // The facts relation is a typed struct, so column presence is structural
    log.push(QaEntry::pass("Required Columns", "All required columns present"));

    // L1 domain membership
    let invalid_l1: BTreeSet<&str> = facts
        .iter()
        .map(|f| f.l1.as_str())
        .filter(|l1| !VALID_L1.contains(l1))
        .collect();
    if invalid_l1.is_empty() {
        log.push(QaEntry::pass("L1 Values", "All L1 values valid"));
    } else {
        let listed: Vec<&str> = invalid_l1.into_iter().collect();
        log.push(QaEntry::warning(
            "L1 Values",
            &format!("Invalid L1 values: {}", listed.join(", ")),
        ));
    }

    // Individual/Group domain membership
    let invalid_segments: BTreeSet<&str> = facts
        .iter()
        .map(|f| f.individual_group.as_str())
        .filter(|seg| !VALID_SEGMENTS.contains(seg))
        .collect();
    if invalid_segments.is_empty() {
        log.push(QaEntry::pass(
            "Individual/Group Values",
            "All Individual/Group values valid",
        ));
    } else {
        let listed: Vec<&str> = invalid_segments.into_iter().collect();
        log.push(QaEntry::warning(
            "Individual/Group Values",
            &format!("Invalid values: {}", listed.join(", ")),
        ));
    }

    // Persistency values must sit on the 0-100 scale
    let persistency: Vec<&Fact> = facts
        .iter()
        .filter(|f| f.kpi.contains("Persistency"))
        .collect();
    if !persistency.is_empty() {
        let out_of_range = persistency
            .iter()
            .filter(|f| {
                let v = f.value.as_f64();
                !(0.0..=100.0).contains(&v)
            })
            .count();
        if out_of_range > 0 {
            log.push(QaEntry::warning(
                "Persistency Range",
                &format!("{} persistency values out of 0-100 range", out_of_range),
            ));
        } else {
            log.push(QaEntry::pass(
                "Persistency Range",
                "All persistency values in 0-100 range",
            ));
        }
    }

    // Value is non-nullable in the materialized relation; keep the check for
    // report parity with the run artifacts
    log.push(QaEntry::pass("Null Values", "No null values in Value column"));

    // Summary stats
    log.push(QaEntry::info(
        "Record Count",
        &format!("Total records: {}", facts.len()),
    ));

    let insurers: BTreeSet<&str> = facts.iter().map(|f| f.insurer.as_str()).collect();
    log.push(QaEntry::info("Unique Insurers", &format!("Count: {}", insurers.len())));

    let year_range = match (
        facts.iter().map(|f| f.year).min(),
        facts.iter().map(|f| f.year).max(),
    ) {
        (Some(min), Some(max)) => format!("{} - {}", min, max),
        _ => "no records".to_string(),
    };
    log.push(QaEntry::info("Year Range", &year_range));

    // Distinct KPIs in first-appearance order
    let mut kpis: Vec<&str> = Vec::new();
    for fact in facts {
        if !kpis.contains(&fact.kpi.as_str()) {
            kpis.push(&fact.kpi);
        }
    }
    log.push(QaEntry::info("KPIs", &kpis.join(", ")));

    log
}

// ============================================================================
// TESTS
// ============================================================================
