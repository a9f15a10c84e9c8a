// 🚂 Pipeline - fixed-order extraction over the two handbook workbooks
//
// One run: open both workbooks, run every table parser in a fixed order,
// union and deduplicate the facts, validate, and bundle the artifacts.
// Parsers that find nothing contribute nothing; only a missing workbook or
// sheet aborts the run.

use crate::combine::combine;
use crate::model::{Fact, FundDetail, SolvencyDetail, StateDetail};
use crate::output;
use crate::sheet::Workbook;
use crate::standardize::{Crosswalk, NameStandardizer};
use crate::tables::{channels, funds, in_force, persistency, premium, solvency, statewise};
use crate::validate::{validate_facts, QaEntry};
use anyhow::Result;
use log::info;
use std::path::Path;

/// Everything a run produces, held in memory until written once at the end
pub struct EtlOutput {
    pub facts: Vec<Fact>,
    pub state_breakdown: Vec<StateDetail>,
    pub fund_detail: Vec<FundDetail>,
    pub solvency_detail: Vec<SolvencyDetail>,
    pub crosswalk: Crosswalk,
    pub qa_log: Vec<QaEntry>,
}

/// Run the full extraction over the Part I and Part V workbooks
pub fn run(part1_path: &Path, part5_path: &Path) -> Result<EtlOutput> {
    let mut part1 = Workbook::open(part1_path)?;
    let mut part5 = Workbook::open(part5_path)?;

    let mut names = NameStandardizer::new();
    let mut qa_log: Vec<QaEntry> = Vec::new();
    let mut fact_batches: Vec<Vec<Fact>> = Vec::new();
    let mut state_breakdown: Vec<StateDetail> = Vec::new();

    // --- Part I ---

    info!("Table 2: Total Premium");
    let batch = premium::total_premium(&part1.sheet("2")?, &mut names);
    log_extraction(&mut qa_log, "Table 2", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 3: New Business Premium");
    let batch = premium::new_business_premium(&part1.sheet("3")?, &mut names);
    log_extraction(&mut qa_log, "Table 3", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 6: State-wise Individual New Business");
    let (batch, details) = statewise::statewise_individual(&part1.sheet("6")?, &mut names);
    log_extraction(&mut qa_log, "Table 6", details.len(), "state records");
    push_batch(&mut fact_batches, batch);
    state_breakdown.extend(details);

    info!("Table 8: State-wise Group Business");
    let (batch, details) = statewise::statewise_group(&part1.sheet("8")?, &mut names);
    log_extraction(&mut qa_log, "Table 8", details.len(), "state records");
    push_batch(&mut fact_batches, batch);
    state_breakdown.extend(details);

    info!("Table 10: Policies in Force");
    let batch = in_force::policies_in_force(&part1.sheet("10")?, &mut names);
    log_extraction(&mut qa_log, "Table 10", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    // The sheet name carries a trailing space in the source workbook
    info!("Table 11: Sum Assured in Force");
    let batch = in_force::sum_assured_in_force(&part1.sheet("11 ")?, &mut names);
    log_extraction(&mut qa_log, "Table 11", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 12: Linked/Non-Linked Premium");
    let batch = premium::linked_premium_split(&part1.sheet("12")?, &mut names);
    log_extraction(&mut qa_log, "Table 12", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 21: Assets Under Management");
    let (batch, fund_detail) = funds::assets_under_management(&part1.sheet("21")?, &mut names);
    log_extraction(&mut qa_log, "Table 21", fund_detail.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 23: Solvency Ratio");
    let (batch, solvency_detail) = solvency::solvency_ratio(&part1.sheet("23")?, &mut names);
    log_extraction(&mut qa_log, "Table 23", solvency_detail.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 28: Persistency");
    let batch = persistency::persistency(&part1.sheet("28")?, &mut names);
    log_extraction(&mut qa_log, "Table 28", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 29: Number of Offices");
    let details = statewise::office_distribution(&part1.sheet("29")?, &mut names);
    log_extraction(&mut qa_log, "Table 29", details.len(), "state-level records");
    state_breakdown.extend(details);

    // --- Part V ---

    info!("Table 100: Individual New Business by Channel");
    let batch = channels::individual_channel_business(&part5.sheet("100")?, &mut names);
    log_extraction(&mut qa_log, "Table 100", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    info!("Table 102: Group New Business by Channel");
    let batch = channels::group_channel_business(&part5.sheet("102")?, &mut names);
    log_extraction(&mut qa_log, "Table 102", batch.len(), "records");
    push_batch(&mut fact_batches, batch);

    // Union, dedup, validate
    let combined = combine(fact_batches);
    if combined.duplicates_removed > 0 {
        qa_log.push(QaEntry::info(
            "Deduplication",
            &format!("Removed {} duplicates", combined.duplicates_removed),
        ));
    }
    qa_log.extend(validate_facts(&combined.facts));

    Ok(EtlOutput {
        facts: combined.facts,
        state_breakdown,
        fund_detail,
        solvency_detail,
        crosswalk: names.into_crosswalk(),
        qa_log,
    })
}

/// Run the pipeline and write all artifacts under the output directory
pub fn run_and_write(part1_path: &Path, part5_path: &Path, out_dir: &Path) -> Result<EtlOutput> {
    let result = run(part1_path, part5_path)?;
    output::write_outputs(out_dir, &result)?;
    Ok(result)
}

fn push_batch(batches: &mut Vec<Vec<Fact>>, batch: Vec<Fact>) {
    if !batch.is_empty() {
        batches.push(batch);
    }
}

/// One PASS entry per successfully-extracted table, in processing order
fn log_extraction(qa_log: &mut Vec<QaEntry>, table: &str, count: usize, unit: &str) {
    if count > 0 {
        qa_log.push(QaEntry::pass(
            &format!("{} Extraction", table),
            &format!("{} {}", count, unit),
        ));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::QaStatus;

    #[test]
    fn test_log_extraction_skips_empty_tables() {
        let mut log = Vec::new();
        log_extraction(&mut log, "Table 2", 0, "records");
        assert!(log.is_empty());

        log_extraction(&mut log, "Table 2", 12, "records");
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].check, "Table 2 Extraction");
        assert_eq!(log[0].status, QaStatus::Pass);
        assert_eq!(log[0].details, "12 records");
    }

    #[test]
    fn test_missing_workbook_is_fatal() {
        let err = run(
            Path::new("/nonexistent/Part I.xlsx"),
            Path::new("/nonexistent/Part V.xlsx"),
        );
        assert!(err.is_err());
    }
}
