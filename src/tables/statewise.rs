// 🗺️ State-wise layouts - tables 6, 8 and 29
//
// These tables break business down by state under a multi-row header of
// insurer names, fiscal years and metric labels spread across irregular
// column spans. Tables 6 and 8 also contribute a group-summed aggregate to
// the facts relation; table 29 stays state-level only.

use crate::config::EXCLUDED_AGGREGATE_COLUMNS;
use crate::model::{Fact, StateDetail, Value};
use crate::normalize::{parse_fiscal_year, to_absolute_currency, to_number};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::{advance_insurer, is_excluded_state};
use std::collections::BTreeMap;

// ============================================================================
// TABLE 6 - STATE-WISE INDIVIDUAL NEW BUSINESS
// ============================================================================

const T6_INSURER_ROW: usize = 2;
const T6_YEAR_ROW: usize = 3;
const T6_METRIC_ROW: usize = 4;
const T6_DATA_START: usize = 5;

/// Table 6: state-wise individual new business (policies and premium).
/// Returns the facts-level aggregate and the state detail relation.
pub fn statewise_individual(
    sheet: &Sheet,
    names: &mut NameStandardizer,
) -> (Vec<Fact>, Vec<StateDetail>) {
    let columns = metric_columns(
        sheet,
        T6_INSURER_ROW,
        T6_YEAR_ROW,
        T6_METRIC_ROW,
        |metric| {
            if metric.contains("polic") {
                Some("New Business Policy")
            } else if metric.contains("premium") {
                Some("New Business Premium")
            } else {
                None
            }
        },
    );

    let details = walk_state_rows(
        sheet,
        names,
        &columns,
        T6_DATA_START,
        "Individual",
        "Part I - Table 6",
    );
    let facts = aggregate_state_details(&details);
    (facts, details)
}

// ============================================================================
// TABLE 8 - STATE-WISE GROUP BUSINESS
// ============================================================================

const T8_INSURER_ROW: usize = 1;
const T8_YEAR_ROW: usize = 2;
const T8_METRIC_ROW: usize = 3;
const T8_DATA_START: usize = 4;

/// Table 8: state-wise group business. Each insurer span carries schemes,
/// lives covered and premium columns; only premium is extracted.
pub fn statewise_group(
    sheet: &Sheet,
    names: &mut NameStandardizer,
) -> (Vec<Fact>, Vec<StateDetail>) {
    let columns = metric_columns(
        sheet,
        T8_INSURER_ROW,
        T8_YEAR_ROW,
        T8_METRIC_ROW,
        |metric| {
            if metric.contains("premium") {
                Some("New Business Premium")
            } else {
                None
            }
        },
    );

    let details = walk_state_rows(
        sheet,
        names,
        &columns,
        T8_DATA_START,
        "Group",
        "Part I - Table 8",
    );
    let facts = aggregate_state_details(&details);
    (facts, details)
}

/// One resolved data column: (column, raw insurer, year, KPI)
type MetricColumn = (usize, String, i32, &'static str);

/// Fold the carry-forward cursor over the header columns. The insurer and
/// year both persist across blank cells; a column only becomes a data column
/// once both are resolved and its metric label maps to a KPI.
fn metric_columns(
    sheet: &Sheet,
    insurer_row: usize,
    year_row: usize,
    metric_row: usize,
    classify: impl Fn(&str) -> Option<&'static str>,
) -> Vec<MetricColumn> {
    let mut columns = Vec::new();
    let mut current_insurer: Option<String> = None;
    let mut current_year: Option<i32> = None;

    for col in 2..sheet.width() {
        advance_insurer(
            &mut current_insurer,
            sheet.text(insurer_row, col),
            EXCLUDED_AGGREGATE_COLUMNS,
        );

        if let Some(year) = sheet.text(year_row, col).and_then(|t| parse_fiscal_year(&t)) {
            current_year = Some(year);
        }

        let (Some(insurer), Some(year)) = (&current_insurer, current_year) else {
            continue;
        };
        if let Some(metric) = sheet.text(metric_row, col) {
            if let Some(kpi) = classify(&metric.to_lowercase()) {
                columns.push((col, insurer.clone(), year, kpi));
            }
        }
    }

    columns
}

/// Walk the data rows of a state-wise layout, emitting one detail record per
/// (state, resolved column) pair with a parseable value
fn walk_state_rows(
    sheet: &Sheet,
    names: &mut NameStandardizer,
    columns: &[MetricColumn],
    data_start: usize,
    segment: &str,
    source: &str,
) -> Vec<StateDetail> {
    let mut details = Vec::new();

    for row in data_start..sheet.height() {
        let Some(state) = sheet.text(row, 1) else {
            continue;
        };
        if is_excluded_state(&state) {
            continue;
        }

        for (col, insurer_raw, year, kpi) in columns {
            let insurer = names.standardize(insurer_raw);
            if insurer.is_empty() {
                continue;
            }
            let Some(cell) = sheet.cell(row, *col) else {
                continue;
            };

            // Premium cells are Crore-denominated; policy counts are plain
            let value = if *kpi == "New Business Premium" {
                to_absolute_currency(cell, true)
            } else {
                to_number(cell)
            };

            if let Some(value) = value {
                details.push(StateDetail {
                    state: state.clone(),
                    insurer,
                    year: *year,
                    individual_group: segment.to_string(),
                    kpi: kpi.to_string(),
                    value: Value::from_f64(value),
                    source: source.to_string(),
                });
            }
        }
    }

    details
}

/// Sum state details by (insurer, year, segment, KPI, source) into facts
/// with blank category and channel dimensions. Output is ordered by the
/// group key.
pub fn aggregate_state_details(details: &[StateDetail]) -> Vec<Fact> {
    let mut groups: BTreeMap<(String, i32, String, String, String), f64> = BTreeMap::new();
    for d in details {
        let key = (
            d.insurer.clone(),
            d.year,
            d.individual_group.clone(),
            d.kpi.clone(),
            d.source.clone(),
        );
        *groups.entry(key).or_insert(0.0) += d.value.as_f64();
    }

    groups
        .into_iter()
        .map(|((insurer, year, segment, kpi, source), total)| {
            Fact::new(&insurer, year, &kpi, Value::from_f64(total), &source).with_segment(&segment)
        })
        .collect()
}

// ============================================================================
// TABLE 29 - STATE-WISE DISTRIBUTION OF OFFICES
// ============================================================================

const T29_INSURER_ROW: usize = 1;
const T29_YEAR_ROW: usize = 2;
const T29_DATA_START: usize = 3;

/// Table 29: state-wise distribution of offices. Insurer names span blocks
/// of year columns; aggregate spans are dropped. Dash cells count as zero
/// offices. State-level only; nothing flows into the facts relation.
pub fn office_distribution(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<StateDetail> {
    // Resolve each insurer's column span from the header row
    let mut spans: Vec<(String, usize, usize)> = Vec::new();
    let mut current: Option<(String, usize)> = None;

    for col in 2..sheet.width() {
        let Some(label) = sheet.text(T29_INSURER_ROW, col) else {
            continue;
        };
        let lower = label.to_lowercase();
        if lower.contains("total") || lower.contains("sector") || lower.contains("grand") {
            if let Some((name, start)) = current.take() {
                spans.push((name, start, col - 1));
            }
            continue;
        }

        let insurer = names.standardize(&label);
        if insurer.is_empty() {
            continue;
        }
        if let Some((name, start)) = current.take() {
            spans.push((name, start, col - 1));
        }
        current = Some((insurer, col));
    }
    if let Some((name, start)) = current.take() {
        spans.push((name, start, sheet.width() - 1));
    }

    let mut details = Vec::new();
    for row in T29_DATA_START..sheet.height() {
        let Some(state) = sheet.text(row, 1) else {
            continue;
        };
        if is_excluded_state(&state) {
            continue;
        }

        for (insurer, start, end) in &spans {
            for col in *start..=*end {
                let Some(year) =
                    sheet.text(T29_YEAR_ROW, col).and_then(|t| parse_fiscal_year(&t))
                else {
                    continue;
                };
                if !(2014..=2025).contains(&year) {
                    continue;
                }
                let Some(cell_text) = sheet.text(row, col) else {
                    continue;
                };

                // Dashes mean no offices, not missing data
                let count = if cell_text == "-" || cell_text == "--" {
                    Some(0.0)
                } else {
                    sheet.cell(row, col).and_then(to_number).map(f64::trunc)
                };

                if let Some(count) = count {
                    details.push(StateDetail {
                        state: state.clone(),
                        insurer: insurer.clone(),
                        year,
                        individual_group: "Not Applicable".to_string(),
                        kpi: "Number of Offices".to_string(),
                        value: Value::from_f64(count),
                        source: "Part I - Table 29".to_string(),
                    });
                }
            }
        }
    }

    details
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Data;

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    /// Two insurers (one an aggregate span), two states, policies + premium
    fn individual_sheet() -> Sheet {
        Sheet::from_rows(vec![
            vec![s("Table 6: State-wise Individual New Business")],
            vec![Data::Empty],
            // insurer row: LIC spans two columns, Grand Total must be skipped
            vec![Data::Empty, s("State"), s("LIC of India"), Data::Empty, s("Grand Total"), Data::Empty],
            // year row
            vec![Data::Empty, Data::Empty, s("2023-24"), Data::Empty, s("2023-24"), Data::Empty],
            // metric row
            vec![Data::Empty, Data::Empty, s("No. of Policies"), s("Premium"), s("No. of Policies"), s("Premium")],
            vec![Data::Empty, s("Maharashtra"), Data::Float(120.0), Data::Float(10.0), Data::Float(999.0), Data::Float(99.0)],
            vec![Data::Empty, s("Karnataka"), Data::Float(80.0), Data::Float(5.5), Data::Float(888.0), Data::Float(88.0)],
            vec![Data::Empty, s("Grand Total"), Data::Float(200.0), Data::Float(15.5), Data::Empty, Data::Empty],
        ])
    }

    #[test]
    fn test_statewise_individual_detail_records() {
        let mut names = NameStandardizer::new();
        let (_, details) = statewise_individual(&individual_sheet(), &mut names);

        // 2 states x (policies + premium), aggregate columns and total row skipped
        assert_eq!(details.len(), 4);
        assert!(details.iter().all(|d| d.insurer == "LIC"));
        assert!(details.iter().all(|d| d.individual_group == "Individual"));
        assert!(details.iter().all(|d| d.year == 2024));

        let premium: Vec<_> = details
            .iter()
            .filter(|d| d.kpi == "New Business Premium")
            .collect();
        assert_eq!(premium[0].value, Value::Int(100_000_000));
        assert_eq!(premium[1].value, Value::Int(55_000_000));

        let policies: Vec<_> = details
            .iter()
            .filter(|d| d.kpi == "New Business Policy")
            .collect();
        assert_eq!(policies[0].value, Value::Int(120));
    }

    #[test]
    fn test_statewise_individual_aggregates_to_facts() {
        let mut names = NameStandardizer::new();
        let (facts, _) = statewise_individual(&individual_sheet(), &mut names);

        assert_eq!(facts.len(), 2);
        let policy_fact = facts.iter().find(|f| f.kpi == "New Business Policy").unwrap();
        assert_eq!(policy_fact.value, Value::Int(200));
        assert_eq!(policy_fact.individual_group, "Individual");
        assert_eq!(policy_fact.l1, "");
        assert_eq!(policy_fact.distribution_channel, "");

        let premium_fact = facts.iter().find(|f| f.kpi == "New Business Premium").unwrap();
        assert_eq!(premium_fact.value, Value::Int(155_000_000));
    }

    #[test]
    fn test_statewise_group_extracts_premium_only() {
        let sheet = Sheet::from_rows(vec![
            vec![s("Table 8: State-wise Group Business")],
            vec![Data::Empty, s("State"), s("SBI Life"), Data::Empty, Data::Empty],
            vec![Data::Empty, Data::Empty, s("2023-24"), Data::Empty, Data::Empty],
            vec![Data::Empty, Data::Empty, s("No. of Schemes"), s("Lives Covered"), s("Premium")],
            vec![Data::Empty, s("Kerala"), Data::Float(12.0), Data::Float(3400.0), Data::Float(2.5)],
        ]);

        let mut names = NameStandardizer::new();
        let (facts, details) = statewise_group(&sheet, &mut names);

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].kpi, "New Business Premium");
        assert_eq!(details[0].individual_group, "Group");
        assert_eq!(details[0].value, Value::Int(25_000_000));

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].source, "Part I - Table 8");
    }

    #[test]
    fn test_aggregate_is_grouped_and_ordered() {
        let detail = |insurer: &str, kpi: &str, value: f64| StateDetail {
            state: "X".to_string(),
            insurer: insurer.to_string(),
            year: 2024,
            individual_group: "Individual".to_string(),
            kpi: kpi.to_string(),
            value: Value::from_f64(value),
            source: "Part I - Table 6".to_string(),
        };

        let facts = aggregate_state_details(&[
            detail("SBI Life", "New Business Policy", 10.0),
            detail("LIC", "New Business Policy", 5.0),
            detail("SBI Life", "New Business Policy", 7.0),
        ]);

        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].insurer, "LIC");
        assert_eq!(facts[0].value, Value::Int(5));
        assert_eq!(facts[1].insurer, "SBI Life");
        assert_eq!(facts[1].value, Value::Int(17));
    }

    #[test]
    fn test_office_distribution() {
        let sheet = Sheet::from_rows(vec![
            vec![s("Table 29: Offices of Life Insurers")],
            // insurer spans: LIC cols 2-3, aggregate col 4 closes the span
            vec![Data::Empty, s("State"), s("LIC of India"), Data::Empty, s("Industry Total")],
            vec![Data::Empty, Data::Empty, s("2022-23"), s("2023-24"), s("2023-24")],
            vec![Data::Empty, s("Maharashtra"), Data::Float(45.0), Data::Float(47.0), Data::Float(400.0)],
            vec![Data::Empty, s("Goa"), s("-"), Data::Float(3.0), Data::Float(30.0)],
            vec![Data::Empty, s("Total"), Data::Float(45.0), Data::Float(50.0), Data::Float(430.0)],
        ]);

        let mut names = NameStandardizer::new();
        let details = office_distribution(&sheet, &mut names);

        assert_eq!(details.len(), 4);
        assert!(details.iter().all(|d| d.insurer == "LIC"));
        assert!(details.iter().all(|d| d.kpi == "Number of Offices"));
        assert!(details.iter().all(|d| d.individual_group == "Not Applicable"));

        // Dash renders as zero offices
        let goa_2023 = details
            .iter()
            .find(|d| d.state == "Goa" && d.year == 2023)
            .unwrap();
        assert_eq!(goa_2023.value, Value::Int(0));
    }
}
