// 🛒 Distribution channel layouts - tables 100 and 102
//
// The two channel tables have a stable, known column layout, so their
// column -> (channel, metric) maps are fixed rather than sniffed. Data rows
// are gated on a numeric serial number; the interleaved percentage rows
// carry no serial and drop out. Both tables cover a single fiscal year.

use crate::model::{Fact, Value};
use crate::normalize::{normalize_channel, to_absolute_currency, to_number};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::is_section_header;

/// The channel tables report the 2023-24 fiscal year only
const REPORT_YEAR: i32 = 2024;

const DATA_START: usize = 5;

#[derive(Clone, Copy, PartialEq)]
enum Metric {
    Policies,
    Premium,
}

/// Table 100 column map: each channel has a policies column followed by a
/// premium column. The trailing total columns are deliberately absent.
const INDIVIDUAL_COLUMNS: &[(usize, &str, Metric)] = &[
    (2, "Individual Agents", Metric::Policies),
    (3, "Individual Agents", Metric::Premium),
    (4, "Corporate Agents - Banks", Metric::Policies),
    (5, "Corporate Agents - Banks", Metric::Premium),
    (6, "Corporate Agents - Others", Metric::Policies),
    (7, "Corporate Agents - Others", Metric::Premium),
    (8, "Brokers", Metric::Policies),
    (9, "Brokers", Metric::Premium),
    (10, "Direct Selling", Metric::Policies),
    (11, "Direct Selling", Metric::Premium),
    (12, "MI Agents", Metric::Policies),
    (13, "MI Agents", Metric::Premium),
    (14, "CSCs", Metric::Policies),
    (15, "CSCs", Metric::Premium),
    (16, "Web Aggregators", Metric::Policies),
    (17, "Web Aggregators", Metric::Premium),
    (18, "IMF", Metric::Policies),
    (19, "IMF", Metric::Premium),
    (20, "Online", Metric::Policies),
    (21, "Online", Metric::Premium),
    (22, "POS", Metric::Policies),
    (23, "POS", Metric::Premium),
    (24, "Others", Metric::Policies),
    (25, "Others", Metric::Premium),
];

/// Table 102 column map: each channel block is (schemes, premium, lives);
/// only the premium column is extracted.
const GROUP_PREMIUM_COLUMNS: &[(usize, &str)] = &[
    (3, "Individual Agents"),
    (6, "Corporate Agents - Banks"),
    (9, "Corporate Agents - Others"),
    (12, "Brokers"),
    (15, "Direct Selling"),
    (18, "MI Agents"),
    (21, "CSCs"),
    (24, "Web Aggregators"),
    (27, "IMF"),
    (30, "Online"),
    (33, "POS"),
    (36, "Others"),
];

/// Table 100: individual new business by distribution channel
pub fn individual_channel_business(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    let mut records = Vec::new();

    for row in DATA_START..sheet.height() {
        let Some(insurer) = channel_row_insurer(sheet, row, names) else {
            continue;
        };

        for &(col, channel, metric) in INDIVIDUAL_COLUMNS {
            let Some(cell) = sheet.cell(row, col) else {
                continue;
            };
            let (value, kpi) = match metric {
                Metric::Premium => (to_absolute_currency(cell, true), "New Business Premium"),
                Metric::Policies => (to_number(cell), "New Business Policy"),
            };
            if let Some(value) = value {
                records.push(
                    Fact::new(&insurer, REPORT_YEAR, kpi, Value::from_f64(value), "Part V - Table 100")
                        .with_segment("Individual")
                        .with_channel(&normalize_channel(channel)),
                );
            }
        }
    }

    records
}

/// Table 102: group new business premium by distribution channel
pub fn group_channel_business(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    let mut records = Vec::new();

    for row in DATA_START..sheet.height() {
        let Some(insurer) = channel_row_insurer(sheet, row, names) else {
            continue;
        };

        for &(col, channel) in GROUP_PREMIUM_COLUMNS {
            let Some(cell) = sheet.cell(row, col) else {
                continue;
            };
            if let Some(value) = to_absolute_currency(cell, true) {
                records.push(
                    Fact::new(
                        &insurer,
                        REPORT_YEAR,
                        "New Business Premium",
                        Value::from_f64(value),
                        "Part V - Table 102",
                    )
                    .with_segment("Group")
                    .with_channel(&normalize_channel(channel)),
                );
            }
        }
    }

    records
}

/// Resolve the insurer of a channel-table data row, or None when the row is
/// a percentage row (no numeric serial), a section header, or unresolvable
fn channel_row_insurer(
    sheet: &Sheet,
    row: usize,
    names: &mut NameStandardizer,
) -> Option<String> {
    if !sheet.is_numeric_cell(row, 0) {
        return None;
    }
    let insurer_raw = sheet.text(row, 1)?;
    if is_section_header(sheet, row) {
        return None;
    }
    let insurer = names.standardize(&insurer_raw);
    if insurer.is_empty() {
        None
    } else {
        Some(insurer)
    }
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

    fn row_with(cells: Vec<(usize, Data)>, width: usize) -> Vec<Data> {
        let mut row = vec![Data::Empty; width];
        for (col, cell) in cells {
            row[col] = cell;
        }
        row
    }

    fn individual_sheet() -> Sheet {
        let width = 28;
        let mut rows = vec![vec![Data::Empty; width]; DATA_START];
        // data row: serial, insurer, agents policies/premium, banks policies
        rows.push(row_with(
            vec![
                (0, Data::Float(1.0)),
                (1, s("LIC of India")),
                (2, Data::Float(1234.0)),
                (3, Data::Float(10.5)),
                (4, Data::Float(56.0)),
            ],
            width,
        ));
        // percentage row: serial column holds a string, so it is skipped
        rows.push(row_with(
            vec![(0, s("%")), (1, s("LIC of India")), (2, Data::Float(61.7))],
            width,
        ));
        Sheet::from_rows(rows)
    }

    #[test]
    fn test_individual_channels_emit_policies_and_premium() {
        let mut names = NameStandardizer::new();
        let facts = individual_channel_business(&individual_sheet(), &mut names);

        assert_eq!(facts.len(), 3);

        let policies = &facts[0];
        assert_eq!(policies.kpi, "New Business Policy");
        assert_eq!(policies.distribution_channel, "Individual Agents");
        assert_eq!(policies.value, Value::Int(1234));
        assert_eq!(policies.year, 2024);
        assert_eq!(policies.individual_group, "Individual");

        let premium = &facts[1];
        assert_eq!(premium.kpi, "New Business Premium");
        assert_eq!(premium.value, Value::Int(105_000_000));

        let banks = &facts[2];
        assert_eq!(banks.distribution_channel, "Corporate Agents - Banks");
        assert_eq!(banks.kpi, "New Business Policy");
    }

    #[test]
    fn test_percentage_rows_are_skipped() {
        let mut names = NameStandardizer::new();
        let facts = individual_channel_business(&individual_sheet(), &mut names);
        // Only the serial-numbered row contributes
        assert!(facts.iter().all(|f| f.value != Value::Float(61.7)));
    }

    #[test]
    fn test_group_channels_premium_only() {
        let width = 38;
        let mut rows = vec![vec![Data::Empty; width]; DATA_START];
        rows.push(row_with(
            vec![
                (0, Data::Float(1.0)),
                (1, s("SBI Life")),
                (2, Data::Float(12.0)),  // schemes - ignored
                (3, Data::Float(2.5)),   // premium
                (4, Data::Float(900.0)), // lives - ignored
                (6, Data::Float(1.0)),   // banks premium
            ],
            width,
        ));
        let sheet = Sheet::from_rows(rows);

        let mut names = NameStandardizer::new();
        let facts = group_channel_business(&sheet, &mut names);

        assert_eq!(facts.len(), 2);
        assert!(facts.iter().all(|f| f.kpi == "New Business Premium"));
        assert!(facts.iter().all(|f| f.individual_group == "Group"));
        assert_eq!(facts[0].distribution_channel, "Individual Agents");
        assert_eq!(facts[0].value, Value::Int(25_000_000));
        assert_eq!(facts[1].distribution_channel, "Corporate Agents - Banks");
        assert_eq!(facts[1].value, Value::Int(10_000_000));
    }
}
