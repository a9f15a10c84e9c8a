// ⚖️ Solvency ratio - table 23
//
// Period columns carry "as on" dates, quarterly plus the March year-end.
// Every period lands in the detail relation; only March periods represent
// the fiscal year-end and reach the facts relation. Ratios pass through
// unconverted.

use crate::model::{Fact, SolvencyDetail, Value};
use crate::normalize::{parse_fiscal_year, to_number};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::{find_row, is_section_header};

const SOURCE: &str = "Part I - Table 23";

/// Table 23: solvency ratio by insurer and period
pub fn solvency_ratio(
    sheet: &Sheet,
    names: &mut NameStandardizer,
) -> (Vec<Fact>, Vec<SolvencyDetail>) {
    let Some(header_row) = find_row(sheet, |text| {
        text.to_lowercase().contains("march") || text.contains("Mar")
    }) else {
        return (Vec::new(), Vec::new());
    };

    let mut date_cols: Vec<(usize, i32, String)> = Vec::new();
    for col in 2..sheet.width() {
        if let Some(label) = sheet.text(header_row, col) {
            if let Some(year) = parse_fiscal_year(&label) {
                date_cols.push((col, year, label));
            }
        }
    }

    let mut facts = Vec::new();
    let mut details = Vec::new();

    for row in header_row + 1..sheet.height() {
        let Some(insurer_raw) = sheet.text(row, 1) else {
            continue;
        };
        if is_section_header(sheet, row) {
            continue;
        }
        let insurer = names.standardize(&insurer_raw);
        if insurer.is_empty() {
            continue;
        }

        for (col, year, period) in &date_cols {
            let Some(value) = sheet.cell(row, *col).and_then(to_number) else {
                continue;
            };
            let value = Value::from_f64(value);

            if period.to_lowercase().contains("march") || period.contains("Mar") {
                facts.push(Fact::new(&insurer, *year, "Solvency Ratio", value, SOURCE));
            }

            details.push(SolvencyDetail {
                insurer: insurer.clone(),
                period: period.clone(),
                year: *year,
                solvency_ratio: value,
                source: SOURCE.to_string(),
            });
        }
    }

    (facts, details)
}

// ============================================================================
// TESTS
// ============================================================================
