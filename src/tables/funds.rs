// 🏦 Assets under management - table 21
//
// Year labels are sniffed; the fund-type context for each column comes from
// two stacked header rows (main category above, sub-category below) with
// carry-forward across blank cells. The facts relation keeps only the
// grand-total fund; the full fund breakdown goes to the detail relation.

use crate::model::{Fact, FundDetail, Value};
use crate::normalize::{parse_fiscal_year, to_absolute_currency};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::{find_row_containing_any, is_section_header};

const FUND_MAIN_ROW: usize = 3;
const FUND_SUB_ROW: usize = 4;

const SOURCE: &str = "Part I - Table 21";

/// Table 21: assets under management by insurer, year and fund type
pub fn assets_under_management(
    sheet: &Sheet,
    names: &mut NameStandardizer,
) -> (Vec<Fact>, Vec<FundDetail>) {
    let Some(header_row) = find_row_containing_any(sheet, &["2021", "2022"]) else {
        return (Vec::new(), Vec::new());
    };

    // Column index: the fund type carries forward, preferring the main
    // category row over the sub-category row when both are labelled
    let mut year_cols: Vec<(usize, String, i32)> = Vec::new();
    let mut current_fund: Option<String> = None;
    for col in 2..sheet.width() {
        if let Some(main) = sheet.text(FUND_MAIN_ROW, col) {
            current_fund = Some(main);
        } else if let Some(sub) = sheet.text(FUND_SUB_ROW, col) {
            current_fund = Some(sub);
        }

        if let Some(year) = sheet.text(header_row, col).and_then(|t| parse_fiscal_year(&t)) {
            let fund = current_fund.clone().unwrap_or_else(|| "Total".to_string());
            year_cols.push((col, fund, year));
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

        for (col, fund_type, year) in &year_cols {
            let Some(cell) = sheet.cell(row, *col) else {
                continue;
            };
            let Some(value) = to_absolute_currency(cell, true) else {
                continue;
            };
            let value = Value::from_f64(value);

            // Only the all-funds total reaches the facts relation;
            // sub-fund columns would double count
            if fund_type.to_lowercase().contains("grand total") {
                facts.push(Fact::new(
                    &insurer,
                    *year,
                    "Assets Under Management",
                    value,
                    SOURCE,
                ));
            }

            details.push(FundDetail {
                insurer: insurer.clone(),
                year: *year,
                fund_type: fund_type.clone(),
                aum: value,
                source: SOURCE.to_string(),
            });
        }
    }

    (facts, details)
}

// ============================================================================
// TESTS
// ============================================================================
