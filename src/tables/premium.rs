// 💰 Premium layouts - tables 2, 3 and 12
//
// Tables 2 and 3 share one geometry: a year header row located by a
// fiscal-year sentinel, insurer rows below it, Crore-denominated cells.
// Table 12 is the linked/non-linked split with a stable, known column
// layout, so its column spans are fixed rather than sniffed.

use crate::model::{Fact, Value};
use crate::normalize::{parse_fiscal_year, to_absolute_currency};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::{find_row_containing_any, is_section_header};

/// Fiscal years that anchor the year header row in the premium layouts
const YEAR_SENTINELS: &[&str] = &["2014-15", "2015-16"];

/// Table 2: total premium by insurer and year
pub fn total_premium(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    premium_by_year(sheet, names, "Total Premium", "Part I - Table 2")
}

/// Table 3: new business premium by insurer and year
pub fn new_business_premium(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    premium_by_year(sheet, names, "New Business Premium", "Part I - Table 3")
}

fn premium_by_year(
    sheet: &Sheet,
    names: &mut NameStandardizer,
    kpi: &str,
    source: &str,
) -> Vec<Fact> {
    let Some(header_row) = find_row_containing_any(sheet, YEAR_SENTINELS) else {
        return Vec::new();
    };

    // Year columns start after the serial-number and insurer columns
    let mut year_cols: Vec<(usize, i32)> = Vec::new();
    for col in 2..sheet.width() {
        if let Some(year) = sheet.text(header_row, col).and_then(|t| parse_fiscal_year(&t)) {
            year_cols.push((col, year));
        }
    }

    let mut records = Vec::new();
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

        for &(col, year) in &year_cols {
            if let Some(cell) = sheet.cell(row, col) {
                if let Some(value) = to_absolute_currency(cell, true) {
                    records.push(Fact::new(&insurer, year, kpi, Value::from_f64(value), source));
                }
            }
        }
    }

    records
}

// ============================================================================
// TABLE 12 - LINKED / NON-LINKED PREMIUM SPLIT
// ============================================================================

/// Year labels sit on row 4; data rows start after the sector label on row 5
const SPLIT_YEAR_ROW: usize = 4;
const SPLIT_DATA_START: usize = 6;

/// Fixed column spans for the "e. Total" premium block of each L1 category
const SPLIT_COLUMN_GROUPS: &[(&str, usize, usize)] = &[
    ("Linked", 42, 52),
    ("Non-Linked", 92, 102),
];

/// Table 12: total premium split into Linked and Non-Linked
pub fn linked_premium_split(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    let mut records = Vec::new();

    for &(l1, start, end) in SPLIT_COLUMN_GROUPS {
        let mut year_cols: Vec<(usize, i32)> = Vec::new();
        for col in start..end {
            if let Some(year) = sheet.text(SPLIT_YEAR_ROW, col).and_then(|t| parse_fiscal_year(&t))
            {
                year_cols.push((col, year));
            }
        }

        for row in SPLIT_DATA_START..sheet.height() {
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

            for &(col, year) in &year_cols {
                if let Some(cell) = sheet.cell(row, col) {
                    if let Some(value) = to_absolute_currency(cell, true) {
                        records.push(
                            Fact::new(
                                &insurer,
                                year,
                                "Total Premium",
                                Value::from_f64(value),
                                "Part I - Table 12",
                            )
                            .with_l1(l1),
                        );
                    }
                }
            }
        }
    }

    records
}

// ============================================================================
// TESTS
// ============================================================================
