// 📚 Business-in-force layouts - tables 10 and 11
//
// Both tables stack sixteen product-category blocks down the sheet. Each
// block opens with a category header row, runs through intermediate
// movement rows, and closes with a lettered "business in force at end of
// the financial year (A)" row - the only row extracted per block. Table 10
// reports policy counts in thousands, table 11 sum assured in Crore.

use crate::config::{CATEGORY_HEADERS, EXCLUDED_COLUMN_HEADERS, THOUSAND};
use crate::model::{Fact, Value};
use crate::normalize::{parse_fiscal_year, to_absolute_currency, to_number};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::{advance_insurer, has_letter_designator};

const INSURER_ROW: usize = 2;
const YEAR_ROW: usize = 3;
const DATA_START: usize = 4;

/// Row label fragment that marks the year-end row of a category block
const IN_FORCE_MARKER: &str = "business in force at end of the financial year";

/// Table 10: individual policies in force by product category
pub fn policies_in_force(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    in_force(sheet, names, "Total Policy (Year-End)", "Part I - Table 10", Scale::Thousands)
}

/// Table 11: sum assured of policies in force by product category
pub fn sum_assured_in_force(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    in_force(sheet, names, "Sum Assured (Year-End)", "Part I - Table 11", Scale::Crore)
}

#[derive(Clone, Copy)]
enum Scale {
    Thousands,
    Crore,
}

fn in_force(
    sheet: &Sheet,
    names: &mut NameStandardizer,
    kpi: &str,
    source: &str,
    scale: Scale,
) -> Vec<Fact> {
    // Column index: insurer carries forward, the year must be present in the
    // column itself
    let mut columns: Vec<(usize, String, i32)> = Vec::new();
    let mut current_insurer: Option<String> = None;
    for col in 1..sheet.width() {
        advance_insurer(
            &mut current_insurer,
            sheet.text(INSURER_ROW, col),
            EXCLUDED_COLUMN_HEADERS,
        );
        let year = sheet.text(YEAR_ROW, col).and_then(|t| parse_fiscal_year(&t));
        if let (Some(insurer), Some(year)) = (&current_insurer, year) {
            columns.push((col, insurer.clone(), year));
        }
    }

    let mut records = Vec::new();
    let mut current_category: Option<(&str, &str, &str)> = None;

    for row in DATA_START..sheet.height() {
        let Some(label) = sheet.text(row, 0) else {
            continue;
        };
        let label = label.to_lowercase();

        // Category header rows update the carried (L1, L2, L3) context
        for (fragment, category) in CATEGORY_HEADERS {
            if label.contains(fragment) {
                current_category = Some(*category);
                break;
            }
        }

        // Cross-category aggregate rows never carry data we want
        let compact: String = label.split_whitespace().collect();
        if label.contains("grand total")
            || label.contains("private sector total")
            || compact.contains("a+b+c+d")
        {
            continue;
        }

        // Only the lettered year-end row of the current block is a data row
        let Some((l1, l2, l3)) = current_category else {
            continue;
        };
        if !label.contains(IN_FORCE_MARKER) || !has_letter_designator(&label) {
            continue;
        }

        for (col, insurer_raw, year) in &columns {
            let insurer = names.standardize(insurer_raw);
            if insurer.is_empty() {
                continue;
            }
            let Some(cell) = sheet.cell(row, *col) else {
                continue;
            };
            let value = match scale {
                Scale::Thousands => to_number(cell).map(|v| v * THOUSAND),
                Scale::Crore => to_absolute_currency(cell, true),
            };
            if let Some(value) = value {
                records.push(
                    Fact::new(&insurer, *year, kpi, Value::from_f64(value), source)
                        .with_segment("Individual")
                        .with_category(l1, l2, l3),
                );
            }
        }
    }

    records
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

    fn in_force_sheet() -> Sheet {
        Sheet::from_rows(vec![
            vec![s("Table 10: Individual Business in Force")],
            vec![s("(in '000)")],
            // insurer row: "Particulars" must not become an insurer
            vec![s("Particulars"), s("LIC of India"), Data::Empty, s("Grand Total")],
            vec![Data::Empty, s("2022-23"), s("2023-24"), s("2023-24")],
            vec![s("Non Linked Life Business")],
            vec![s("Business in force at beginning of the year"), Data::Float(900.0), Data::Float(950.0), Data::Float(9000.0)],
            vec![s("Additions during the year"), Data::Float(120.0), Data::Float(130.0), Data::Float(1200.0)],
            vec![s("Business in force at end of the financial year (A)"), Data::Float(1000.0), Data::Float(1050.0), Data::Float(9999.0)],
            vec![s("Linked VIP-Pension Business")],
            vec![s("Business in force at end of the financial year (B)"), Data::Float(20.0), Data::Float(25.0), Data::Float(200.0)],
            vec![s("Grand Total (A+B+C+D)"), Data::Float(1020.0), Data::Float(1075.0), Data::Float(10199.0)],
        ])
    }

    #[test]
    fn test_policies_in_force_extracts_lettered_rows_only() {
        let mut names = NameStandardizer::new();
        let facts = policies_in_force(&in_force_sheet(), &mut names);

        // 2 category blocks x 2 year columns; aggregate column and the
        // movement / grand-total rows are skipped
        assert_eq!(facts.len(), 4);
        assert!(facts.iter().all(|f| f.insurer == "LIC"));
        assert!(facts.iter().all(|f| f.kpi == "Total Policy (Year-End)"));
        assert!(facts.iter().all(|f| f.individual_group == "Individual"));
    }

    #[test]
    fn test_policies_in_force_category_and_scale() {
        let mut names = NameStandardizer::new();
        let facts = policies_in_force(&in_force_sheet(), &mut names);

        let life = &facts[0];
        assert_eq!((life.l1.as_str(), life.l2.as_str(), life.l3.as_str()), ("Non-Linked", "", "Life"));
        assert_eq!(life.year, 2023);
        // 1000 thousand policies -> 1,000,000
        assert_eq!(life.value, Value::Int(1_000_000));

        let vip = facts.iter().find(|f| f.l2 == "VIP").unwrap();
        assert_eq!((vip.l1.as_str(), vip.l3.as_str()), ("Linked", "Pension"));
        assert_eq!(vip.value, Value::Int(20_000));
    }

    #[test]
    fn test_sum_assured_uses_crore_scale() {
        let mut names = NameStandardizer::new();
        let facts = sum_assured_in_force(&in_force_sheet(), &mut names);

        assert!(facts.iter().all(|f| f.kpi == "Sum Assured (Year-End)"));
        assert!(facts.iter().all(|f| f.source == "Part I - Table 11"));
        assert_eq!(facts[0].value, Value::Int(10_000_000_000));
    }

    #[test]
    fn test_rows_before_any_category_are_ignored() {
        let sheet = Sheet::from_rows(vec![
            vec![Data::Empty],
            vec![Data::Empty],
            vec![s("Particulars"), s("LIC of India")],
            vec![Data::Empty, s("2023-24")],
            // lettered row with no category context yet
            vec![s("Business in force at end of the financial year (A)"), Data::Float(10.0)],
        ]);
        let mut names = NameStandardizer::new();
        assert!(policies_in_force(&sheet, &mut names).is_empty());
    }
}
