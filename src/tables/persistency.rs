// 📈 Persistency ratios - table 28
//
// Each fiscal-year block spans five tenor columns (13th, 25th, 37th, 49th
// and 61st month), with the year carried forward across the block. Values
// are emitted exactly as reported on the 0-100 scale; out-of-range values
// are the validator's business, not the parser's.

use crate::model::{Fact, Value};
use crate::normalize::{parse_fiscal_year, to_number};
use crate::sheet::Sheet;
use crate::standardize::NameStandardizer;
use crate::tables::is_section_header;
use once_cell::sync::Lazy;
use regex::Regex;

const YEAR_ROW: usize = 3;
const TENOR_ROW: usize = 4;

/// Tenor labels read "13", "25*" etc.; the leading digits are the month count
static TENOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)").expect("valid regex"));

/// Table 28: persistency ratios based on number of policies
pub fn persistency(sheet: &Sheet, names: &mut NameStandardizer) -> Vec<Fact> {
    let mut columns: Vec<(usize, i32, String)> = Vec::new();
    let mut current_year: Option<i32> = None;

    for col in 2..sheet.width() {
        if let Some(year) = sheet.text(YEAR_ROW, col).and_then(|t| parse_fiscal_year(&t)) {
            current_year = Some(year);
        }
        let (Some(year), Some(tenor_label)) = (current_year, sheet.text(TENOR_ROW, col)) else {
            continue;
        };
        if let Some(caps) = TENOR_RE.captures(tenor_label.trim()) {
            columns.push((col, year, format!("{}M", &caps[1])));
        }
    }

    let mut records = Vec::new();
    for row in TENOR_ROW + 1..sheet.height() {
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

        for (col, year, tenor) in &columns {
            if let Some(value) = sheet.cell(row, *col).and_then(to_number) {
                records.push(
                    Fact::new(
                        &insurer,
                        *year,
                        &format!("Persistency ({}, Policy)", tenor),
                        Value::from_f64(value),
                        "Part I - Table 28",
                    )
                    .with_segment("Individual"),
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

    fn persistency_sheet() -> Sheet {
        Sheet::from_rows(vec![
            vec![s("Table 28: Persistency of Life Insurance Policies")],
            vec![s("(in per cent)")],
            vec![Data::Empty],
            // year block spans two tenor columns here
            vec![Data::Empty, s("Insurer"), s("2023-24"), Data::Empty],
            vec![Data::Empty, Data::Empty, s("13*"), Data::Float(61.0)],
            vec![Data::Float(1.0), s("LIC of India"), Data::Float(77.2), Data::Float(9530.0)],
            vec![Data::Empty, s("Industry Total"), Data::Float(80.0), Data::Float(55.0)],
        ])
    }

    #[test]
    fn test_persistency_tenor_and_year_carry() {
        let mut names = NameStandardizer::new();
        let facts = persistency(&persistency_sheet(), &mut names);

        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].kpi, "Persistency (13M, Policy)");
        assert_eq!(facts[0].year, 2024);
        assert_eq!(facts[0].value, Value::Float(77.2));
        assert_eq!(facts[0].individual_group, "Individual");
        assert_eq!(facts[1].kpi, "Persistency (61M, Policy)");
    }

    #[test]
    fn test_persistency_values_pass_through_unscaled() {
        // Corrupted out-of-range values stay as reported; the validator
        // flags them downstream
        let mut names = NameStandardizer::new();
        let facts = persistency(&persistency_sheet(), &mut names);
        assert_eq!(facts[1].value, Value::Int(9530));
    }

    #[test]
    fn test_persistency_skips_aggregate_rows() {
        let mut names = NameStandardizer::new();
        let facts = persistency(&persistency_sheet(), &mut names);
        assert!(facts.iter().all(|f| f.insurer == "LIC"));
    }
}
