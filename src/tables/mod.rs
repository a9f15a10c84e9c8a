// 🗂️ Table Layout Parsers - one parser per source table geometry
//
// Every parser is a pure function (sheet, names) -> records sharing the same
// skeleton: sniff the header rows by content, fold a carry-forward cursor
// over the header columns to build a column -> context index, then walk the
// data rows emitting normalized records. A parser that cannot locate its
// header returns an empty result; unparseable cells are skipped.

pub mod channels;
pub mod funds;
pub mod in_force;
pub mod persistency;
pub mod premium;
pub mod solvency;
pub mod statewise;

use crate::config::{EXCLUDED_STATE_ROWS, SECTION_ROW_LABELS};
use crate::sheet::Sheet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the lettered designator, e.g. "(A)" or "( c )", that marks the
/// single year-end row inside a category block
static LETTER_DESIGNATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(\s*[A-P]\s*\)").expect("valid regex"));

/// Find the first row whose joined text contains any of the needles
pub(crate) fn find_row_containing_any(sheet: &Sheet, needles: &[&str]) -> Option<usize> {
    (0..sheet.height()).find(|&row| {
        let text = sheet.row_text(row);
        needles.iter().any(|needle| text.contains(needle))
    })
}

/// Find the first row satisfying an arbitrary predicate over its joined text
pub(crate) fn find_row(sheet: &Sheet, pred: impl Fn(&str) -> bool) -> Option<usize> {
    (0..sheet.height()).find(|&row| pred(&sheet.row_text(row)))
}

/// True when the row is a sector section header or an aggregate row.
/// The identifying cell is column 1 (column 0 holds the serial number);
/// single-column rows fall back to column 0.
pub(crate) fn is_section_header(sheet: &Sheet, row: usize) -> bool {
    let label = sheet.text(row, 1).or_else(|| sheet.text(row, 0));
    match label {
        Some(label) => SECTION_ROW_LABELS.contains(&label.to_lowercase().as_str()),
        None => false,
    }
}

/// True when a state-wise row label names a total rather than a state
pub(crate) fn is_excluded_state(state: &str) -> bool {
    EXCLUDED_STATE_ROWS.contains(&state.to_lowercase().as_str())
}

/// Advance the carried insurer across a header column.
///
/// A non-blank label either replaces the carried insurer or, when it names
/// an aggregate span, resets it to none so every column under that span is
/// skipped until a real insurer label reappears. A blank cell leaves the
/// carried value untouched.
pub(crate) fn advance_insurer(
    current: &mut Option<String>,
    label: Option<String>,
    excluded: &[&str],
) {
    if let Some(label) = label {
        if excluded.contains(&label.to_lowercase().as_str()) {
            *current = None;
        } else {
            *current = Some(label);
        }
    }
}

/// True when the row label carries a lettered designator like "(A)"
pub(crate) fn has_letter_designator(label: &str) -> bool {
    LETTER_DESIGNATOR_RE.is_match(label)
}

// ============================================================================
// TESTS
// ============================================================================
