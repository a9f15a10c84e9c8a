// 🔢 Scalar Normalizers - fiscal years, currency scales, categories, channels
// Every function here is total: bad input degrades to None or passthrough,
// never to an error

use crate::config::{CHANNEL_VOCABULARY, CRORE_TO_RUPEES};
use crate::sheet::Data;
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})-(\d{2})").expect("valid regex"));
static MARCH_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:march|mar)\s*(\d{4})").expect("valid regex"));
static BARE_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2})\b").expect("valid regex"));

// ============================================================================
// FISCAL YEAR
// ============================================================================

/// Parse a fiscal-year label to its ending calendar year.
///
/// Recognized patterns, in priority order:
/// - "2023-24"              -> 2024
/// - "as on 31 March 2024"  -> 2024
/// - "2024"                 -> 2024
///
/// Anything else (e.g. "FY22") -> None
pub fn parse_fiscal_year(s: &str) -> Option<i32> {
    let s = s.trim();

    if let Some(caps) = YEAR_RANGE_RE.captures(s) {
        let start: i32 = caps[1].parse().ok()?;
        return Some(start + 1);
    }

    if let Some(caps) = MARCH_YEAR_RE.captures(s) {
        return caps[1].parse().ok();
    }

    if let Some(caps) = BARE_YEAR_RE.captures(s) {
        return caps[1].parse().ok();
    }

    None
}

// ============================================================================
// NUMERIC CONVERSION
// ============================================================================

/// Lenient numeric read of a cell. Missing-value sentinels ("-", "")
/// and non-numeric content are None, never an error.
pub fn to_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => {
            let t = s.trim();
            if t.is_empty() || t == "-" {
                return None;
            }
            t.parse().ok()
        }
        _ => None,
    }
}

/// Numeric read with the Crore scale applied when the caller declares the
/// cell Crore-denominated. Same sentinel handling as `to_number`.
pub fn to_absolute_currency(cell: &Data, crore: bool) -> Option<f64> {
    let value = to_number(cell)?;
    if crore {
        Some(value * CRORE_TO_RUPEES)
    } else {
        Some(value)
    }
}

// ============================================================================
// CATEGORY LABELS
// ============================================================================

/// Split a free-text product category label into (L1, L2, L3).
///
/// L1 comes from linked/non-linked wording, L3 from the product line.
/// "annuity" is tested before "life" because general-annuity labels also
/// contain the word "life". L2 is never derived here; the VIP sub-category
/// only exists in table-specific header maps.
pub fn parse_category_label(label: &str) -> (String, String, String) {
    let lower = label.to_lowercase();
    let lower = lower.trim();

    let mut l1 = "";
    if lower.contains("linked") {
        if lower.contains("non-linked") || lower.contains("non linked") || lower.contains("nonlinked")
        {
            l1 = "Non-Linked";
        } else {
            l1 = "Linked";
        }
    }

    let l3 = if lower.contains("life") && !lower.contains("annuity") {
        "Life"
    } else if lower.contains("annuity") {
        "Annuity"
    } else if lower.contains("pension") {
        "Pension"
    } else if lower.contains("health") {
        "Health"
    } else {
        ""
    };

    (l1.to_string(), String::new(), l3.to_string())
}

// ============================================================================
// CHANNELS
// ============================================================================

/// Normalize a distribution channel label against the fixed vocabulary.
/// Unknown labels pass through trimmed, unchanged.
pub fn normalize_channel(channel: &str) -> String {
    let trimmed = channel.trim();
    let lower = trimmed.to_lowercase();
    for (raw, canonical) in CHANNEL_VOCABULARY {
        if *raw == lower {
            return (*canonical).to_string();
        }
    }
    trimmed.to_string()
}

// ============================================================================
// TITLE CASE
// ============================================================================

/// Title-case every letter run: first letter uppercased, rest lowercased.
/// Used as the best-effort canonical form for names outside the dictionary.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
