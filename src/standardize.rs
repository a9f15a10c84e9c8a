// 🏷️ Name Standardizer - canonical insurer names + crosswalk side table
// Resolution order: clean -> exact dictionary hit -> fuzzy match -> title case

use crate::config::{CANONICAL_INSURERS, FUZZY_MATCH_THRESHOLD};
use crate::normalize::title_case;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static CORPORATE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(ltd\.?|limited|pvt\.?|private|inc\.?|incorporated|company|co\.?)$")
        .expect("valid regex")
});
static PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// ============================================================================
// CROSSWALK
// ============================================================================

/// Raw name -> standardized name mapping, one entry per distinct raw string.
/// Insertion-ordered so the crosswalk artifact lists names in the order they
/// were first encountered. First resolution wins; re-recording is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Crosswalk {
    entries: Vec<(String, String)>,
    index: HashMap<String, String>,
}

impl Crosswalk {
    pub fn new() -> Self {
        Crosswalk::default()
    }

    pub fn get(&self, raw: &str) -> Option<&str> {
        self.index.get(raw).map(|s| s.as_str())
    }

    pub fn record(&mut self, raw: &str, canonical: &str) {
        if self.index.contains_key(raw) {
            return;
        }
        self.index.insert(raw.to_string(), canonical.to_string());
        self.entries.push((raw.to_string(), canonical.to_string()));
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// NAME STANDARDIZER
// ============================================================================

/// Canonicalizes free-text insurer names, recording every resolution in the
/// run's crosswalk.
pub struct NameStandardizer {
    crosswalk: Crosswalk,
}

impl NameStandardizer {
    pub fn new() -> Self {
        NameStandardizer {
            crosswalk: Crosswalk::new(),
        }
    }

    /// Standardize one raw insurer name.
    ///
    /// - standardize("LIC of India") -> "LIC"
    /// - standardize("Life Insurance Corporation of India Ltd") -> "LIC"
    /// - standardize("Some New Insurer") -> "Some New Insurer" (title-cased)
    /// - standardize("") -> "" (no crosswalk entry)
    pub fn standardize(&mut self, raw: &str) -> String {
        // Identical raw strings resolve once per run
        if let Some(known) = self.crosswalk.get(raw) {
            return known.to_string();
        }

        let cleaned = clean_name(raw);
        if cleaned.is_empty() {
            return String::new();
        }

        // Exact dictionary hit
        for (key, canonical) in CANONICAL_INSURERS {
            if *key == cleaned {
                self.crosswalk.record(raw, canonical);
                return (*canonical).to_string();
            }
        }

        // Fuzzy match: highest similarity wins, ties go to the first
        // dictionary entry in declaration order
        let mut best_match: Option<&str> = None;
        let mut best_score = 0.0_f64;
        for (key, canonical) in CANONICAL_INSURERS {
            let score = strsim::jaro_winkler(&cleaned, key) * 100.0;
            if score > best_score && score >= FUZZY_MATCH_THRESHOLD {
                best_score = score;
                best_match = Some(*canonical);
            }
        }
        if let Some(canonical) = best_match {
            self.crosswalk.record(raw, canonical);
            return canonical.to_string();
        }

        // Best-effort fallback: title-cased original, still crosswalked so it
        // round-trips consistently within the run
        let fallback = title_case(raw.trim());
        self.crosswalk.record(raw, &fallback);
        fallback
    }

    pub fn crosswalk(&self) -> &Crosswalk {
        &self.crosswalk
    }

    pub fn into_crosswalk(self) -> Crosswalk {
        self.crosswalk
    }
}

/// Clean a raw insurer name for dictionary lookup: lowercase, strip one
/// trailing corporate-suffix token, drop punctuation except word characters,
/// spaces and hyphens, collapse whitespace.
pub fn clean_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let no_suffix = CORPORATE_SUFFIX_RE.replace(&lowered, "");
    let no_punct = PUNCT_RE.replace_all(&no_suffix, "");
    WHITESPACE_RE.replace_all(&no_punct, " ").trim().to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_suffix_and_punctuation() {
        assert_eq!(clean_name("HDFC Life Insurance Company Ltd."), "hdfc life insurance company");
        assert_eq!(clean_name("SBI Life Insurance Ltd"), "sbi life insurance");
        assert_eq!(clean_name("Star Union Dai-ichi Life"), "star union dai-ichi life");
        assert_eq!(clean_name("  LIC   of  India  "), "lic of india");
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("***"), "");
    }

    #[test]
    fn test_lic_variants_converge() {
        let mut names = NameStandardizer::new();
        assert_eq!(names.standardize("LIC of India"), "LIC");
        assert_eq!(names.standardize("Life Insurance Corporation of India Ltd"), "LIC");
        assert_eq!(names.standardize("lic"), "LIC");
    }

    #[test]
    fn test_standardize_is_deterministic_within_run() {
        let mut names = NameStandardizer::new();
        let first = names.standardize("Unheard Of Assurance Ventures");
        let second = names.standardize("Unheard Of Assurance Ventures");
        assert_eq!(first, second);
        // One crosswalk entry per distinct raw string, not per occurrence
        assert_eq!(names.crosswalk().len(), 1);
    }

    #[test]
    fn test_fuzzy_match_near_miss() {
        let mut names = NameStandardizer::new();
        // Cleaning leaves "aditya birla sunlife insurance company", which is
        // not a dictionary key but sits within the fuzzy threshold of one
        assert_eq!(
            names.standardize("Aditya Birla Sunlife Insurance Company"),
            "ABSLI"
        );
    }

    #[test]
    fn test_unknown_name_falls_back_to_title_case() {
        let mut names = NameStandardizer::new();
        let result = names.standardize("completely unrelated ventures");
        assert_eq!(result, "Completely Unrelated Ventures");
        assert_eq!(
            names.crosswalk().get("completely unrelated ventures"),
            Some("Completely Unrelated Ventures")
        );
    }

    #[test]
    fn test_empty_input_no_crosswalk_entry() {
        let mut names = NameStandardizer::new();
        assert_eq!(names.standardize(""), "");
        assert_eq!(names.standardize("   "), "");
        assert_eq!(names.standardize("..."), "");
        assert!(names.crosswalk().is_empty());
    }

    #[test]
    fn test_crosswalk_first_resolution_wins() {
        let mut xwalk = Crosswalk::new();
        xwalk.record("LIC of India", "LIC");
        xwalk.record("LIC of India", "Something Else");
        assert_eq!(xwalk.get("LIC of India"), Some("LIC"));
        assert_eq!(xwalk.len(), 1);
    }

    #[test]
    fn test_crosswalk_preserves_insertion_order() {
        let mut names = NameStandardizer::new();
        names.standardize("SBI Life");
        names.standardize("HDFC Life");
        names.standardize("Tata AIA");
        let raws: Vec<&str> = names
            .crosswalk()
            .entries()
            .iter()
            .map(|(raw, _)| raw.as_str())
            .collect();
        assert_eq!(raws, vec!["SBI Life", "HDFC Life", "Tata AIA"]);
    }
}
