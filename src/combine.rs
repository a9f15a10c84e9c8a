// 🔗 Aggregator - union of per-table outputs with exact-row deduplication
//
// Tables are processed in a fixed order, so inter-table row order is
// deterministic. Duplicates are removed by full-tuple equality (including
// Value), never by key; the first occurrence survives.

use crate::model::Fact;
use std::collections::HashSet;

pub struct CombineResult {
    pub facts: Vec<Fact>,
    pub duplicates_removed: usize,
}

/// Concatenate per-table fact batches and drop exact duplicates
pub fn combine(batches: Vec<Vec<Fact>>) -> CombineResult {
    let mut seen: HashSet<Fact> = HashSet::new();
    let mut facts = Vec::new();
    let mut duplicates_removed = 0;

    for batch in batches {
        for fact in batch {
            if seen.insert(fact.clone()) {
                facts.push(fact);
            } else {
                duplicates_removed += 1;
            }
        }
    }

    CombineResult {
        facts,
        duplicates_removed,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn fact(insurer: &str, year: i32, value: i64) -> Fact {
        Fact::new(insurer, year, "Total Premium", Value::Int(value), "Part I - Table 2")
    }

    #[test]
    fn test_combine_preserves_batch_order() {
        let result = combine(vec![
            vec![fact("LIC", 2023, 100), fact("LIC", 2024, 110)],
            vec![fact("SBI Life", 2024, 50)],
        ]);
        assert_eq!(result.facts.len(), 3);
        assert_eq!(result.facts[0].insurer, "LIC");
        assert_eq!(result.facts[2].insurer, "SBI Life");
        assert_eq!(result.duplicates_removed, 0);
    }

    #[test]
    fn test_combine_removes_exact_duplicates_across_batches() {
        let result = combine(vec![
            vec![fact("LIC", 2024, 100)],
            vec![fact("LIC", 2024, 100)],
        ]);
        assert_eq!(result.facts.len(), 1);
        assert_eq!(result.duplicates_removed, 1);
    }

    #[test]
    fn test_combine_keeps_rows_differing_only_in_value() {
        // Dedup is full-tuple, not key-based
        let result = combine(vec![vec![fact("LIC", 2024, 100), fact("LIC", 2024, 101)]]);
        assert_eq!(result.facts.len(), 2);
    }

    #[test]
    fn test_combine_is_idempotent() {
        let batches = vec![
            vec![fact("LIC", 2023, 100), fact("SBI Life", 2024, 50)],
            vec![fact("LIC", 2023, 100)],
        ];
        let once = combine(batches.clone());
        let twice = combine(vec![once.facts.clone()]);
        assert_eq!(once.facts, twice.facts);
        assert_eq!(twice.duplicates_removed, 0);
    }
}
