// ABOUTME: Splits scored concepts into suggested and optional buckets by fixed thresholds
// ABOUTME: Rejected concepts are dropped silently; only the suggested bucket is capped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use crate::config::ProposalThresholds;
use rust_decimal::Decimal;

/// Anything that carries a match score
pub trait Scored {
    /// Score within [0, 1]
    fn score(&self) -> Decimal;
}

/// Outcome of bucketing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<T> {
    /// Score at or above the suggested threshold, best first
    pub suggested: Vec<T>,
    /// Score in `[optional, suggested)`, best first
    pub optional: Vec<T>,
    /// Number of items dropped below the optional threshold
    pub rejected: usize,
}

/// Bucket items by score, sort each bucket descending, and cap suggestions
///
/// Sorting is stable, so equal scores keep their input order.
#[must_use]
pub fn classify<T: Scored>(
    items: Vec<T>,
    thresholds: &ProposalThresholds,
    max_suggested: Option<usize>,
) -> Classification<T> {
    let mut suggested = Vec::new();
    let mut optional = Vec::new();
    let mut rejected = 0;

    for item in items {
        let score = item.score();
        if score >= thresholds.suggested {
            suggested.push(item);
        } else if score >= thresholds.optional {
            optional.push(item);
        } else {
            rejected += 1;
        }
    }

    suggested.sort_by(|a, b| b.score().cmp(&a.score()));
    optional.sort_by(|a, b| b.score().cmp(&a.score()));

    if let Some(limit) = max_suggested {
        suggested.truncate(limit);
    }

    Classification {
        suggested,
        optional,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item(&'static str, Decimal);

    impl Scored for Item {
        fn score(&self) -> Decimal {
            self.1
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("a", Decimal::new(72, 2)),
            Item("b", Decimal::new(39, 2)),
            Item("c", Decimal::new(70, 2)),
            Item("d", Decimal::new(40, 2)),
            Item("e", Decimal::new(95, 2)),
            Item("f", Decimal::new(69, 2)),
            Item("g", Decimal::ZERO),
        ]
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_threshold_boundaries() {
        let result = classify(items(), &ProposalThresholds::default(), None);
        assert_eq!(names(&result.suggested), vec!["e", "a", "c"]);
        assert_eq!(names(&result.optional), vec!["f", "d"]);
        assert_eq!(result.rejected, 2);
    }

    #[test]
    fn test_cap_applies_to_suggested_only() {
        let result = classify(items(), &ProposalThresholds::default(), Some(1));
        assert_eq!(names(&result.suggested), vec!["e"]);
        assert_eq!(result.optional.len(), 2);
    }

    #[test]
    fn test_zero_cap_empties_suggestions() {
        let result = classify(items(), &ProposalThresholds::default(), Some(0));
        assert!(result.suggested.is_empty());
        assert_eq!(result.optional.len(), 2);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let tied = vec![
            Item("first", Decimal::new(80, 2)),
            Item("second", Decimal::new(80, 2)),
        ];
        let result = classify(tied, &ProposalThresholds::default(), None);
        assert_eq!(names(&result.suggested), vec!["first", "second"]);
    }
}
