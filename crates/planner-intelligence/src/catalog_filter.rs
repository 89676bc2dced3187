// ABOUTME: Request-level filters applied to the catalog before scoring
// ABOUTME: Handles active flag, section focus, category exclusion, and pinned concepts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use crate::category_grouper::CategoryIndex;
use planner_core::models::{Concept, ProposalRequest};
use std::collections::HashSet;

/// Concepts that survived the request filters
#[derive(Debug, Clone, Default)]
pub struct FilteredCatalog {
    /// Candidates in catalog order
    pub concepts: Vec<Concept>,
    /// Ids explicitly requested by the caller; these skip the level window
    pub pinned: HashSet<i64>,
}

impl FilteredCatalog {
    /// Whether a concept was explicitly requested
    #[must_use]
    pub fn is_pinned(&self, concept: &Concept) -> bool {
        self.pinned.contains(&concept.id)
    }
}

/// Applies the request filters against a category index
pub struct CatalogFilter<'a> {
    index: &'a CategoryIndex,
    request: &'a ProposalRequest,
}

impl<'a> CatalogFilter<'a> {
    /// Create a filter for one request
    #[must_use]
    pub const fn new(index: &'a CategoryIndex, request: &'a ProposalRequest) -> Self {
        Self { index, request }
    }

    fn matches_focus(&self, concept: &Concept) -> bool {
        let Some(focus) = self.request.section_focus.as_deref().filter(|f| !f.is_empty()) else {
            return true;
        };
        concept
            .category_id
            .is_some_and(|id| self.index.matches_section_focus(id, focus))
    }

    fn is_excluded(&self, concept: &Concept) -> bool {
        concept
            .category_id
            .is_some_and(|id| self.request.exclude_category_ids.contains(&id))
    }

    /// Keep active concepts that pass the section focus and exclusion list
    ///
    /// Pinned concepts are kept whenever they are active.
    #[must_use]
    pub fn apply(&self, concepts: &[Concept]) -> FilteredCatalog {
        let requested: HashSet<i64> = self.request.include_concept_ids.iter().copied().collect();
        let mut pinned = HashSet::new();

        let kept = concepts
            .iter()
            .filter(|concept| concept.is_active)
            .filter(|concept| {
                if requested.contains(&concept.id) {
                    pinned.insert(concept.id);
                    return true;
                }
                self.matches_focus(concept) && !self.is_excluded(concept)
            })
            .cloned()
            .collect();

        FilteredCatalog {
            concepts: kept,
            pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::CategoryNode;

    fn index() -> CategoryIndex {
        CategoryIndex::new([
            CategoryNode::root(1, "Ataque"),
            CategoryNode::child(2, "Tiro", 1),
            CategoryNode::root(3, "Defensa"),
        ])
    }

    fn catalog() -> Vec<Concept> {
        vec![
            Concept::new(1, "Bandeja", 3, 2).with_category(2),
            Concept::new(2, "Presión", 4, 5).with_category(3),
            Concept::new(3, "Calentamiento", 1, 1),
            Concept::new(4, "Antiguo", 3, 3).with_category(2).inactive(),
        ]
    }

    fn ids(filtered: &FilteredCatalog) -> Vec<i64> {
        filtered.concepts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_inactive_concepts_dropped() {
        let index = index();
        let request = ProposalRequest::new(1, 1);
        let filtered = CatalogFilter::new(&index, &request).apply(&catalog());
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
        assert!(filtered.pinned.is_empty());
    }

    #[test]
    fn test_section_focus_drops_uncategorized() {
        let index = index();
        let mut request = ProposalRequest::new(1, 1);
        request.section_focus = Some("Ataque".into());
        let filtered = CatalogFilter::new(&index, &request).apply(&catalog());
        assert_eq!(ids(&filtered), vec![1]);
    }

    #[test]
    fn test_exclusion_keeps_uncategorized() {
        let index = index();
        let mut request = ProposalRequest::new(1, 1);
        request.exclude_category_ids = vec![2, 3];
        let filtered = CatalogFilter::new(&index, &request).apply(&catalog());
        assert_eq!(ids(&filtered), vec![3]);
    }

    #[test]
    fn test_pinned_concepts_bypass_filters_but_not_active_flag() {
        let index = index();
        let mut request = ProposalRequest::new(1, 1);
        request.section_focus = Some("Defensa".into());
        request.include_concept_ids = vec![1, 4];
        let filtered = CatalogFilter::new(&index, &request).apply(&catalog());
        assert_eq!(ids(&filtered), vec![1, 2]);
        assert!(filtered.is_pinned(&filtered.concepts[0]));
        assert!(!filtered.pinned.contains(&4));
    }
}
