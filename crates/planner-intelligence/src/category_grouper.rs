// ABOUTME: Category arena with bounded ancestor walks and grouping of scored concepts
// ABOUTME: Produces display paths, root sections, and groups ordered by section then path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! # Category Grouping
//!
//! Categories form a parent-linked forest. Every walk goes through a
//! [`CategoryIndex`] built once per request and is bounded either by the
//! configured path depth or by a visited set, so malformed data with a cycle
//! terminates instead of looping.

use crate::config::GroupingConfig;
use planner_core::constants::category_labels::UNCATEGORIZED_ID;
use planner_core::models::{CategoryNode, ProposalGroup, ScoredConcept};
use std::collections::{HashMap, HashSet};

/// Id-keyed arena over category nodes
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    nodes: HashMap<i64, CategoryNode>,
}

impl CategoryIndex {
    /// Build the index; a later duplicate id replaces an earlier one
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = CategoryNode>) -> Self {
        Self {
            nodes: categories.into_iter().map(|node| (node.id, node)).collect(),
        }
    }

    /// Look up a category by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&CategoryNode> {
        self.nodes.get(&id)
    }

    fn parent_of(&self, node: &CategoryNode) -> Option<&CategoryNode> {
        node.parent_id.and_then(|id| self.get(id))
    }

    /// Names from the category upwards, nearest first, at most `max_depth` of them
    #[must_use]
    pub fn ancestry(&self, category_id: i64, max_depth: usize) -> Vec<&str> {
        let mut names = Vec::with_capacity(max_depth);
        let mut current = self.get(category_id);
        while let Some(node) = current {
            if names.len() >= max_depth {
                break;
            }
            names.push(node.name.as_str());
            current = self.parent_of(node);
        }
        names
    }

    /// Display path from the top of the bounded walk down to the category
    ///
    /// Returns `None` for ids that are not in the index.
    #[must_use]
    pub fn full_path(&self, category_id: i64, max_depth: usize, separator: &str) -> Option<String> {
        let mut names = self.ancestry(category_id, max_depth);
        if names.is_empty() {
            return None;
        }
        names.reverse();
        Some(names.join(separator))
    }

    /// Name of the root ancestor
    ///
    /// A cycle stops the walk at the last node not yet visited.
    #[must_use]
    pub fn section(&self, category_id: i64) -> Option<&str> {
        let mut current = self.get(category_id)?;
        let mut visited = HashSet::from([current.id]);
        while let Some(parent) = self.parent_of(current) {
            if !visited.insert(parent.id) {
                break;
            }
            current = parent;
        }
        Some(current.name.as_str())
    }

    /// Whether the category or one of its two nearest ancestors carries `name`
    #[must_use]
    pub fn matches_section_focus(&self, category_id: i64, name: &str) -> bool {
        self.ancestry(category_id, 3).contains(&name)
    }
}

/// Groups scored concepts by leaf category, display path, and section
pub struct CategoryGrouper<'a> {
    index: &'a CategoryIndex,
    config: &'a GroupingConfig,
}

impl<'a> CategoryGrouper<'a> {
    /// Create a grouper over a category index
    #[must_use]
    pub const fn new(index: &'a CategoryIndex, config: &'a GroupingConfig) -> Self {
        Self { index, config }
    }

    /// Resolve the `(category id, path, section)` key of a concept
    ///
    /// Concepts without a category, or whose category is unknown, share the
    /// uncategorized key.
    fn group_key(&self, category_id: Option<i64>) -> (i64, String, String) {
        let known = category_id.and_then(|id| {
            let path =
                self.index
                    .full_path(id, self.config.max_path_depth, &self.config.path_separator)?;
            let section = self.index.section(id)?.to_owned();
            Some((id, path, section))
        });

        known.unwrap_or_else(|| {
            (
                UNCATEGORIZED_ID,
                self.config.uncategorized_label.clone(),
                self.config.general_section_label.clone(),
            )
        })
    }

    /// Group concepts, ordering groups by section then path and concepts by score
    #[must_use]
    pub fn group(&self, concepts: Vec<ScoredConcept>) -> Vec<ProposalGroup> {
        let mut groups: Vec<ProposalGroup> = Vec::new();
        let mut positions: HashMap<(i64, String, String), usize> = HashMap::new();

        for scored in concepts {
            let key = self.group_key(scored.concept.category_id);
            if let Some(&position) = positions.get(&key) {
                groups[position].concepts.push(scored);
                continue;
            }
            positions.insert(key.clone(), groups.len());
            let (category_id, category_name, section) = key;
            groups.push(ProposalGroup {
                category_id,
                category_name,
                section,
                concepts: vec![scored],
            });
        }

        for group in &mut groups {
            group.concepts.sort_by(|a, b| b.score.cmp(&a.score));
        }
        groups.sort_by(|a, b| {
            a.section
                .cmp(&b.section)
                .then_with(|| a.category_name.cmp(&b.category_name))
        });
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::models::{Concept, ConceptTag, ProposalPriority};
    use rust_decimal::Decimal;

    fn basketball_tree() -> CategoryIndex {
        CategoryIndex::new([
            CategoryNode::root(1, "Ataque"),
            CategoryNode::child(2, "Tiro", 1),
            CategoryNode::child(3, "Tiro exterior", 2),
            CategoryNode::child(4, "Triple", 3),
            CategoryNode::root(5, "Defensa"),
            CategoryNode::child(6, "Individual", 5),
        ])
    }

    fn scored(id: i64, category_id: Option<i64>, score: i64) -> ScoredConcept {
        let mut concept = Concept::new(id, format!("Concepto {id}"), 3, 3);
        concept.category_id = category_id;
        ScoredConcept {
            concept,
            score: Decimal::new(score, 2),
            score_reason: String::new(),
            priority: ProposalPriority::Recommended,
            tag: ConceptTag::Own,
        }
    }

    #[test]
    fn test_full_path_is_bounded_to_three_levels() {
        let index = basketball_tree();
        assert_eq!(
            index.full_path(4, 3, " > ").as_deref(),
            Some("Tiro > Tiro exterior > Triple")
        );
        assert_eq!(index.full_path(2, 3, " > ").as_deref(), Some("Ataque > Tiro"));
        assert_eq!(index.full_path(99, 3, " > "), None);
    }

    #[test]
    fn test_section_is_root_ancestor() {
        let index = basketball_tree();
        assert_eq!(index.section(4), Some("Ataque"));
        assert_eq!(index.section(6), Some("Defensa"));
        assert_eq!(index.section(5), Some("Defensa"));
    }

    #[test]
    fn test_cycle_terminates() {
        let index = CategoryIndex::new([
            CategoryNode::child(10, "A", 11),
            CategoryNode::child(11, "B", 12),
            CategoryNode::child(12, "C", 10),
        ]);
        assert_eq!(index.section(10), Some("C"));
        assert_eq!(index.full_path(10, 3, " > ").as_deref(), Some("C > B > A"));

        let self_loop = CategoryIndex::new([CategoryNode::child(20, "Loop", 20)]);
        assert_eq!(self_loop.section(20), Some("Loop"));
        assert_eq!(self_loop.full_path(20, 3, "/").as_deref(), Some("Loop/Loop/Loop"));
    }

    #[test]
    fn test_section_focus_reaches_grandparent_only() {
        let index = basketball_tree();
        assert!(index.matches_section_focus(3, "Ataque"));
        assert!(index.matches_section_focus(4, "Tiro"));
        assert!(!index.matches_section_focus(4, "Ataque"));
        assert!(!index.matches_section_focus(3, "ataque"));
    }

    #[test]
    fn test_groups_ordered_by_section_then_path() {
        let index = basketball_tree();
        let config = GroupingConfig::default();
        let grouper = CategoryGrouper::new(&index, &config);

        let groups = grouper.group(vec![
            scored(1, Some(6), 75),
            scored(2, None, 90),
            scored(3, Some(4), 71),
            scored(4, Some(2), 80),
            scored(5, Some(4), 95),
            scored(6, Some(404), 72),
        ]);

        let keys: Vec<(&str, &str)> = groups
            .iter()
            .map(|g| (g.section.as_str(), g.category_name.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Ataque", "Ataque > Tiro"),
                ("Ataque", "Tiro > Tiro exterior > Triple"),
                ("Defensa", "Defensa > Individual"),
                ("General", "Sin categoría"),
            ]
        );

        let triple = &groups[1];
        assert_eq!(triple.category_id, 4);
        let ids: Vec<i64> = triple.concepts.iter().map(|c| c.concept.id).collect();
        assert_eq!(ids, vec![5, 3]);

        let uncategorized = &groups[3];
        assert_eq!(uncategorized.category_id, UNCATEGORIZED_ID);
        assert_eq!(uncategorized.concepts.len(), 2);
        assert_eq!(uncategorized.concepts[0].concept.id, 2);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        let index = CategoryIndex::default();
        let config = GroupingConfig::default();
        assert!(CategoryGrouper::new(&index, &config).group(Vec::new()).is_empty());
    }
}
