// ABOUTME: Training concept and concept category models
// ABOUTME: Concepts carry the difficulty ratings every scoring dimension compares against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use serde::{Deserialize, Serialize};

/// A skill or tactic that can be trained
///
/// Difficulty and complexity share the integer scale used for team
/// proficiency. A `tactical_complexity` of 0 marks a purely technical concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Catalog identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Technical difficulty rating (open scale, observed 0-6+)
    pub technical_difficulty: i32,
    /// Tactical complexity rating (0 means pure technique)
    pub tactical_complexity: i32,
    /// Curriculum stage (1-6); `None` means stage-agnostic
    #[serde(default)]
    pub development_level: Option<i32>,
    /// Leaf category in the concept category tree
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Inactive concepts are never proposed
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl Concept {
    /// Create an active, uncategorized, stage-agnostic concept
    pub fn new(
        id: i64,
        name: impl Into<String>,
        technical_difficulty: i32,
        tactical_complexity: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            technical_difficulty,
            tactical_complexity,
            development_level: None,
            category_id: None,
            is_active: true,
        }
    }

    /// Set the curriculum stage
    #[must_use]
    pub const fn with_development_level(mut self, level: i32) -> Self {
        self.development_level = Some(level);
        self
    }

    /// Attach the concept to a category
    #[must_use]
    pub const fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Mark the concept inactive
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// True when the concept has no tactical barrier
    #[must_use]
    pub const fn is_pure_technical(&self) -> bool {
        self.tactical_complexity == 0
    }
}

/// Node of the concept category tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Category identifier
    pub id: i64,
    /// Display name (root names double as section names, e.g. "Ataque")
    pub name: String,
    /// Parent category, `None` for a root section
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl CategoryNode {
    /// Create a root category
    pub fn root(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: None,
        }
    }

    /// Create a child category
    pub fn child(id: i64, name: impl Into<String>, parent_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }
}
