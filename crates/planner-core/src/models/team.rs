// ABOUTME: Team, season snapshot, age category, and planning template models
// ABOUTME: TeamProficiency is the read-only snapshot shared by every concept scoring pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use serde::{Deserialize, Serialize};

/// A team as known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team identifier
    pub id: i64,
    /// Display name
    pub name: String,
}

/// Age bracket a team competes in (e.g. "Alevín", U12)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCategory {
    /// Category identifier
    pub id: i64,
    /// Display name, used as a fallback when ages are unknown
    pub name: String,
    /// Youngest age in the bracket
    #[serde(default)]
    pub min_age: Option<i32>,
    /// Oldest age in the bracket
    #[serde(default)]
    pub max_age: Option<i32>,
}

impl TeamCategory {
    /// Create a category with an age range
    pub fn with_ages(id: i64, name: impl Into<String>, min_age: i32, max_age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            min_age: Some(min_age),
            max_age: Some(max_age),
        }
    }

    /// Create a category known only by name
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            min_age: None,
            max_age: None,
        }
    }
}

/// Competitive level of a team within its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLevel {
    /// Level identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Rank, 1 being the entry level
    pub rank: i32,
}

/// Per-season snapshot of a team's measured ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeason {
    /// Team this snapshot belongs to
    pub team_id: i64,
    /// Season the snapshot was taken for
    pub season_id: i64,
    /// Coach-evaluated technical level
    pub technical_level: i32,
    /// Coach-evaluated tactical level
    pub tactical_level: i32,
    /// Age category for this season
    #[serde(default)]
    pub category: Option<TeamCategory>,
    /// Competitive level for this season
    #[serde(default)]
    pub team_level: Option<TeamLevel>,
}

impl TeamSeason {
    /// Project the season snapshot onto the proficiency used for scoring
    #[must_use]
    pub fn proficiency(&self) -> TeamProficiency {
        TeamProficiency {
            technical_level: self.technical_level,
            tactical_level: self.tactical_level,
            category: self.category.clone(),
            team_level: self.team_level.clone(),
        }
    }
}

/// Measured proficiency of a team, the only team input to scoring
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProficiency {
    /// Technical level on the concept difficulty scale
    pub technical_level: i32,
    /// Tactical level on the concept complexity scale
    pub tactical_level: i32,
    /// Age category, if known
    #[serde(default)]
    pub category: Option<TeamCategory>,
    /// Competitive level, if known
    #[serde(default)]
    pub team_level: Option<TeamLevel>,
}

impl TeamProficiency {
    /// Create a proficiency without category or level
    #[must_use]
    pub const fn new(technical_level: i32, tactical_level: i32) -> Self {
        Self {
            technical_level,
            tactical_level,
            category: None,
            team_level: None,
        }
    }

    /// Attach an age category
    #[must_use]
    pub fn with_category(mut self, category: TeamCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach a competitive level
    #[must_use]
    pub fn with_team_level(mut self, team_level: TeamLevel) -> Self {
        self.team_level = Some(team_level);
        self
    }

    /// Youngest age of the team's category, if known
    #[must_use]
    pub fn min_age(&self) -> Option<i32> {
        self.category.as_ref().and_then(|c| c.min_age)
    }

    /// Rank of the team's competitive level, if known
    #[must_use]
    pub fn rank(&self) -> Option<i32> {
        self.team_level.as_ref().map(|l| l.rank)
    }
}

/// Curriculum template that pins the expected development stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningTemplate {
    /// Template identifier
    pub id: i64,
    /// Display name (e.g. "Itinerario Alevín")
    pub name: String,
    /// Programmatic code (e.g. "ALEVIN")
    #[serde(default)]
    pub code: Option<String>,
    /// Development stage (1-6) this template targets
    pub level: i32,
}
