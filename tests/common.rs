// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging and a small basketball catalog snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines
)]
//! Shared test utilities for `sport_planner`
//!
//! The fixture catalog is small enough to score by hand. For team 1 in season
//! 2025 (Alevín, min age 11, levels 5/5, expected stage 3, window 2..=4):
//!
//! | id | concept                | score  | bucket    |
//! |----|------------------------|--------|-----------|
//! | 1  | Bote con mano débil    | 1.0    | suggested |
//! | 2  | Pick and roll          | 0.59   | optional  |
//! | 3  | Pase de pecho          | 0.785  | suggested |
//! | 4  | Tiro en suspensión     | 0.9075 | suggested |
//! | 5  | Defensa en ayudas      | 0.8125 | suggested |
//! | 6  | Zona 2-3               | -      | window    |
//! | 7  | Contraataque 3x2       | -      | window    |
//! | 8  | Triple                 | 0.35   | rejected  |
//! | 9  | Rueda de calentamiento | -      | inactive  |
//! | 10 | Entrada a canasta      | 0.7775 | suggested |
//! | 11 | Bloqueo de rebote      | 0.8425 | suggested |

use sport_planner::data::{CatalogSnapshot, InMemoryCatalog};
use sport_planner::intelligence::{ProposalEngine, ProposalEngineConfig};
use sport_planner::models::{
    CategoryNode, Concept, PlanningTemplate, Team, TeamCategory, TeamLevel, TeamProficiency,
    TeamSeason,
};
use sport_planner::services::ConceptProposalService;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Season used by every fixture team
pub const SEASON: i64 = 2025;

/// Team with a full season record (Alevín, levels 5/5)
pub const ALEVIN_TEAM: i64 = 1;

/// Team without a record for `SEASON`
pub const NO_SEASON_TEAM: i64 = 2;

/// Older, stronger team with a competitive rank
pub const INFANTIL_TEAM: i64 = 3;

/// Template pinning the first stage
pub const INITIATION_TEMPLATE: i64 = 10;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with default configuration, independent of the environment
pub fn default_engine() -> ProposalEngine {
    init_test_logging();
    ProposalEngine::with_config(ProposalEngineConfig::default())
}

/// Alevín category used by scenarios A and B
pub fn alevin_category() -> TeamCategory {
    TeamCategory::with_ages(1, "Alevín", 11, 12)
}

/// Levels 5/5, Alevín, no competitive rank
pub fn alevin_proficiency() -> TeamProficiency {
    TeamProficiency::new(5, 5).with_category(alevin_category())
}

/// Category forest: Ataque > Tiro > Tiro exterior, Defensa > Individual, Fundamentos
pub fn basketball_categories() -> Vec<CategoryNode> {
    vec![
        CategoryNode::root(1, "Ataque"),
        CategoryNode::child(2, "Tiro", 1),
        CategoryNode::child(3, "Tiro exterior", 2),
        CategoryNode::root(4, "Defensa"),
        CategoryNode::child(5, "Individual", 4),
        CategoryNode::root(6, "Fundamentos"),
    ]
}

/// Concept catalog described in the module docs
pub fn basketball_concepts() -> Vec<Concept> {
    vec![
        Concept::new(1, "Bote con mano débil", 5, 0)
            .with_development_level(3)
            .with_category(6),
        Concept::new(2, "Pick and roll", 8, 6).with_category(2),
        Concept::new(3, "Pase de pecho", 2, 0)
            .with_development_level(2)
            .with_category(6),
        Concept::new(4, "Tiro en suspensión", 6, 4)
            .with_development_level(4)
            .with_category(3),
        Concept::new(5, "Defensa en ayudas", 7, 5)
            .with_development_level(3)
            .with_category(5),
        Concept::new(6, "Zona 2-3", 4, 9)
            .with_development_level(5)
            .with_category(5),
        Concept::new(7, "Contraataque 3x2", 3, 3)
            .with_development_level(1)
            .with_category(1),
        Concept::new(8, "Triple", 9, 8)
            .with_development_level(4)
            .with_category(3),
        Concept::new(9, "Rueda de calentamiento", 1, 1).inactive(),
        Concept::new(10, "Entrada a canasta", 4, 2)
            .with_development_level(3)
            .with_category(2),
        Concept::new(11, "Bloqueo de rebote", 6, 7),
    ]
}

/// Full snapshot: three teams, one template, the basketball catalog
pub fn basketball_snapshot() -> CatalogSnapshot {
    CatalogSnapshot::default()
        .with_team(Team {
            id: ALEVIN_TEAM,
            name: "Alevín A".into(),
        })
        .with_team(Team {
            id: NO_SEASON_TEAM,
            name: "Cadete B".into(),
        })
        .with_team(Team {
            id: INFANTIL_TEAM,
            name: "Infantil A".into(),
        })
        .with_team_season(TeamSeason {
            team_id: ALEVIN_TEAM,
            season_id: SEASON,
            technical_level: 5,
            tactical_level: 5,
            category: Some(alevin_category()),
            team_level: None,
        })
        .with_team_season(TeamSeason {
            team_id: INFANTIL_TEAM,
            season_id: SEASON,
            technical_level: 7,
            tactical_level: 6,
            category: Some(TeamCategory::with_ages(2, "Infantil", 13, 14)),
            team_level: Some(TeamLevel {
                id: 1,
                name: "Preferente".into(),
                rank: 3,
            }),
        })
        .with_planning_template(PlanningTemplate {
            id: INITIATION_TEMPLATE,
            name: "Plan iniciación".into(),
            code: Some("INI".into()),
            level: 1,
        })
        .with_concepts(basketball_concepts())
        .with_categories(basketball_categories())
}

/// Service over the fixture snapshot with a default-config engine
pub fn basketball_service() -> ConceptProposalService<InMemoryCatalog> {
    ConceptProposalService::with_engine(
        InMemoryCatalog::new(basketball_snapshot()),
        default_engine(),
    )
}
