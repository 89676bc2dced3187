// ABOUTME: Phrases used to narrate why a concept received its score
// ABOUTME: Spanish by default to match the coaching staff's catalog language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use serde::{Deserialize, Serialize};

/// Template phrases for score reasons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonMessages {
    /// Technical difficulty within one point of the team
    pub technical_adequate: String,
    /// Technical difficulty well below the team
    pub technical_mastered: String,
    /// Technical difficulty two points above the team
    pub technical_progressive: String,
    /// Technical difficulty more than two points above the team
    pub technical_advanced: String,
    /// Tactical complexity within one point of the team
    pub tactical_adequate: String,
    /// Tactical complexity well below the team
    pub tactical_consolidated: String,
    /// Tactical complexity two points above the team
    pub tactical_reachable: String,
    /// Tactical complexity more than two points above the team
    pub tactical_complex: String,
    /// Concept stage equals the expected stage
    pub stage_ideal: String,
    /// Concept stage is the next one
    pub stage_next: String,
    /// Used when no phrase applies
    pub general: String,
    /// Joins phrases
    pub separator: String,
}

impl Default for ReasonMessages {
    fn default() -> Self {
        Self {
            technical_adequate: "Nivel técnico adecuado".into(),
            technical_mastered: "Técnicamente dominado".into(),
            technical_progressive: "Desafío técnico progresivo".into(),
            technical_advanced: "Técnicamente avanzado".into(),
            tactical_adequate: "complejidad táctica apropiada".into(),
            tactical_consolidated: "tácticamente consolidado".into(),
            tactical_reachable: "reto táctico alcanzable".into(),
            tactical_complex: "tácticamente complejo".into(),
            stage_ideal: "etapa de desarrollo ideal".into(),
            stage_next: "siguiente etapa natural".into(),
            general: "Evaluación general".into(),
            separator: ", ".to_owned(),
        }
    }
}

impl ReasonMessages {
    /// English phrase set
    #[must_use]
    pub fn english() -> Self {
        Self {
            technical_adequate: "Suitable technical level".into(),
            technical_mastered: "Technically mastered".into(),
            technical_progressive: "Progressive technical challenge".into(),
            technical_advanced: "Technically advanced".into(),
            tactical_adequate: "appropriate tactical complexity".into(),
            tactical_consolidated: "tactically consolidated".into(),
            tactical_reachable: "reachable tactical challenge".into(),
            tactical_complex: "tactically complex".into(),
            stage_ideal: "ideal development stage".into(),
            stage_next: "natural next stage".into(),
            general: "General assessment".into(),
            separator: ", ".to_owned(),
        }
    }
}
