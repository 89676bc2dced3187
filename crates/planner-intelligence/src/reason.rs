// ABOUTME: Narrates which scoring factors were near-ideal for a concept
// ABOUTME: Purely descriptive output, never consulted for control flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use crate::config::ReasonMessages;
use planner_core::models::Concept;

/// Build the human-readable reason for a concept's score
#[must_use]
pub fn describe_score(
    messages: &ReasonMessages,
    concept: &Concept,
    technical_level: i32,
    tactical_level: i32,
    expected_level: i32,
) -> String {
    let technical_gap = concept.technical_difficulty.saturating_sub(technical_level);
    let tactical_gap = concept.tactical_complexity.saturating_sub(tactical_level);

    let mut reasons: Vec<&str> = Vec::with_capacity(3);

    reasons.push(match technical_gap {
        -1..=1 => &messages.technical_adequate,
        i32::MIN..=-2 => &messages.technical_mastered,
        2 => &messages.technical_progressive,
        _ => &messages.technical_advanced,
    });

    reasons.push(match tactical_gap {
        -1..=1 => &messages.tactical_adequate,
        i32::MIN..=-2 => &messages.tactical_consolidated,
        2 => &messages.tactical_reachable,
        _ => &messages.tactical_complex,
    });

    if let Some(level) = concept.development_level {
        match level.saturating_sub(expected_level) {
            0 => reasons.push(&messages.stage_ideal),
            1 => reasons.push(&messages.stage_next),
            _ => {}
        }
    }

    let joined = reasons.join(&messages.separator);
    if joined.is_empty() {
        return messages.general.clone();
    }
    capitalize_first(&joined)
}

/// Uppercase the first character, leaving the rest untouched
#[must_use]
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_level_concept_reason() {
        let messages = ReasonMessages::default();
        let concept = Concept::new(1, "Bote", 5, 5).with_development_level(3);
        assert_eq!(
            describe_score(&messages, &concept, 5, 5, 3),
            "Nivel técnico adecuado, complejidad táctica apropiada, etapa de desarrollo ideal"
        );
    }

    #[test]
    fn test_gap_phrases() {
        let messages = ReasonMessages::default();
        let concept = Concept::new(2, "Pick and roll", 7, 8).with_development_level(4);
        assert_eq!(
            describe_score(&messages, &concept, 5, 5, 3),
            "Desafío técnico progresivo, tácticamente complejo, siguiente etapa natural"
        );

        let easy = Concept::new(3, "Pase", 1, 0);
        assert_eq!(
            describe_score(&messages, &easy, 5, 5, 3),
            "Técnicamente dominado, tácticamente consolidado"
        );
    }

    #[test]
    fn test_english_messages() {
        let messages = ReasonMessages::english();
        let concept = Concept::new(4, "Zone press", 9, 5);
        assert_eq!(
            describe_score(&messages, &concept, 5, 5, 3),
            "Technically advanced, appropriate tactical complexity"
        );
    }

    #[test]
    fn test_capitalize_first_handles_accents_and_empty() {
        assert_eq!(capitalize_first("étapa"), "Étapa");
        assert_eq!(capitalize_first(""), "");
    }
}
