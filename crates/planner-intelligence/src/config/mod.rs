// ABOUTME: Proposal engine configuration container with loading, env overrides, and validation
// ABOUTME: Exposes a process-wide singleton so every engine shares one validated config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! Proposal Engine Configuration
//!
//! Configuration is organized into domain-specific modules:
//! - `scoring` - Classification thresholds and fixed weights
//! - `grouping` - Category path labels and rayon batching
//! - `messages` - Score reason phrases
//! - `error` - Validation and parsing errors
//!
//! Defaults reproduce the production constants. Environment variables
//! prefixed with `PLANNER_` override individual values at load time.

pub mod error;
pub mod grouping;
pub mod messages;
pub mod scoring;

pub use error::ConfigError;
pub use grouping::{ExecutionConfig, GroupingConfig};
pub use messages::ReasonMessages;
pub use scoring::{ProposalThresholds, ScoringWeights};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PROPOSAL_CONFIG: OnceLock<ProposalEngineConfig> = OnceLock::new();

/// Main proposal engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalEngineConfig {
    /// Bucketing and priority thresholds
    pub thresholds: ProposalThresholds,
    /// Fixed scoring weights and bonuses
    pub weights: ScoringWeights,
    /// Category path presentation
    pub grouping: GroupingConfig,
    /// Scoring map execution
    pub execution: ExecutionConfig,
    /// Score reason phrases
    pub messages: ReasonMessages,
}

impl ProposalEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PROPOSAL_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load proposal engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when thresholds are out of order or outside [0, 1],
    /// a weight is negative, or the path depth is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.thresholds;
        for value in [
            thresholds.suggested,
            thresholds.optional,
            thresholds.high_score_priority,
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ConfigError::InvalidRange(
                    "score thresholds must be within [0, 1]",
                ));
            }
        }

        if thresholds.optional >= thresholds.suggested {
            return Err(ConfigError::InvalidRange(
                "optional threshold must be < suggested threshold",
            ));
        }

        let weights = &self.weights;
        if [
            weights.development_level,
            weights.team_level,
            weights.team_rank_step,
            weights.neutral_factor,
            weights.pure_technical_bonus,
        ]
        .iter()
        .any(Decimal::is_sign_negative)
        {
            return Err(ConfigError::InvalidWeights(
                "scoring weights must not be negative",
            ));
        }

        if self.grouping.max_path_depth == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_path_depth must be at least 1",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PLANNER_SUGGESTED_THRESHOLD",
            &mut self.thresholds.suggested,
        )?;
        Self::apply_env_var("PLANNER_OPTIONAL_THRESHOLD", &mut self.thresholds.optional)?;
        Self::apply_env_var(
            "PLANNER_HIGH_SCORE_PRIORITY_THRESHOLD",
            &mut self.thresholds.high_score_priority,
        )?;
        Self::apply_env_var(
            "PLANNER_LOW_LEVEL_TEAM_AVERAGE",
            &mut self.thresholds.low_level_team_average,
        )?;

        Self::apply_env_var(
            "PLANNER_PURE_TECHNICAL_BONUS",
            &mut self.weights.pure_technical_bonus,
        )?;
        Self::apply_env_var(
            "PLANNER_PURE_TECHNICAL_MAX_AGE",
            &mut self.weights.pure_technical_max_age,
        )?;

        Self::apply_env_var(
            "PLANNER_MAX_PATH_DEPTH",
            &mut self.grouping.max_path_depth,
        )?;
        Self::apply_env_var(
            "PLANNER_UNCATEGORIZED_LABEL",
            &mut self.grouping.uncategorized_label,
        )?;

        Self::apply_env_var(
            "PLANNER_PARALLEL_SCORING",
            &mut self.execution.parallel_scoring,
        )?;
        Self::apply_env_var(
            "PLANNER_PARALLEL_MIN_BATCH",
            &mut self.execution.parallel_min_batch,
        )?;

        if let Ok(language) = env::var("PLANNER_REASON_LANGUAGE") {
            self.messages = match language.trim().to_lowercase().as_str() {
                "es" | "spanish" => ReasonMessages::default(),
                "en" | "english" => ReasonMessages::english(),
                _ => {
                    return Err(ConfigError::Parse(format!(
                        "Invalid PLANNER_REASON_LANGUAGE: {language}"
                    )))
                }
            };
        }

        Ok(self)
    }
}
