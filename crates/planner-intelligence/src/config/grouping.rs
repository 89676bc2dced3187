// ABOUTME: Presentation and execution settings for proposal generation
// ABOUTME: Category path labels, walk depth, and rayon batching thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use planner_core::constants::category_labels;
use serde::{Deserialize, Serialize};

/// How scored concepts are labelled when grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Maximum number of names in a display path
    pub max_path_depth: usize,
    /// Separator placed between names in a display path
    pub path_separator: String,
    /// Path shown for uncategorized concepts
    pub uncategorized_label: String,
    /// Section shown for uncategorized concepts
    pub general_section_label: String,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            max_path_depth: 3,
            path_separator: category_labels::PATH_SEPARATOR.to_owned(),
            uncategorized_label: category_labels::UNCATEGORIZED.to_owned(),
            general_section_label: category_labels::GENERAL_SECTION.to_owned(),
        }
    }
}

/// Controls for the scoring map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Score concepts on the rayon pool
    pub parallel_scoring: bool,
    /// Smallest batch worth scoring in parallel
    pub parallel_min_batch: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            parallel_scoring: true,
            parallel_min_batch: 256,
        }
    }
}
