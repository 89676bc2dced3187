// ABOUTME: Shared constants for curriculum stages and category display labels
// ABOUTME: Single source of truth for values referenced by both the engine and the app layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

/// Curriculum stage bounds
pub mod development_levels {
    /// Lowest curriculum stage (school / mini)
    pub const MIN_LEVEL: i32 = 1;
    /// Highest curriculum stage (junior / senior)
    pub const MAX_LEVEL: i32 = 6;
    /// Stage assumed when neither a template nor a recognizable category is available
    pub const DEFAULT_LEVEL: i32 = 3;
}

/// Labels used when grouping concepts for presentation
pub mod category_labels {
    /// Path shown for concepts without a category
    pub const UNCATEGORIZED: &str = "Sin categoría";
    /// Section shown for concepts without a category
    pub const GENERAL_SECTION: &str = "General";
    /// Separator between category names in a display path
    pub const PATH_SEPARATOR: &str = " > ";
    /// Category id reported for the uncategorized group
    pub const UNCATEGORIZED_ID: i64 = 0;
}
