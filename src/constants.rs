// ABOUTME: Application-level constants for the Sport Planner service
// ABOUTME: Re-exports the shared curriculum constants and adds service identity names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

pub use planner_core::constants::{category_labels, development_levels};

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the library and CLI
    pub const SPORT_PLANNER: &str = "sport-planner";
}

/// Environment variable names read by the application layer
pub mod env_config {
    /// Default catalog snapshot consumed by the CLI when `--snapshot` is omitted
    pub const CATALOG_SNAPSHOT: &str = "PLANNER_CATALOG_SNAPSHOT";
}
