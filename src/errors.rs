// ABOUTME: Error module re-exports from planner-core crate
// ABOUTME: Keeps crate::errors paths stable for services, data sources, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! # Unified Error Handling
//!
//! Re-exports the error types defined in `planner-core` so application code
//! can keep using `crate::errors::{AppError, AppResult}`.

pub use planner_core::errors::*;
