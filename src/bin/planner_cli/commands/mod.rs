// ABOUTME: Re-exports command modules for planner-cli
// ABOUTME: Provides proposal generation and level window inspection commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

pub mod generate;
pub mod window;
