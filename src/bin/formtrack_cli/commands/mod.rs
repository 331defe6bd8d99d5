// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack
// ABOUTME: Re-exports command modules for formtrack-cli
// ABOUTME: Provides the replay, simulate, and exercise catalog commands

pub mod exercises;
pub mod replay;
pub mod simulate;
