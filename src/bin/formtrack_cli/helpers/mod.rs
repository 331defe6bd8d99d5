// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack
// ABOUTME: Helper modules for formtrack-cli
// ABOUTME: Provides JSON output helpers shared by all commands

pub mod output;
