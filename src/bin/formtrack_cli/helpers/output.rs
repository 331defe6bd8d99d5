// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack
// ABOUTME: Output formatting helpers for formtrack-cli
// ABOUTME: Writes pretty JSON documents and compact JSON lines to stdout

use formtrack_core::errors::AppResult;
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a value as one compact JSON line
pub fn print_json_line<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
