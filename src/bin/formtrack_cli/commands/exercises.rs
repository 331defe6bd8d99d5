// ABOUTME: Exercise catalog command for formtrack-cli
// ABOUTME: Prints every supported exercise with its instructions and form checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formtrack

use formtrack_core::errors::AppResult;
use formtrack_core::models::ExerciseType;

use crate::helpers::output::print_json;

/// Print the exercise catalog
pub fn run() -> AppResult<()> {
    let catalog: Vec<_> = ExerciseType::catalog().collect();
    print_json(&catalog)
}
