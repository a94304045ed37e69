// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Compiler output types.
//!
//! These types are produced by the external compiler and treated as opaque by
//! the front-end: it hands them back to the caller without inspecting the
//! execution plans. The only field the front-end writes is the originating
//! file on [`ModellingResult`], used for batch-compilation reporting.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A fully compiled workflow artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationArtifact {
    /// The execution plan for the primary source.
    pub execution_plan: Value,
    /// Execution plans for compiled dependencies, keyed by qualified name.
    pub dependency_plans: HashMap<String, Value>,
    /// Fully-qualified names of system properties the plan references.
    pub system_property_dependencies: HashSet<String>,
}

/// A modelling result: an artifact-or-errors view of one compilation,
/// annotated with the file it originated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModellingResult {
    /// The compiled artifact, absent when modelling only produced errors.
    pub artifact: Option<CompilationArtifact>,
    /// Errors collected while modelling the source.
    pub errors: Vec<String>,
    /// The source file this result was produced from.
    pub file: Option<PathBuf>,
}

impl ModellingResult {
    /// A successful result carrying an artifact.
    pub fn from_artifact(artifact: CompilationArtifact) -> Self {
        Self {
            artifact: Some(artifact),
            errors: Vec::new(),
            file: None,
        }
    }

    /// A result carrying only collected modelling errors.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            artifact: None,
            errors,
            file: None,
        }
    }

    /// Annotate this result with its originating file.
    #[must_use]
    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    /// Whether modelling collected any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
