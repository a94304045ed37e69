// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Trait seams for the external collaborators.
//!
//! The front-end never compiles or interprets workflow syntax itself; it
//! prepares inputs for a compiler implementation behind [`WorkflowCompiler`]
//! and converts raw input bindings through [`InputValueConverter`]. Keeping
//! both behind traits lets tests drive the orchestration with fakes and lets
//! embedders swap compiler backends.

use std::collections::{HashMap, HashSet};
use streamlang_dsl::{
    CompilationArtifact, InputValue, ModellingResult, SystemProperty, WorkflowSource,
};

/// The external workflow compiler.
///
/// Implementations own lexing, parsing, semantic resolution, and artifact
/// generation. The front-end wraps every failure with the primary file's path
/// before re-reporting it.
pub trait WorkflowCompiler {
    /// The compiler's failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compile a primary source against a dependency set, producing an
    /// artifact.
    fn compile(
        &self,
        source: &WorkflowSource,
        dependencies: &HashSet<WorkflowSource>,
    ) -> std::result::Result<CompilationArtifact, Self::Error>;

    /// Compile a primary source against a dependency set, producing the richer
    /// modelling form. A result may carry collected errors without the call
    /// itself failing.
    fn compile_source(
        &self,
        source: &WorkflowSource,
        dependencies: &HashSet<WorkflowSource>,
    ) -> std::result::Result<ModellingResult, Self::Error>;

    /// Load the system properties defined by a properties-flavored source.
    ///
    /// Duplicate names *within* the source are this loader's concern; the
    /// front-end only rejects duplicates across files.
    fn load_system_properties(
        &self,
        source: &WorkflowSource,
    ) -> std::result::Result<HashSet<SystemProperty>, Self::Error>;
}

/// Conversion of raw deserialized YAML input maps into typed bindings.
pub trait InputValueConverter {
    /// The converter's failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Convert a raw YAML mapping into named input bindings.
    ///
    /// `origin_file_name` identifies the file the mapping came from and is
    /// used to attribute conversion-error messages.
    fn convert_input_from_map(
        &self,
        raw: serde_yaml::Mapping,
        origin_file_name: &str,
    ) -> std::result::Result<HashMap<String, InputValue>, Self::Error>;
}
