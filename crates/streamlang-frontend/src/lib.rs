// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Streamlang Compiler Front-End
//!
//! This crate is the preprocessing and orchestration layer between a CLI
//! invocation and the Streamlang workflow compiler. It decides *which* files
//! participate in a compilation and *how* auxiliary configuration (system
//! properties, input bindings) is discovered, validated, and merged; the
//! compiler itself lives behind the [`WorkflowCompiler`] trait seam.
//!
//! # Pipeline
//!
//! ```text
//!     ┌─────────────┐      ┌──────────────┐      ┌─────────────┐
//!     │   Primary   │      │  Dependency  │      │  External   │
//!     │   .sl file  │─────▶│  source set  │─────▶│  compiler   │
//!     └─────────────┘      └──────────────┘      └─────────────┘
//!
//!     ┌─────────────┐      ┌──────────────┐
//!     │  .prop.sl / │      │   Merged     │   (loaded independently,
//!     │  .yaml files│─────▶│   config     │    not chained off compilation)
//!     └─────────────┘      └──────────────┘
//! ```
//!
//! # Important Notes
//!
//! - All operations are synchronous and safe to invoke repeatedly; the only
//!   process-wide state is the read-only application home
//!   ([`paths::APP_HOME_ENV`]).
//! - Dependencies are strictly local filesystem paths; there is no remote
//!   resolution.
//! - `compile_folders` is the single place a failure is deliberately not
//!   propagated: a file that fails compilation is logged and skipped so one
//!   bad source cannot abort the batch.
//!
//! # Modules
//!
//! - [`catalog`]: Filesystem traversal and extension-based filtering
//! - [`compile`]: Top-level compilation orchestration
//! - [`error`]: Front-end error taxonomy
//! - [`inputs`]: Input-binding loading and merging
//! - [`paths`]: Application-home filesystem conventions
//! - [`traits`]: External collaborator seams

#![deny(missing_docs)]

/// Filesystem traversal and extension-based filtering.
pub mod catalog;

/// Top-level compilation orchestration.
pub mod compile;

// Dependency-source resolution (internal; reached through `compile`).
mod dependencies;

/// Front-end error taxonomy.
pub mod error;

/// Input-binding loading and merging.
pub mod inputs;

/// Application-home filesystem conventions.
pub mod paths;

// System-property loading and duplicate detection (internal; reached through
// `compile`).
mod properties;

/// External collaborator seams.
pub mod traits;

// Re-export main types
pub use compile::CompilerFrontend;
pub use error::{FrontendError, NOT_A_DIRECTORY_SUFFIX, Result};
pub use inputs::{ConversionError, YamlValueConverter};
pub use traits::{InputValueConverter, WorkflowCompiler};

// Re-export DSL types for convenience
pub use streamlang_dsl::{
    CompilationArtifact, Extension, ExtensionError, InputValue, ModellingResult, SystemProperty,
    WorkflowSource,
};
