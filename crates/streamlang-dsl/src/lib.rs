// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Streamlang DSL Type Definitions - Single Source of Truth
//!
//! This crate defines the types shared between the Streamlang compiler and the
//! front-end layer that feeds it:
//!
//! - Source units read from disk and handed to the compiler
//! - File extension classification for the `.sl` family of extensions
//! - System properties and typed input bindings consumed at execution time
//! - Compiler result types (artifacts and modelling results)
//!
//! The compiler itself lives behind trait seams in `streamlang-frontend`; this
//! crate carries no compilation logic.
//!
//! # Modules
//!
//! - [`artifact`]: Compiler output types
//! - [`extension`]: Extension classification and validation
//! - [`property`]: System properties keyed by fully-qualified name
//! - [`source`]: Source units (path + content)
//! - [`value`]: Typed input binding values

#![deny(missing_docs)]

// Compiler output types.
pub mod artifact;

// Extension classification for the .sl extension family.
pub mod extension;

// System properties keyed by fully-qualified name.
pub mod property;

// Source units read from disk.
pub mod source;

// Typed input binding values.
pub mod value;

// Re-export main types
pub use artifact::{CompilationArtifact, ModellingResult};
pub use extension::{Extension, ExtensionError};
pub use property::SystemProperty;
pub use source::WorkflowSource;
pub use value::InputValue;
