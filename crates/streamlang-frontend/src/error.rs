// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for the compiler front-end.
//!
//! Every failure carries the file path it belongs to plus the nested cause
//! text, so operators can diagnose a bad invocation from the message alone.

use std::path::PathBuf;
use streamlang_dsl::ExtensionError;
use thiserror::Error;

/// Fixed suffix of the not-a-directory message, kept stable for CLI
/// diagnostics that match on it.
pub const NOT_A_DIRECTORY_SUFFIX: &str = "' is not a directory";

/// Boxed nested cause preserved under a wrapping front-end error.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Front-end errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FrontendError {
    /// A dependency or discovery root is not a directory.
    #[error("Parameter '{}{NOT_A_DIRECTORY_SUFFIX}", .path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The primary file path does not resolve to a regular file.
    #[error("File: {name} was not found")]
    InvalidFile {
        /// The name of the missing file.
        name: String,
    },

    /// A file carries an extension outside the required class.
    #[error(transparent)]
    Extension(#[from] ExtensionError),

    /// Two property files define the same fully-qualified name
    /// (case-insensitive).
    #[error("Duplicate system property: '{name}' in the following files: {}, {}", .first.display(), .second.display())]
    DuplicateProperty {
        /// The colliding fully-qualified property name.
        name: String,
        /// The file that defined the name first.
        first: PathBuf,
        /// The file that collided with it.
        second: PathBuf,
    },

    /// The external property loader failed for a file.
    #[error("Error loading file: {} nested exception is {source}", .file.display())]
    PropertyLoad {
        /// The property file being loaded.
        file: PathBuf,
        /// The loader failure.
        #[source]
        source: BoxedCause,
    },

    /// An input file is blank, or deserializes to something other than a
    /// non-empty mapping.
    #[error("Inputs file: {} is empty or does not contain valid YAML content.", .file.display())]
    EmptyOrInvalidInputFile {
        /// The offending input file.
        file: PathBuf,
    },

    /// Reading, deserializing, or converting an input file failed.
    #[error("Error loading file: {}. Nested exception is: {source}", .file.display())]
    InputLoad {
        /// The input file being loaded.
        file: PathBuf,
        /// The underlying failure.
        #[source]
        source: BoxedCause,
    },

    /// The external compiler failed for the primary file.
    #[error("Failed compilation for file: {}, nested exception is: {source}", .file.display())]
    CompilationFailed {
        /// The primary file under compilation.
        file: PathBuf,
        /// The compiler failure.
        #[source]
        source: BoxedCause,
    },

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using [`FrontendError`].
pub type Result<T> = std::result::Result<T, FrontendError>;
