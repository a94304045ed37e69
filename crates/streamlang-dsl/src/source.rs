// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Source units read from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A workflow source unit: an absolute file path plus its raw content.
///
/// Sources are read once and never mutated. Equality and hashing cover both
/// the path and the content, so identical sources discovered through different
/// passes deduplicate when collected into a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowSource {
    path: PathBuf,
    content: String,
}

impl WorkflowSource {
    /// Read a source unit from disk, canonicalizing its path.
    ///
    /// # Errors
    ///
    /// Returns an error when the path cannot be canonicalized or the file
    /// cannot be read as UTF-8 text.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().canonicalize()?;
        let content = fs::read_to_string(&path)?;
        Ok(Self { path, content })
    }

    /// The canonical path of this source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name component of the path.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// The raw textual content.
    pub fn content(&self) -> &str {
        &self.content
    }
}
