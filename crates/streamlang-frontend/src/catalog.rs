// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Filesystem traversal and extension-based filtering.
//!
//! The catalog walks a directory (single level or fully recursive) and keeps
//! the files whose *most specific* extension belongs to one of the requested
//! classes. Classification goes through [`Extension::find`], so a
//! `.prop.sl` properties file never leaks into a workflow-class listing even
//! though its name ends in `.sl`.
//!
//! Result ordering is unspecified; downstream consumers treat listings as
//! sets.

use crate::error::{FrontendError, Result};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use streamlang_dsl::Extension;
use walkdir::WalkDir;

/// List the files under `directory` whose most specific extension is one of
/// `classes`.
///
/// # Errors
///
/// Returns [`FrontendError::NotADirectory`] when `directory` is not a
/// directory, and [`FrontendError::Io`] when traversal fails.
pub fn list_source_files(
    directory: &Path,
    classes: &[Extension],
    recursive: bool,
) -> Result<HashSet<PathBuf>> {
    if !directory.is_dir() {
        return Err(FrontendError::NotADirectory {
            path: directory.to_path_buf(),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = HashSet::new();
    for entry in WalkDir::new(directory)
        .max_depth(max_depth)
        .follow_links(true)
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if Extension::find(file_name).is_some_and(|extension| classes.contains(&extension)) {
            files.insert(entry.into_path());
        }
    }
    Ok(files)
}
