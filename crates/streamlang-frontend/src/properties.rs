// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! System-property loading and cross-file duplicate detection.
//!
//! Each candidate file is handed to the external property loader; the
//! resulting per-file sets are merged through a check-then-insert pass over a
//! map keyed by the lowercased fully-qualified name. The first name already
//! claimed by an earlier file fails the whole call, naming both files.
//! Duplicates *within* one file are the loader's concern and are not
//! re-validated here.

use crate::catalog;
use crate::error::{BoxedCause, FrontendError, Result};
use crate::paths;
use crate::traits::WorkflowCompiler;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use streamlang_dsl::{Extension, SystemProperty, WorkflowSource};
use tracing::info;

/// Load and merge system properties from the given files.
///
/// An empty `files` list falls back to recursive discovery under
/// `{app_home}/configuration/properties`; when nothing is found there the
/// result is an empty set, not an error. Explicitly given files must carry
/// the properties extension.
pub(crate) fn load_system_properties<C: WorkflowCompiler>(
    compiler: &C,
    files: &[PathBuf],
    app_home: Option<&Path>,
) -> Result<HashSet<SystemProperty>> {
    let files: Vec<PathBuf> = if files.is_empty() {
        default_property_files(app_home)?
    } else {
        for file in files {
            Extension::validate_properties_extension(&paths::file_name(file))?;
        }
        files.to_vec()
    };

    let mut merged: HashMap<String, (SystemProperty, PathBuf)> = HashMap::new();
    for file in &files {
        info!(file = %file.display(), "Loading properties file");
        let properties = load_from_file(compiler, file)?;
        merge_file_properties(&mut merged, properties, file)?;
    }
    Ok(merged.into_values().map(|(property, _)| property).collect())
}

fn load_from_file<C: WorkflowCompiler>(
    compiler: &C,
    file: &Path,
) -> Result<HashSet<SystemProperty>> {
    let wrap = |source: BoxedCause| FrontendError::PropertyLoad {
        file: file.to_path_buf(),
        source,
    };
    let source = WorkflowSource::from_file(file).map_err(|error| wrap(Box::new(error)))?;
    compiler
        .load_system_properties(&source)
        .map_err(|error| wrap(Box::new(error)))
}

/// Check the new file's properties against every previously accepted name,
/// then record them. Checking before inserting keeps a file from colliding
/// with itself.
fn merge_file_properties(
    merged: &mut HashMap<String, (SystemProperty, PathBuf)>,
    properties: HashSet<SystemProperty>,
    file: &Path,
) -> Result<()> {
    // Sorted so the first-reported collision is deterministic for a fixed
    // file order.
    let mut properties: Vec<SystemProperty> = properties.into_iter().collect();
    properties.sort_by_key(SystemProperty::fully_qualified_name);

    for property in &properties {
        let key = property.fully_qualified_name().to_lowercase();
        if let Some((_, origin)) = merged.get(&key) {
            return Err(FrontendError::DuplicateProperty {
                name: property.fully_qualified_name(),
                first: origin.clone(),
                second: file.to_path_buf(),
            });
        }
    }
    for property in properties {
        let key = property.fully_qualified_name().to_lowercase();
        merged.insert(key, (property, file.to_path_buf()));
    }
    Ok(())
}

fn default_property_files(app_home: Option<&Path>) -> Result<Vec<PathBuf>> {
    let Some(home) = app_home else {
        return Ok(Vec::new());
    };
    let directory = paths::properties_dir(home);
    if !directory.is_dir() {
        return Ok(Vec::new());
    }
    let mut found: Vec<PathBuf> =
        catalog::list_source_files(&directory, Extension::properties_extensions(), true)?
            .into_iter()
            .collect();
    // Stable processing order for discovered defaults.
    found.sort();
    Ok(found)
}
