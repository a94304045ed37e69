// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Dependency-source resolution for compile requests.
//!
//! When the caller names dependency folders explicitly, each one is expanded
//! recursively into plain `.sl` sources. When no folders are given, a two-tier
//! default applies: the conventional `content/` directory under the
//! application home when it exists, otherwise the primary file's parent
//! directory. The primary file itself never appears in its own dependency
//! set; the compiler receives it separately.

use crate::catalog;
use crate::error::Result;
use crate::paths;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use streamlang_dsl::{Extension, WorkflowSource};

/// Resolve the effective dependency-source set for one compile request.
pub(crate) fn resolve(
    explicit: &[PathBuf],
    primary: &WorkflowSource,
    app_home: Option<&Path>,
) -> Result<HashSet<WorkflowSource>> {
    let roots: Vec<PathBuf> = if explicit.is_empty() {
        vec![default_root(primary.path(), app_home)]
    } else {
        explicit.to_vec()
    };

    let mut sources = sources_from_folders(&roots)?;
    sources.remove(primary);
    Ok(sources)
}

/// Expand a list of folders into the union of their dependency sources,
/// recursively. Only plain `.sl` files participate; `.sl.yaml`/`.sl.yml`
/// files are valid primaries but are never collected into dependency sets.
pub(crate) fn sources_from_folders(folders: &[PathBuf]) -> Result<HashSet<WorkflowSource>> {
    let mut sources = HashSet::new();
    for folder in folders {
        for path in catalog::list_source_files(folder, Extension::dependency_extensions(), true)? {
            sources.insert(WorkflowSource::from_file(&path)?);
        }
    }
    Ok(sources)
}

fn default_root(primary: &Path, app_home: Option<&Path>) -> PathBuf {
    if let Some(home) = app_home {
        let content_root = paths::content_dir(home);
        if content_root.is_dir() {
            return content_root;
        }
    }
    // The primary file was already validated, so its parent exists.
    primary
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
