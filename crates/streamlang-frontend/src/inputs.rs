// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Input-binding loading and merging.
//!
//! Input files are YAML mappings of input name to value. Files are processed
//! in order and merged with last-write-wins semantics: a later file's binding
//! for a name overwrites an earlier file's, supporting layered input-file
//! precedence. Unlike system properties, duplicates are never an error here.
//!
//! The result is a tri-state: `Ok(None)` when no file was configured and no
//! default exists (distinct from an empty mapping), `Ok(Some(map))` on
//! success, and an error when any configured file is blank or fails to
//! deserialize to a non-empty mapping.

use crate::catalog;
use crate::error::{BoxedCause, FrontendError, Result};
use crate::paths;
use crate::traits::InputValueConverter;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use streamlang_dsl::{Extension, InputValue};
use thiserror::Error;
use tracing::info;

/// Load and merge input bindings from the given files.
///
/// An empty `files` list falls back to single-level discovery under
/// `{app_home}/configuration/inputs`; when nothing is found there the result
/// is `Ok(None)`, signalling "no input file configured".
pub(crate) fn load_inputs<V: InputValueConverter>(
    converter: &V,
    files: &[PathBuf],
    app_home: Option<&Path>,
) -> Result<Option<HashMap<String, InputValue>>> {
    let files: Vec<PathBuf> = if files.is_empty() {
        let defaults = default_input_files(app_home)?;
        if defaults.is_empty() {
            return Ok(None);
        }
        defaults
    } else {
        files.to_vec()
    };

    let mut result = HashMap::new();
    for file in &files {
        info!(file = %file.display(), "Loading inputs file");
        let bindings = load_from_file(converter, file)?;
        result.extend(bindings);
    }
    Ok(Some(result))
}

fn load_from_file<V: InputValueConverter>(
    converter: &V,
    file: &Path,
) -> Result<HashMap<String, InputValue>> {
    let wrap = |source: BoxedCause| FrontendError::InputLoad {
        file: file.to_path_buf(),
        source,
    };
    let empty_or_invalid = || FrontendError::EmptyOrInvalidInputFile {
        file: file.to_path_buf(),
    };

    let content = fs::read_to_string(file).map_err(|error| wrap(Box::new(error)))?;
    if content.trim().is_empty() {
        return Err(empty_or_invalid());
    }

    let parsed: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|error| wrap(Box::new(error)))?;
    let mapping = match parsed {
        serde_yaml::Value::Mapping(mapping) if !mapping.is_empty() => mapping,
        // "no content" and "content present but empty/wrong-shape" collapse
        // to the same error kind
        _ => return Err(empty_or_invalid()),
    };

    converter
        .convert_input_from_map(mapping, &paths::file_name(file))
        .map_err(|error| wrap(Box::new(error)))
}

fn default_input_files(app_home: Option<&Path>) -> Result<Vec<PathBuf>> {
    let Some(home) = app_home else {
        return Ok(Vec::new());
    };
    let directory = paths::inputs_dir(home);
    if !directory.is_dir() {
        return Ok(Vec::new());
    }
    let mut found: Vec<PathBuf> =
        catalog::list_source_files(&directory, Extension::yaml_extensions(), false)?
            .into_iter()
            .collect();
    // Stable override order for discovered defaults.
    found.sort();
    Ok(found)
}

/// Default [`InputValueConverter`]: converts each YAML entry into a JSON
/// payload, marking nothing sensitive. Embedders with richer value semantics
/// supply their own converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlValueConverter;

impl InputValueConverter for YamlValueConverter {
    type Error = ConversionError;

    fn convert_input_from_map(
        &self,
        raw: serde_yaml::Mapping,
        origin_file_name: &str,
    ) -> std::result::Result<HashMap<String, InputValue>, Self::Error> {
        raw.into_iter()
            .map(|(key, value)| {
                let name = match key {
                    serde_yaml::Value::String(name) => name,
                    other => {
                        return Err(ConversionError {
                            name: format!("{other:?}"),
                            origin: origin_file_name.to_string(),
                            message: "input names must be strings".to_string(),
                        });
                    }
                };
                let payload = serde_json::to_value(&value).map_err(|error| ConversionError {
                    name: name.clone(),
                    origin: origin_file_name.to_string(),
                    message: error.to_string(),
                })?;
                Ok((name, InputValue::new(payload)))
            })
            .collect()
    }
}

/// Failure converting one raw input entry into a typed binding.
#[derive(Debug, Clone, Error)]
#[error("Input '{name}' in file {origin} could not be converted: {message}")]
pub struct ConversionError {
    name: String,
    origin: String,
    message: String,
}
