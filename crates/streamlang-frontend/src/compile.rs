// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Compilation orchestration.
//!
//! [`CompilerFrontend`] is the top-level entry point: it validates the
//! primary file, resolves the dependency-source set, and delegates to the
//! external compiler. Configuration loading (system properties, input
//! bindings) is exposed on the same type but is invoked independently by the
//! caller, never chained off compilation.

use crate::dependencies;
use crate::error::{FrontendError, Result};
use crate::inputs;
use crate::paths;
use crate::properties;
use crate::traits::{InputValueConverter, WorkflowCompiler};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use streamlang_dsl::{
    CompilationArtifact, Extension, InputValue, ModellingResult, SystemProperty, WorkflowSource,
};
use tracing::error;

/// The compiler front-end: preprocessing and orchestration between a CLI
/// invocation and the external workflow compiler.
#[derive(Debug)]
pub struct CompilerFrontend<C, V> {
    compiler: C,
    converter: V,
    app_home: Option<PathBuf>,
}

impl<C, V> CompilerFrontend<C, V>
where
    C: WorkflowCompiler,
    V: InputValueConverter,
{
    /// Create a front-end reading the application home from the environment
    /// (see [`paths::APP_HOME_ENV`]).
    pub fn new(compiler: C, converter: V) -> Self {
        Self::with_app_home(compiler, converter, paths::app_home())
    }

    /// Create a front-end with an explicit application home.
    pub fn with_app_home(compiler: C, converter: V, app_home: Option<PathBuf>) -> Self {
        Self {
            compiler,
            converter,
            app_home,
        }
    }

    /// The configured application home, if any.
    pub fn app_home(&self) -> Option<&Path> {
        self.app_home.as_deref()
    }

    /// Compile one file into an artifact.
    ///
    /// `dependencies` names folders whose workflow sources form the
    /// dependency set; when empty, the two-tier default applies: the
    /// application home's `content/` directory when it exists, otherwise the
    /// primary file's parent directory.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing, carries a non-workflow extension, a
    /// dependency root is invalid, or the compiler rejects the source.
    pub fn compile(
        &self,
        file: impl AsRef<Path>,
        dependencies: &[PathBuf],
    ) -> Result<CompilationArtifact> {
        let source = self.read_primary(file.as_ref())?;
        let dependency_sources =
            dependencies::resolve(dependencies, &source, self.app_home.as_deref())?;
        self.compiler
            .compile(&source, &dependency_sources)
            .map_err(|cause| compilation_failed(source.path(), cause))
    }

    /// Compile one file into a modelling result annotated with its file.
    ///
    /// Validation and dependency resolution are identical to [`Self::compile`].
    pub fn compile_source(
        &self,
        file: impl AsRef<Path>,
        dependencies: &[PathBuf],
    ) -> Result<ModellingResult> {
        let source = self.read_primary(file.as_ref())?;
        let dependency_sources =
            dependencies::resolve(dependencies, &source, self.app_home.as_deref())?;
        self.compiler
            .compile_source(&source, &dependency_sources)
            .map(|result| result.with_file(source.path()))
            .map_err(|cause| compilation_failed(source.path(), cause))
    }

    /// Compile every workflow source found under the given folders.
    ///
    /// All folders are expanded into one shared source pool; each discovered
    /// source is then compiled independently against the full pool. A file
    /// that fails compilation is logged and omitted from the returned
    /// sequence; the batch itself only fails when a folder cannot be
    /// expanded. Result order is unspecified.
    pub fn compile_folders(&self, folders: &[PathBuf]) -> Result<Vec<ModellingResult>> {
        let pool = dependencies::sources_from_folders(folders)?;
        let mut results = Vec::new();
        for source in &pool {
            match self.compiler.compile_source(source, &pool) {
                Ok(result) => results.push(result.with_file(source.path())),
                Err(cause) => {
                    error!(
                        file = %source.path().display(),
                        error = %cause,
                        "Failed compilation for file, skipping"
                    );
                }
            }
        }
        Ok(results)
    }

    /// Load and merge system properties from the given files, or from the
    /// default properties directory when the list is empty.
    pub fn load_system_properties(&self, files: &[PathBuf]) -> Result<HashSet<SystemProperty>> {
        properties::load_system_properties(&self.compiler, files, self.app_home.as_deref())
    }

    /// Load and merge input bindings from the given files, or from the
    /// default inputs directory when the list is empty. `Ok(None)` means no
    /// input file was configured at all.
    pub fn load_inputs(&self, files: &[PathBuf]) -> Result<Option<HashMap<String, InputValue>>> {
        inputs::load_inputs(&self.converter, files, self.app_home.as_deref())
    }

    fn read_primary(&self, file: &Path) -> Result<WorkflowSource> {
        if !file.is_file() {
            return Err(FrontendError::InvalidFile {
                name: paths::file_name(file),
            });
        }
        Extension::validate_workflow_extension(&paths::file_name(file))?;
        Ok(WorkflowSource::from_file(file)?)
    }
}

fn compilation_failed<E>(file: &Path, cause: E) -> FrontendError
where
    E: std::error::Error + Send + Sync + 'static,
{
    error!(file = %file.display(), error = %cause, "Failed compilation for file");
    FrontendError::CompilationFailed {
        file: file.to_path_buf(),
        source: Box::new(cause),
    }
}
