// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Extension classification for the `.sl` extension family.
//!
//! Streamlang sources use a small family of file extensions where narrower
//! suffixes nest inside broader ones: a `.prop.sl` properties file also ends in
//! `.sl`, and a `.sl.yaml` source also ends in `.yaml`. Classification is
//! therefore a most-specific-match lookup over an ordered suffix list rather
//! than a plain `Path::extension` check, so that a properties-flavored source
//! is never mistaken for an ordinary workflow source.

use thiserror::Error;

/// A recognized Streamlang file extension.
///
/// Extensions fall into three classes:
///
/// | Class | Extensions |
/// |-------|------------|
/// | Workflow source | `sl`, `sl.yaml`, `sl.yml` |
/// | System properties | `prop.sl` |
/// | YAML input | `yaml`, `yml` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Plain workflow source (`.sl`).
    Sl,
    /// Workflow source with an explicit YAML suffix (`.sl.yaml`).
    SlYaml,
    /// Workflow source with an explicit YAML suffix (`.sl.yml`).
    SlYml,
    /// Properties-flavored workflow source (`.prop.sl`).
    PropSl,
    /// Generic YAML file (`.yaml`).
    Yaml,
    /// Generic YAML file (`.yml`).
    Yml,
}

/// Classification order: most specific suffix first, so that `x.prop.sl`
/// resolves to `PropSl` and not to `Sl`.
const CLASSIFICATION_ORDER: &[Extension] = &[
    Extension::PropSl,
    Extension::SlYaml,
    Extension::SlYml,
    Extension::Yaml,
    Extension::Yml,
    Extension::Sl,
];

const WORKFLOW_EXTENSIONS: &[Extension] = &[Extension::Sl, Extension::SlYaml, Extension::SlYml];
const DEPENDENCY_EXTENSIONS: &[Extension] = &[Extension::Sl];
const PROPERTIES_EXTENSIONS: &[Extension] = &[Extension::PropSl];
const YAML_EXTENSIONS: &[Extension] = &[Extension::Yaml, Extension::Yml];

impl Extension {
    /// The suffix for this extension, without the leading dot.
    pub fn value(self) -> &'static str {
        match self {
            Extension::Sl => "sl",
            Extension::SlYaml => "sl.yaml",
            Extension::SlYml => "sl.yml",
            Extension::PropSl => "prop.sl",
            Extension::Yaml => "yaml",
            Extension::Yml => "yml",
        }
    }

    /// Classify a file name by its most specific matching extension.
    ///
    /// Returns `None` when the file name matches no recognized extension.
    pub fn find(file_name: &str) -> Option<Extension> {
        CLASSIFICATION_ORDER
            .iter()
            .copied()
            .find(|extension| has_suffix(file_name, extension.value()))
    }

    /// The workflow-source extension class (`sl`, `sl.yaml`, `sl.yml`).
    ///
    /// Note that `prop.sl` files classify as [`Extension::PropSl`] and are not
    /// part of this class even though their names end in `.sl`.
    pub fn workflow_extensions() -> &'static [Extension] {
        WORKFLOW_EXTENSIONS
    }

    /// The dependency-source extension class (`sl`).
    ///
    /// Narrower than [`Extension::workflow_extensions`]: any workflow
    /// extension is accepted for a primary file, but folder scans collecting
    /// dependency sources keep only plain `.sl` files.
    pub fn dependency_extensions() -> &'static [Extension] {
        DEPENDENCY_EXTENSIONS
    }

    /// The system-properties extension class (`prop.sl`).
    pub fn properties_extensions() -> &'static [Extension] {
        PROPERTIES_EXTENSIONS
    }

    /// The YAML input extension class (`yaml`, `yml`).
    pub fn yaml_extensions() -> &'static [Extension] {
        YAML_EXTENSIONS
    }

    /// Validate that a file name carries a workflow-source extension.
    pub fn validate_workflow_extension(file_name: &str) -> Result<(), ExtensionError> {
        validate_in_class(file_name, WORKFLOW_EXTENSIONS)
    }

    /// Validate that a file name carries the system-properties extension.
    pub fn validate_properties_extension(file_name: &str) -> Result<(), ExtensionError> {
        validate_in_class(file_name, PROPERTIES_EXTENSIONS)
    }
}

fn has_suffix(file_name: &str, suffix: &str) -> bool {
    file_name
        .strip_suffix(suffix)
        .is_some_and(|stem| stem.ends_with('.') && stem.len() > 1)
}

fn validate_in_class(file_name: &str, class: &[Extension]) -> Result<(), ExtensionError> {
    let matched = Extension::find(file_name);
    if matched.is_some_and(|extension| class.contains(&extension)) {
        Ok(())
    } else {
        Err(ExtensionError::Unsupported {
            file: file_name.to_string(),
            expected: class
                .iter()
                .map(|extension| extension.value())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Extension validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    /// The file does not carry any extension from the required class.
    #[error("File: {file} must have one of the following extensions: {expected}")]
    Unsupported {
        /// The offending file name.
        file: String,
        /// Comma-separated list of accepted extensions.
        expected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_most_specific_suffix() {
        assert_eq!(Extension::find("flow.sl"), Some(Extension::Sl));
        assert_eq!(Extension::find("flow.sl.yaml"), Some(Extension::SlYaml));
        assert_eq!(Extension::find("flow.sl.yml"), Some(Extension::SlYml));
        assert_eq!(Extension::find("props.prop.sl"), Some(Extension::PropSl));
        assert_eq!(Extension::find("inputs.yaml"), Some(Extension::Yaml));
        assert_eq!(Extension::find("inputs.yml"), Some(Extension::Yml));
    }

    #[test]
    fn test_prop_sl_never_classifies_as_sl() {
        let matched = Extension::find("system.prop.sl").unwrap();
        assert!(!Extension::workflow_extensions().contains(&matched));
    }

    #[test]
    fn test_dependency_class_is_plain_sl_only() {
        let sl = Extension::find("flow.sl").unwrap();
        let sl_yaml = Extension::find("flow.sl.yaml").unwrap();
        let sl_yml = Extension::find("flow.sl.yml").unwrap();

        assert!(Extension::dependency_extensions().contains(&sl));
        assert!(!Extension::dependency_extensions().contains(&sl_yaml));
        assert!(!Extension::dependency_extensions().contains(&sl_yml));
    }

    #[test]
    fn test_unrecognized_names() {
        assert_eq!(Extension::find("flow.txt"), None);
        assert_eq!(Extension::find("flow"), None);
        // A bare suffix with no stem is not a match
        assert_eq!(Extension::find(".sl"), None);
        assert_eq!(Extension::find("sl"), None);
    }

    #[test]
    fn test_suffix_requires_dot_boundary() {
        // "nosl" ends in "sl" but is not a .sl file
        assert_eq!(Extension::find("flow.nosl"), None);
        assert_eq!(Extension::find("flowsl"), None);
    }

    #[test]
    fn test_validate_workflow_extension() {
        assert!(Extension::validate_workflow_extension("flow.sl").is_ok());
        assert!(Extension::validate_workflow_extension("flow.sl.yaml").is_ok());

        let err = Extension::validate_workflow_extension("props.prop.sl").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("props.prop.sl"));
        assert!(message.contains("sl, sl.yaml, sl.yml"));
    }

    #[test]
    fn test_validate_properties_extension() {
        assert!(Extension::validate_properties_extension("system.prop.sl").is_ok());
        assert!(Extension::validate_properties_extension("flow.sl").is_err());
        assert!(Extension::validate_properties_extension("inputs.yaml").is_err());
    }
}
