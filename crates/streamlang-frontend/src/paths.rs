// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Filesystem conventions under the application home.
//!
//! Packaged installations set `STREAMLANG_HOME` to the installation root and
//! lay out `content/` (default dependency root), `configuration/properties/`
//! and `configuration/inputs/` beneath it. When the variable is unset the
//! front-end falls back to per-call defaults instead.

use std::path::{Path, PathBuf};

/// Environment variable naming the application home directory.
pub const APP_HOME_ENV: &str = "STREAMLANG_HOME";

const CONTENT_DIR: &str = "content";
const CONFIG_DIR: &str = "configuration";
const PROPERTIES_DIR: &str = "properties";
const INPUTS_DIR: &str = "inputs";

/// Read the application home from the environment, if configured.
pub fn app_home() -> Option<PathBuf> {
    std::env::var_os(APP_HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// The conventional default dependency root: `{home}/content`.
pub fn content_dir(home: &Path) -> PathBuf {
    home.join(CONTENT_DIR)
}

/// The default system-property root: `{home}/configuration/properties`.
pub fn properties_dir(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(PROPERTIES_DIR)
}

/// The default input-binding root: `{home}/configuration/inputs`.
pub fn inputs_dir(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(INPUTS_DIR)
}

/// The file name component of a path, falling back to the full display string
/// for paths without one.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_layout() {
        let home = Path::new("/opt/streamlang");
        assert_eq!(content_dir(home), Path::new("/opt/streamlang/content"));
        assert_eq!(
            properties_dir(home),
            Path::new("/opt/streamlang/configuration/properties")
        );
        assert_eq!(
            inputs_dir(home),
            Path::new("/opt/streamlang/configuration/inputs")
        );
    }

    #[test]
    fn test_file_name_fallback() {
        assert_eq!(file_name(Path::new("/tmp/flow.sl")), "flow.sl");
        assert_eq!(file_name(Path::new("/")), "/");
    }
}
