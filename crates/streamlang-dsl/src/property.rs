// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! System properties keyed by fully-qualified name.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// A system property: a namespaced name bound to a value.
///
/// Identity is the fully-qualified name compared case-insensitively; two
/// properties whose names differ only in case are the same property for set
/// and merge purposes, regardless of their values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemProperty {
    namespace: String,
    name: String,
    value: Value,
}

impl SystemProperty {
    /// Create a property under a (possibly empty) namespace.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// The namespace, empty for top-level properties.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The property name within its namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The dot-delimited fully-qualified name.
    pub fn fully_qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

impl PartialEq for SystemProperty {
    fn eq(&self, other: &Self) -> bool {
        self.fully_qualified_name()
            .eq_ignore_ascii_case(&other.fully_qualified_name())
    }
}

impl Eq for SystemProperty {}

impl Hash for SystemProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fully_qualified_name().to_lowercase().hash(state);
    }
}
