// Copyright (C) 2025 Streamlang Contributors
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Typed input binding values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A converted input binding value.
///
/// Values marked sensitive never reveal their payload through `Display`; they
/// render as a fixed mask so that log lines and diagnostics stay safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValue {
    value: Value,
    sensitive: bool,
}

const SENSITIVE_MASK: &str = "********";

impl InputValue {
    /// Create a regular (non-sensitive) value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            sensitive: false,
        }
    }

    /// Create a sensitive value. Its payload is masked in `Display` output.
    pub fn sensitive(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            sensitive: true,
        }
    }

    /// The underlying JSON payload.
    pub fn get(&self) -> &Value {
        &self.value
    }

    /// Whether this value is masked in textual output.
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sensitive {
            f.write_str(SENSITIVE_MASK)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
