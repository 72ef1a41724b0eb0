// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Deserialize;

/// A field ordering is enabled for, optionally with a default direction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnabledField {
    /// Name of the field.
    pub name: String,

    /// Direction used when the client leaves the parameter value empty.
    ///
    /// Kept as the raw configured string. It runs through the same normalization as
    /// client-supplied values when the spec is resolved, an unusable default drops the entry
    /// there instead of failing the configuration.
    #[serde(default)]
    pub default_direction: Option<String>,
}

impl EnabledField {
    /// Returns a new enabled field without a default direction.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default_direction: None,
        }
    }

    /// Returns a new enabled field with a default direction.
    pub fn with_default(name: &str, direction: &str) -> Self {
        Self {
            name: name.to_string(),
            default_direction: Some(direction.to_string()),
        }
    }
}

/// Fields ordering is enabled for.
#[derive(Debug, Clone, PartialEq)]
pub enum EnabledFields {
    /// Ordering is enabled on every field of the catalog, without any defaults.
    Wildcard,

    /// Ordering is restricted to this list of fields.
    List(Vec<EnabledField>),
}

impl EnabledFields {
    /// Returns true if ordering is enabled on this field.
    pub fn is_enabled(&self, field: &str) -> bool {
        match self {
            Self::Wildcard => true,
            Self::List(fields) => fields.iter().any(|enabled| enabled.name == field),
        }
    }

    /// Returns the configured default direction for a field, if there is one.
    pub fn default_direction(&self, field: &str) -> Option<&str> {
        match self {
            Self::Wildcard => None,
            Self::List(fields) => fields
                .iter()
                .find(|enabled| enabled.name == field)
                .and_then(|enabled| enabled.default_direction.as_deref()),
        }
    }
}

impl Default for EnabledFields {
    fn default() -> Self {
        Self::Wildcard
    }
}

impl<'de> Deserialize<'de> for EnabledFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields: Vec<EnabledField> = Vec::deserialize(deserializer)?;

        if fields.is_empty() {
            Ok(Self::Wildcard)
        } else {
            Ok(Self::List(fields))
        }
    }
}
