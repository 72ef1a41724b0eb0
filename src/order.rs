// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::{Deserialize, Serialize};

/// Options to determine the direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Arrange items from smallest to largest value.
    #[serde(rename = "ASC")]
    Ascending,

    /// Arrange items from largest to smallest value.
    #[serde(rename = "DESC")]
    Descending,
}

impl Direction {
    /// Reads a direction from a client-supplied value, tolerating any casing.
    ///
    /// Returns `None` for everything which is not `asc` or `desc`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "ASC" => Some(Self::Ascending),
            "DESC" => Some(Self::Descending),
            _ => None,
        }
    }

    /// Returns the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Ordering settings as requested by the client.
///
/// Entries keep the order in which the parameters appeared in the request. Direction values stay
/// unparsed until the spec is resolved against the catalog of a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSpec(Vec<(String, String)>);

impl OrderSpec {
    /// Returns a new, empty set of ordering settings.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns ordering settings populated from field name and direction value pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut spec = Self::new();

        for (field, direction) in pairs {
            spec.insert(field, direction);
        }

        spec
    }

    /// Adds an ordering setting for a field.
    ///
    /// Adding a field a second time updates the direction value but keeps the position of the
    /// first insertion, like repeated query keys do on the transport.
    pub fn insert(&mut self, field: &str, direction: &str) {
        match self.0.iter_mut().find(|(name, _)| name == field) {
            Some((_, value)) => *value = direction.to_string(),
            None => self.0.push((field.to_string(), direction.to_string())),
        }
    }

    /// Returns the total number of ordering settings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no ordering was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all ordering settings in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(field, direction)| (field.as_str(), direction.as_str()))
    }
}

/// A single resolved ordering which can be applied to a database query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    /// Field the results are ordered by.
    pub field: String,

    /// Direction the results are ordered in.
    pub direction: Direction,
}

impl OrderClause {
    /// Returns a new resolved ordering.
    pub fn new(field: &str, direction: Direction) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }
}
