// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Serialize;

/// Description of one accepted ordering parameter, for API introspection.
///
/// Documentation endpoints serialize these records to advertise the orderable fields of a
/// resource to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDescription {
    /// Complete query parameter key, for example `order[title]`.
    pub parameter: String,

    /// Field this parameter orders by.
    #[serde(rename = "property")]
    pub field: String,

    /// Wire type of the parameter value.
    #[serde(rename = "type")]
    pub value_type: &'static str,

    /// Flag indicating if clients have to send this parameter.
    pub required: bool,

    /// Values the parameter accepts.
    pub requirement: &'static str,

    /// Human readable description.
    pub description: String,
}

impl ParameterDescription {
    /// Returns the description of the ordering parameter for one field.
    pub fn new(parameter: &str, field: &str) -> Self {
        Self {
            parameter: format!("{}[{}]", parameter, field),
            field: field.to_string(),
            value_type: "string",
            required: false,
            requirement: "ASC|DESC",
            description: format!("Order by {}", field),
        }
    }
}
