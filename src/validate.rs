// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::catalog::FieldCatalog;
use crate::errors::OrderError;
use crate::order::{Direction, OrderSpec};
use crate::properties::EnabledFields;

/// Checks requested ordering settings strictly against catalog and enabled fields.
///
/// Resolving drops unusable entries silently. Deployments which prefer answering such requests
/// with an error can run this check up front, the first offending entry is reported. A spec
/// which passes this check resolves in full.
pub fn validate_order(
    spec: &OrderSpec,
    enabled: &EnabledFields,
    catalog: &FieldCatalog,
) -> Result<(), OrderError> {
    for (field, direction) in spec.iter() {
        if !catalog.contains(field) {
            return Err(OrderError::FieldUnknown(field.to_string()));
        }

        if !enabled.is_enabled(field) {
            return Err(OrderError::FieldDisabled(field.to_string()));
        }

        let direction = match direction {
            "" => enabled.default_direction(field).unwrap_or(direction),
            _ => direction,
        };

        if Direction::parse(direction).is_none() {
            return Err(OrderError::DirectionInvalid(
                direction.to_string(),
                field.to_string(),
            ));
        }
    }

    Ok(())
}
