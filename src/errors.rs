// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

/// Validation errors for requested orderings.
#[derive(Error, Debug)]
pub enum OrderError {
    /// Ordering is based on a field which is not part of the given catalog.
    #[error("Can't apply ordering on unknown field '{0}'")]
    FieldUnknown(String),

    /// Ordering is based on a field which ordering is not enabled for.
    #[error("Can't apply ordering on disabled field '{0}'")]
    FieldDisabled(String),

    /// Ordering direction value can not be read.
    #[error("Can't read ordering direction '{0}' for field '{1}', expected 'asc' or 'desc'")]
    DirectionInvalid(String, String),
}
