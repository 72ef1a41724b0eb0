// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::catalog::FieldCatalog;
use crate::properties::{EnabledField, EnabledFields};

/// Returns the field catalog used across the crate tests.
pub fn person_catalog() -> FieldCatalog {
    FieldCatalog::new(&["id", "name", "age", "email"])
}

/// Returns an allow-list enabling `id`, `name` and `age`, with a descending default on `age`.
pub fn person_fields() -> EnabledFields {
    EnabledFields::List(vec![
        EnabledField::new("id"),
        EnabledField::new("name"),
        EnabledField::with_default("age", "desc"),
    ])
}
