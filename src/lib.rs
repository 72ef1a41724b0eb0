// SPDX-License-Identifier: AGPL-3.0-or-later

//! # orderby
//!
//! Order collection queries by client-requested fields.
//!
//! Collection endpoints let clients choose the order of the returned items through query
//! parameters like `order[name]=asc&order[age]=desc`. This crate translates such parameters into
//! SQL `ORDER BY` clauses: requested fields are checked against the field catalog of the queried
//! resource and an optional allow-list, direction values are normalized, unusable entries are
//! dropped silently. A request without any ordering parameters falls back to ordering by `id`.
//!
//! ```
//! use orderby::{EnabledField, EnabledFields, FieldCatalog, OrderFilter};
//!
//! let catalog = FieldCatalog::new(&["id", "name", "age"]);
//! let filter = OrderFilter::new(
//!     "order",
//!     EnabledFields::List(vec![
//!         EnabledField::new("name"),
//!         EnabledField::with_default("age", "desc"),
//!     ]),
//! );
//!
//! let spec = filter.extract(vec![("order[name]", "asc"), ("order[age]", "")]);
//! let clauses = filter.resolve(&spec, &catalog);
//!
//! assert_eq!(
//!     orderby::order_sql(&clauses, "o"),
//!     "ORDER BY o.name ASC, o.age DESC"
//! );
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod catalog;
mod describe;
mod errors;
mod filter;
mod order;
mod parse;
mod properties;
mod sql;
#[cfg(test)]
mod test_utils;
mod validate;

pub use catalog::FieldCatalog;
pub use describe::ParameterDescription;
pub use errors::OrderError;
pub use filter::OrderFilter;
pub use order::{Direction, OrderClause, OrderSpec};
pub use parse::extract_order;
pub use properties::{EnabledField, EnabledFields};
pub use sql::{order_sql, push_order_by, DEFAULT_ALIAS};
pub use validate::validate_order;
