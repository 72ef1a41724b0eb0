// SPDX-License-Identifier: AGPL-3.0-or-later

use sqlx::{Database, QueryBuilder};

use crate::order::OrderClause;

/// Alias under which the source relation is conventionally joined in collection queries.
pub const DEFAULT_ALIAS: &str = "o";

/// Renders resolved order clauses into a SQL `ORDER BY` fragment.
///
/// Returns an empty string when there are no clauses so the surrounding query stays valid.
/// Field names are inlined into the SQL text, only clauses coming out of a catalog-checked
/// resolution may be rendered.
pub fn order_sql(clauses: &[OrderClause], alias: &str) -> String {
    if clauses.is_empty() {
        return String::new();
    }

    let fields: Vec<String> = clauses
        .iter()
        .map(|clause| format!("{}.{} {}", alias, clause.field, clause.direction.as_sql()))
        .collect();

    format!("ORDER BY {}", fields.join(", "))
}

/// Appends resolved order clauses to a sqlx query builder.
///
/// Appends nothing when there are no clauses. Field names are pushed as SQL text and not as bind
/// arguments, only clauses coming out of a catalog-checked resolution may be pushed.
pub fn push_order_by<DB>(builder: &mut QueryBuilder<DB>, clauses: &[OrderClause], alias: &str)
where
    DB: Database,
{
    if clauses.is_empty() {
        return;
    }

    builder.push(" ORDER BY ");

    let mut fields = builder.separated(", ");
    for clause in clauses {
        fields.push(format!(
            "{}.{} {}",
            alias,
            clause.field,
            clause.direction.as_sql()
        ));
    }
}
