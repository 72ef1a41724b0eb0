// SPDX-License-Identifier: AGPL-3.0-or-later

use log::debug;

use crate::catalog::FieldCatalog;
use crate::describe::ParameterDescription;
use crate::order::{Direction, OrderClause, OrderSpec};
use crate::parse::extract_order;
use crate::properties::EnabledFields;

/// Field ordering falls back to when the request contains no ordering parameters at all.
const FALLBACK_FIELD: &str = "id";

/// Orders a collection by client-requested fields.
///
/// The filter reads its settings from one query parameter (`order[title]=asc` style), checks
/// them against the field catalog of the queried resource and turns them into resolved order
/// clauses. The order of the clauses is the same as the order specified in the query. For each
/// field passed, if the resource does not have such field or if the direction value is different
/// from `asc` or `desc` (case insensitive), the field is ignored.
///
/// The filter carries no per-request state and can be shared across request handlers.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    parameter: String,
    enabled: EnabledFields,
}

impl OrderFilter {
    /// Returns a new ordering filter.
    ///
    /// `parameter` is the query parameter name the ordering settings are read from, `enabled`
    /// restricts which fields clients can order by.
    pub fn new(parameter: &str, enabled: EnabledFields) -> Self {
        Self {
            parameter: parameter.to_string(),
            enabled,
        }
    }

    /// Returns the query parameter name this filter reads from.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Extracts the ordering settings addressed to this filter from decoded query pairs.
    pub fn extract<'a, I>(&self, pairs: I) -> OrderSpec
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        extract_order(&self.parameter, pairs)
    }

    /// Resolves requested ordering settings against the field catalog of the resource.
    ///
    /// An empty spec resolves to the `id ASC` fallback. Every other spec is translated entry by
    /// entry: fields which are not enabled or unknown to the catalog are dropped, an empty
    /// direction value takes the configured default of its field, unreadable direction values
    /// drop the entry. When all entries of a non-empty spec are dropped the result is empty and
    /// no fallback is applied.
    pub fn resolve(&self, spec: &OrderSpec, catalog: &FieldCatalog) -> Vec<OrderClause> {
        if spec.is_empty() {
            return vec![OrderClause::new(FALLBACK_FIELD, Direction::Ascending)];
        }

        let mut clauses = Vec::new();

        for (field, direction) in spec.iter() {
            if !self.enabled.is_enabled(field) || !catalog.contains(field) {
                debug!("Dropping ordering on unknown or disabled field '{}'", field);
                continue;
            }

            let direction = match direction {
                "" => self.enabled.default_direction(field).unwrap_or(direction),
                _ => direction,
            };

            match Direction::parse(direction) {
                Some(direction) => clauses.push(OrderClause::new(field, direction)),
                None => {
                    debug!(
                        "Dropping unreadable ordering direction '{}' for field '{}'",
                        direction, field
                    );
                }
            }
        }

        clauses
    }

    /// Describes the parameters this filter accepts for the given resource.
    ///
    /// Returns one description per enabled catalog field, in catalog order.
    pub fn describe(&self, catalog: &FieldCatalog) -> Vec<ParameterDescription> {
        catalog
            .iter()
            .filter(|field| self.enabled.is_enabled(field))
            .map(|field| ParameterDescription::new(&self.parameter, field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::catalog::FieldCatalog;
    use crate::order::{Direction, OrderClause, OrderSpec};
    use crate::properties::{EnabledField, EnabledFields};
    use crate::test_utils::{person_catalog, person_fields};

    use super::OrderFilter;

    fn person_filter() -> OrderFilter {
        OrderFilter::new("order", person_fields())
    }

    #[test]
    fn empty_spec_falls_back_to_id() {
        let clauses = person_filter().resolve(&OrderSpec::new(), &person_catalog());
        assert_eq!(clauses, vec![OrderClause::new("id", Direction::Ascending)]);
    }

    #[test]
    fn fallback_skips_catalog_and_allow_list_checks() {
        let filter = OrderFilter::new(
            "order",
            EnabledFields::List(vec![EnabledField::new("name")]),
        );
        let catalog = FieldCatalog::new(&["name"]);

        let clauses = filter.resolve(&OrderSpec::new(), &catalog);
        assert_eq!(clauses, vec![OrderClause::new("id", Direction::Ascending)]);
    }

    #[test]
    fn translates_entries_in_request_order() {
        let spec = OrderSpec::from_pairs(&[("name", "asc"), ("bogus", "desc"), ("age", "")]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(
            clauses,
            vec![
                OrderClause::new("name", Direction::Ascending),
                OrderClause::new("age", Direction::Descending),
            ]
        );
    }

    #[rstest]
    #[case::lowercase("asc", Direction::Ascending)]
    #[case::uppercase("ASC", Direction::Ascending)]
    #[case::mixed_case("aSc", Direction::Ascending)]
    #[case::descending("desc", Direction::Descending)]
    #[case::descending_uppercase("DESC", Direction::Descending)]
    fn normalizes_direction_casing(#[case] value: &str, #[case] expected: Direction) {
        let spec = OrderSpec::from_pairs(&[("name", value)]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![OrderClause::new("name", expected)]);
    }

    #[test]
    fn empty_direction_takes_configured_default() {
        let spec = OrderSpec::from_pairs(&[("age", "")]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![OrderClause::new("age", Direction::Descending)]);
    }

    #[test]
    fn empty_direction_without_default_drops_entry() {
        let spec = OrderSpec::from_pairs(&[("name", ""), ("age", "asc")]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![OrderClause::new("age", Direction::Ascending)]);
    }

    #[test]
    fn unreadable_direction_drops_only_that_entry() {
        let spec = OrderSpec::from_pairs(&[("name", "up"), ("age", "desc")]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![OrderClause::new("age", Direction::Descending)]);
    }

    #[test]
    fn no_fallback_when_all_entries_are_dropped() {
        let spec = OrderSpec::from_pairs(&[("name", "sideways")]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![]);
    }

    #[test]
    fn disabled_fields_are_dropped() {
        // "email" exists on the resource but ordering is not enabled for it
        let spec = OrderSpec::from_pairs(&[("email", "asc"), ("name", "desc")]);
        let clauses = person_filter().resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![OrderClause::new("name", Direction::Descending)]);
    }

    #[test]
    fn wildcard_enables_every_catalog_field() {
        let filter = OrderFilter::new("order", EnabledFields::Wildcard);
        let spec = OrderSpec::from_pairs(&[("email", "asc"), ("bogus", "desc")]);
        let clauses = filter.resolve(&spec, &person_catalog());

        assert_eq!(clauses, vec![OrderClause::new("email", Direction::Ascending)]);
    }

    #[test]
    fn extracts_and_resolves_query_pairs() {
        let pairs = vec![
            ("page", "2"),
            ("order[name]", "asc"),
            ("filter[age]", "20"),
            ("order[age]", ""),
        ];

        let filter = person_filter();
        let spec = filter.extract(pairs);
        let clauses = filter.resolve(&spec, &person_catalog());

        assert_eq!(
            clauses,
            vec![
                OrderClause::new("name", Direction::Ascending),
                OrderClause::new("age", Direction::Descending),
            ]
        );
    }

    #[test]
    fn describes_enabled_fields_in_catalog_order() {
        let descriptions = person_filter().describe(&person_catalog());

        let parameters: Vec<&str> = descriptions
            .iter()
            .map(|description| description.parameter.as_str())
            .collect();

        // "email" is part of the catalog but not enabled
        assert_eq!(parameters, vec!["order[id]", "order[name]", "order[age]"]);
    }

    #[test]
    fn describes_every_field_for_wildcard_filters() {
        let filter = OrderFilter::new("order", EnabledFields::Wildcard);
        let descriptions = filter.describe(&person_catalog());

        assert_eq!(descriptions.len(), person_catalog().len());
    }
}
