// SPDX-License-Identifier: AGPL-3.0-or-later

use once_cell::sync::Lazy;
use regex::Regex;

use crate::order::OrderSpec;

/// Pattern of query keys addressing one field of a parameter, like `order[title]`.
static PARAMETER_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\[\]]+)\[([^\[\]]*)\]$").unwrap());

/// Extracts the ordering settings for one parameter name from decoded query pairs.
///
/// Picks all keys of the `<parameter>[<field>]` form, in pair order. Keys addressing other
/// parameters or not following that form are ignored, a request without matching keys yields an
/// empty spec. Pairs are expected to be percent-decoded already, the transport stays with the
/// caller.
pub fn extract_order<'a, I>(parameter: &str, pairs: I) -> OrderSpec
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut spec = OrderSpec::new();

    for (key, value) in pairs {
        let captures = match PARAMETER_KEY.captures(key) {
            Some(captures) => captures,
            None => continue,
        };

        if &captures[1] != parameter {
            continue;
        }

        spec.insert(&captures[2], value);
    }

    spec
}
