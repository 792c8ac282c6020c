mod runtime;

use crate::rule::Value;
use std::collections::BTreeMap;

// Build a map row from (field, value) pairs.
pub(super) fn row<'a>(
    fields: impl IntoIterator<Item = (&'a str, Value)>,
) -> BTreeMap<String, Value> {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
