use std::borrow::Cow;

use serde_json::Value;

/// Safe navigation over an untyped order document.
///
/// The commerce export has no enforced schema: any field may be missing,
/// null, or carry an unexpected shape. These helpers walk a path of object
/// keys and collapse every irregularity into an absence (`None`) or an empty
/// string, so a single odd record can never abort a batch.
pub fn member<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;

    for key in path {
        current = current.as_object()?.get(*key)?;
    }

    Some(current)
}

/// Text view of the scalar at `path`.
///
/// Strings pass through untouched. Bare numbers are rendered as decimal text
/// because the export occasionally emits `donationAmount` unquoted. Null,
/// booleans, arrays, objects and missing paths all read as the empty string.
pub fn text<'a>(root: &'a Value, path: &[&str]) -> Cow<'a, str> {
    match member(root, path) {
        Some(Value::String(value)) => Cow::Borrowed(value.as_str()),
        Some(Value::Number(value)) => Cow::Owned(value.to_string()),
        _ => Cow::Borrowed("")
    }
}

/// First element of the array at `key`, if `key` holds a non-empty array.
pub fn first<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    root.get(key)?.as_array()?.first()
}

/// Last element of the array at `key`, if `key` holds a non-empty array.
pub fn last<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    root.get(key)?.as_array()?.last()
}
