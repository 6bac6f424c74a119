//! Env-style parsing helpers.

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Value of an env-style variable, `None` when unset or blank.
pub fn non_empty(
    lookup: &dyn Fn(&str) -> Option<String>,
    name: &str,
) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}
