//! value rules for the routing parameters that are free-form in a
//! [`super::QueryPatch`]. a value is only stored in a [`super::QueryState`]
//! if it survives encoding into a link and decoding back unchanged.

/// profile names are trimmed and must not be empty.
pub fn profile_name(value: &str) -> Result<String, String> {
    let name = value.trim();
    if name.is_empty() {
        Err(String::from("profile name must not be empty"))
    } else {
        Ok(name.to_string())
    }
}

/// access and egress weights are finite and non-negative.
pub fn beta(value: f64) -> Result<f64, String> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{value}' must be a non-negative number"))
    }
}
