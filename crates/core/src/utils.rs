//! Small formatting helpers.

/// Formats a number as uppercase letters A-Z, AA-ZZ, etc.
///
/// Used for cluster display names: 1 -> "A", 26 -> "Z", 27 -> "AA".
///
/// # Panics
/// Panics if value is 0.
pub fn format_int_alpha(value: u32) -> String {
    assert!(value > 0, "value must be positive");

    let mut result = Vec::new();
    let mut value = value;

    while value != 0 {
        let remainder = ((value - 1) % 26) as u8;
        value = (value - 1) / 26;
        result.push((b'A' + remainder) as char);
    }

    result.reverse();
    result.into_iter().collect()
}
