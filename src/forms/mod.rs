use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod tags;

/// Maximum allowed length for category, product and tag names.
pub const NAME_MAX_LEN: usize = 128;
pub(crate) const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Trim the input, collapse whitespace runs into a single space and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Distinguish an explicit `null` from a missing key: used with
/// `#[serde(default, deserialize_with = "deserialize_present")]` on `Option<Option<T>>`.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Rock \t\n Music "), "Rock Music");
    }

    #[test]
    fn sanitize_inline_text_drops_control_characters() {
        assert_eq!(sanitize_inline_text("Sh\u{0007}irts"), "Shirts");
    }
}
