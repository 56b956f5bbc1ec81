//! Icon name normalization.

use crate::error::SourceError;

/// Prefix applied when a name would otherwise start with a digit.
const DIGIT_PREFIX: &str = "Icon";

/// Converts a hyphenated icon name into a PascalCase identifier.
///
/// Each `-`-separated part has its first character uppercased and the rest
/// lowercased, so `circle-x`, `Circle-X` and `CIRCLE-X` all become `CircleX`.
/// Digits pass through unchanged (`number-1` -> `Number1`).
///
/// Only ASCII letters, digits and `-` are accepted, and every part must be
/// non-empty. A result starting with a digit is prefixed with `Icon`
/// (`3d-box` -> `Icon3dBox`) so it is always a valid identifier.
pub fn to_pascal_case(name: &str) -> Result<String, SourceError> {
    validate(name)?;

    let mut result = String::with_capacity(name.len());
    for part in name.split('-') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert_str(0, DIGIT_PREFIX);
    }

    Ok(result)
}

/// Converts a hyphenated icon name into a snake_case identifier.
///
/// `a-arrow-down` -> `a_arrow_down`. The name is not validated; pass names
/// that [`to_pascal_case`] accepted. Keyword escaping is left to the emitter.
pub fn to_snake_case(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

fn validate(name: &str) -> Result<(), SourceError> {
    let invalid = |reason| SourceError::InvalidIdentifier {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid("only ASCII letters, digits and '-' are allowed"));
    }
    if name.split('-').any(str::is_empty) {
        return Err(invalid("empty segment between hyphens"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_table() {
        let cases = [
            ("circle-x", "CircleX"),
            ("chevron-down", "ChevronDown"),
            ("a-arrow-down", "AArrowDown"),
            ("x", "X"),
            ("align-horizontal-space-between", "AlignHorizontalSpaceBetween"),
            ("number-1", "Number1"),
            ("Circle-X", "CircleX"),
            ("menu", "Menu"),
            ("CIRCLE-X", "CircleX"),
            ("arrow-down-0-1", "ArrowDown01"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                to_pascal_case(input).unwrap(),
                expected,
                "to_pascal_case({input:?})"
            );
        }
    }

    #[test]
    fn test_leading_digit_is_prefixed() {
        assert_eq!(to_pascal_case("3d-box").unwrap(), "Icon3dBox");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = to_pascal_case("").unwrap_err();
        assert!(matches!(err, SourceError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for name in ["circle_x", "circle x", "cirçle", "a.b"] {
            assert!(
                matches!(
                    to_pascal_case(name),
                    Err(SourceError::InvalidIdentifier { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_segments_rejected() {
        for name in ["-circle", "circle-", "circle--x"] {
            assert!(to_pascal_case(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("a-arrow-down"), "a_arrow_down");
        assert_eq!(to_snake_case("Circle-X"), "circle_x");
        assert_eq!(to_snake_case("number-1"), "number_1");
    }
}
