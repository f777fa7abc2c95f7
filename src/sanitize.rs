//! Input sanitizers for customizer settings
//!
//! Every write to a theme mod goes through a sanitizer first. A sanitizer
//! either accepts the raw input (possibly normalised) or rejects it, in which
//! case the store keeps whatever value it held before.

use crate::units::Unit;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Outcome of sanitizing a raw input
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitized {
    /// Input is valid; store this value
    Accepted(Value),
    /// Input is invalid; keep the prior value
    Rejected,
}

impl Sanitized {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Sanitized::Accepted(_))
    }

    /// Accepted value, `None` when rejected
    pub fn into_value(self) -> Option<Value> {
        match self {
            Sanitized::Accepted(value) => Some(value),
            Sanitized::Rejected => None,
        }
    }
}

/// Signature shared by all sanitizers
pub type Sanitizer = fn(&Value) -> Sanitized;

// Leading/trailing whitespace, optional sign, decimal or leading-dot fraction,
// optional exponent. No hex, no bare ".", no "inf"/"nan".
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .expect("numeric pattern is valid")
});

/// Permissive numeric check used by every value sanitizer and by rendering.
///
/// JSON numbers are numeric; strings are numeric when they parse as a
/// decimal number, surrounding whitespace allowed. Anything else is not.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => NUMERIC.is_match(s),
        _ => false,
    }
}

/// Accept numeric input unchanged
pub fn sanitize_radius_value(raw: &Value) -> Sanitized {
    if is_numeric(raw) {
        Sanitized::Accepted(raw.clone())
    } else {
        Sanitized::Rejected
    }
}

/// Accept only the ten known unit codes (`value1`..`value10`)
pub fn sanitize_unit(raw: &Value) -> Sanitized {
    match raw.as_str().and_then(Unit::from_code) {
        Some(_) => Sanitized::Accepted(raw.clone()),
        None => Sanitized::Rejected,
    }
}

/// Accept anything. Dimension unit settings are not validated.
pub fn sanitize_passthrough(raw: &Value) -> Sanitized {
    Sanitized::Accepted(raw.clone())
}

/// `auto` / `inherit` (any case, stored lowercased) or a number
pub fn sanitize_height_width(raw: &Value) -> Sanitized {
    keyword_or_numeric(raw, &["auto", "inherit"])
}

/// `none` / `inherit` (any case, stored lowercased) or a number
pub fn sanitize_max_height_width(raw: &Value) -> Sanitized {
    keyword_or_numeric(raw, &["none", "inherit"])
}

/// `inherit` (any case, stored lowercased) or a number
pub fn sanitize_min_height_width(raw: &Value) -> Sanitized {
    keyword_or_numeric(raw, &["inherit"])
}

fn keyword_or_numeric(raw: &Value, keywords: &[&str]) -> Sanitized {
    if let Some(s) = raw.as_str() {
        let lowered = s.to_lowercase();
        if keywords.contains(&lowered.as_str()) {
            return Sanitized::Accepted(Value::String(lowered));
        }
    }
    sanitize_radius_value(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings() {
        for s in ["0", "10", "-3", "+4", "1.5", ".5", "5.", "1e3", "2.5E-2", " 7", "7 ", "\t8\n"] {
            assert!(is_numeric(&json!(s)), "{s:?} should be numeric");
        }
    }

    #[test]
    fn test_non_numeric_strings() {
        for s in ["", " ", ".", "abc", "10px", "0x1A", "1e", "--1", "1.2.3", "auto", "inf", "NaN"] {
            assert!(!is_numeric(&json!(s)), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn test_non_string_values() {
        assert!(is_numeric(&json!(12)));
        assert!(is_numeric(&json!(0.25)));
        assert!(!is_numeric(&json!(true)));
        assert!(!is_numeric(&Value::Null));
        assert!(!is_numeric(&json!([1])));
    }

    #[test]
    fn test_radius_value_returns_input_unchanged() {
        assert_eq!(sanitize_radius_value(&json!(" 12.5")), Sanitized::Accepted(json!(" 12.5")));
        assert_eq!(sanitize_radius_value(&json!(3)), Sanitized::Accepted(json!(3)));
        assert_eq!(sanitize_radius_value(&json!("3px")), Sanitized::Rejected);
    }

    #[test]
    fn test_unit_codes() {
        for n in 1..=10 {
            let code = json!(format!("value{n}"));
            assert_eq!(sanitize_unit(&code), Sanitized::Accepted(code.clone()));
        }
        for bad in ["value0", "value11", "px", "", "Value1"] {
            assert_eq!(sanitize_unit(&json!(bad)), Sanitized::Rejected);
        }
        assert_eq!(sanitize_unit(&json!(1)), Sanitized::Rejected);
    }

    #[test]
    fn test_keywords_are_lowercased() {
        assert_eq!(sanitize_height_width(&json!("AUTO")), Sanitized::Accepted(json!("auto")));
        assert_eq!(sanitize_height_width(&json!("Inherit")), Sanitized::Accepted(json!("inherit")));
        assert_eq!(sanitize_max_height_width(&json!("None")), Sanitized::Accepted(json!("none")));
        assert_eq!(sanitize_min_height_width(&json!("INHERIT")), Sanitized::Accepted(json!("inherit")));
    }

    #[test]
    fn test_keywords_are_per_property() {
        assert_eq!(sanitize_height_width(&json!("none")), Sanitized::Rejected);
        assert_eq!(sanitize_max_height_width(&json!("auto")), Sanitized::Rejected);
        assert_eq!(sanitize_min_height_width(&json!("auto")), Sanitized::Rejected);
        assert_eq!(sanitize_min_height_width(&json!("none")), Sanitized::Rejected);
    }

    #[test]
    fn test_dimension_numbers_pass() {
        assert_eq!(sanitize_height_width(&json!("10")), Sanitized::Accepted(json!("10")));
        assert_eq!(sanitize_min_height_width(&json!(0)), Sanitized::Accepted(json!(0)));
    }

    #[test]
    fn test_passthrough() {
        assert!(sanitize_passthrough(&json!("value99")).is_accepted());
        assert_eq!(sanitize_passthrough(&Value::Null).into_value(), Some(Value::Null));
    }
}
