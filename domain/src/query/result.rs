//! Query result value object

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Largest integer a double holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whatever JSON value the server returned.
///
/// The payload stays opaque: objects, arrays and scalars are all accepted and
/// rendered the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryResult(Value);

impl QueryResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a response body. A leading UTF-8 byte order mark is skipped.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        serde_json::from_slice(body).map(Self)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Pretty-print with 2-space indentation.
    ///
    /// Numbers print the way a JavaScript client shows them: a float with an
    /// integral value (`1.0`, `1e2`) prints as an integer.
    pub fn pretty(&self) -> String {
        let mut value = self.0.clone();
        integral_floats_to_integers(&mut value);
        // Serializing a `Value` into a String cannot fail
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

fn integral_floats_to_integers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64()
                && n.is_f64()
                && f.fract() == 0.0
                && f.abs() <= MAX_EXACT_INTEGER
            {
                *n = Number::from(f as i64);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_to_integers),
        Value::Object(map) => map.values_mut().for_each(integral_floats_to_integers),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let result = QueryResult::new(json!({ "a": 1 }));
        assert_eq!(result.pretty(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_pretty_keeps_non_ascii() {
        let result = QueryResult::from_slice(r#"{"answer":"猫は動物です"}"#.as_bytes()).unwrap();
        assert_eq!(result.pretty(), "{\n  \"answer\": \"猫は動物です\"\n}");
    }

    #[test]
    fn test_integral_floats_print_as_integers() {
        let result = QueryResult::from_slice(br#"{"a":1.0,"b":1e2}"#).unwrap();
        assert_eq!(result.pretty(), "{\n  \"a\": 1,\n  \"b\": 100\n}");
    }

    #[test]
    fn test_number_normalisation_reaches_nested_values() {
        let result = QueryResult::from_slice(br#"{"xs":[2.0,1.5,-0.0],"o":{"n":-3.0}}"#).unwrap();
        assert_eq!(
            result.pretty(),
            "{\n  \"xs\": [\n    2,\n    1.5,\n    0\n  ],\n  \"o\": {\n    \"n\": -3\n  }\n}"
        );
        // Only the rendering changes
        assert_eq!(result.value()["o"]["n"], json!(-3.0));
    }

    #[test]
    fn test_floats_beyond_exact_range_keep_float_form() {
        let result = QueryResult::from_slice(b"1e300").unwrap();
        assert_eq!(result.pretty(), "1e300");
    }

    #[test]
    fn test_leading_byte_order_mark_is_skipped() {
        let result = QueryResult::from_slice(b"\xEF\xBB\xBF{\"a\":1}").unwrap();
        assert_eq!(result.value(), &json!({ "a": 1 }));
    }

    #[test]
    fn test_scalars_and_arrays_are_accepted() {
        assert_eq!(QueryResult::from_slice(b"42").unwrap().pretty(), "42");
        assert_eq!(QueryResult::from_slice(b"\"hi\"").unwrap().pretty(), "\"hi\"");
        assert_eq!(
            QueryResult::from_slice(b"[1,2]").unwrap().pretty(),
            "[\n  1,\n  2\n]"
        );
        assert_eq!(QueryResult::from_slice(b"null").unwrap().value(), &Value::Null);
    }

    #[test]
    fn test_malformed_body_fails() {
        assert!(QueryResult::from_slice(b"{not json").is_err());
        assert!(QueryResult::from_slice(b"").is_err());
        assert!(QueryResult::from_slice(b"\xEF\xBB\xBF").is_err());
    }
}
