//! Row value coercion.
//!
//! Database rows arrive as loosely-typed JSON maps; each route declares a
//! field map naming the target type per column. Columns absent from the map
//! pass through unchanged.
//!
//! The falsy rules are deliberate and load-bearing: a numeric column holding
//! `0` coerces to null exactly like a missing value, and a string column
//! holding null coerces to `""`. Templates therefore never see NaN, nulls in
//! string positions, or coerced zeros.

use serde_json::{Map, Value};

/// Target type for a coerced column. Closed set; anything else passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Number,
    String,
    Boolean,
}

/// Per-column coercion declarations for one row shape.
pub type FieldMap = [(&'static str, FieldType)];

/// Truthiness of a raw JSON value: null, `false`, numeric zero, and the
/// empty string are falsy; everything else is truthy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Coerce a single raw value to its declared target type.
pub fn coerce_value(raw: Value, ty: FieldType) -> Value {
    match ty {
        FieldType::Number => {
            if is_falsy(&raw) {
                return Value::Null;
            }
            match raw {
                Value::Number(n) => Value::Number(n),
                Value::Bool(true) => Value::from(1),
                Value::String(s) => parse_number(&s),
                _ => Value::Null,
            }
        }
        FieldType::String => {
            if is_falsy(&raw) {
                return Value::String(String::new());
            }
            match raw {
                Value::String(s) => Value::String(s),
                Value::Number(n) => Value::String(n.to_string()),
                Value::Bool(b) => Value::String(b.to_string()),
                other => Value::String(other.to_string()),
            }
        }
        FieldType::Boolean => Value::Bool(!is_falsy(&raw)),
    }
}

/// Parse a numeric string, preferring an integer representation.
/// Unparseable strings coerce to null rather than NaN.
fn parse_number(s: &str) -> Value {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::from(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::from(f),
        _ => Value::Null,
    }
}

/// Apply a field map to one row. Columns not named in the map are passed
/// through unchanged.
pub fn coerce_row(mut row: Map<String, Value>, fields: &FieldMap) -> Map<String, Value> {
    for (name, ty) in fields {
        if let Some(raw) = row.remove(*name) {
            row.insert((*name).to_string(), coerce_value(raw, *ty));
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_maps_falsy_values_to_null() {
        for raw in [json!(0), json!(0.0), json!(""), json!(null), json!(false)] {
            assert_eq!(coerce_value(raw, FieldType::Number), Value::Null);
        }
    }

    #[test]
    fn number_keeps_numeric_values() {
        assert_eq!(coerce_value(json!(2006), FieldType::Number), json!(2006));
        assert_eq!(coerce_value(json!(4.99), FieldType::Number), json!(4.99));
        assert_eq!(coerce_value(json!(-3), FieldType::Number), json!(-3));
    }

    #[test]
    fn number_parses_numeric_strings() {
        assert_eq!(coerce_value(json!("42"), FieldType::Number), json!(42));
        assert_eq!(coerce_value(json!("4.99"), FieldType::Number), json!(4.99));
    }

    #[test]
    fn number_never_produces_nan() {
        assert_eq!(coerce_value(json!("not a number"), FieldType::Number), Value::Null);
        assert_eq!(coerce_value(json!("NaN"), FieldType::Number), Value::Null);
    }

    #[test]
    fn string_maps_falsy_values_to_empty() {
        for raw in [json!(null), json!(""), json!(0), json!(false)] {
            assert_eq!(coerce_value(raw, FieldType::String), json!(""));
        }
    }

    #[test]
    fn string_keeps_and_formats_truthy_values() {
        assert_eq!(
            coerce_value(json!("John Doe, Jane Roe"), FieldType::String),
            json!("John Doe, Jane Roe")
        );
        assert_eq!(coerce_value(json!(13), FieldType::String), json!("13"));
        assert_eq!(coerce_value(json!(true), FieldType::String), json!("true"));
    }

    #[test]
    fn boolean_follows_truthiness() {
        assert_eq!(coerce_value(json!(1), FieldType::Boolean), json!(true));
        assert_eq!(coerce_value(json!("x"), FieldType::Boolean), json!(true));
        assert_eq!(coerce_value(json!(0), FieldType::Boolean), json!(false));
        assert_eq!(coerce_value(json!(""), FieldType::Boolean), json!(false));
        assert_eq!(coerce_value(json!(null), FieldType::Boolean), json!(false));
    }

    #[test]
    fn unlisted_columns_pass_through() {
        let row = json!({ "film_id": 7, "raw_blob": [1, 2, 3] });
        let Value::Object(map) = row else { unreachable!() };

        let coerced = coerce_row(map, &[("film_id", FieldType::Number)]);

        assert_eq!(coerced["film_id"], json!(7));
        assert_eq!(coerced["raw_blob"], json!([1, 2, 3]));
    }

    #[test]
    fn zero_and_missing_are_indistinguishable_after_coercion() {
        // Documented quirk: a legitimate zero and an absent value both
        // surface as null under FieldType::Number.
        let zero = coerce_value(json!(0), FieldType::Number);
        let missing = coerce_value(json!(null), FieldType::Number);
        assert_eq!(zero, missing);
    }
}
