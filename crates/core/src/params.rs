//! Pure helpers for extracting typed options from a `serde_json::Value`.
//!
//! Configuration arrives as a loose JSON record with camelCase keys
//! (`framesQuantity`, `poissonDiscRadius`, ...). Each helper takes the
//! record, a key, and a default; missing keys, wrong types, and unrecognized
//! extra keys never fail — the default is used and everything else ignored.

use serde_json::Value;

/// Extracts an `f64` from `options[name]`, returning `default` if missing or
/// wrong type.
///
/// JSON integers convert to f64.
pub fn param_f64(options: &Value, name: &str, default: f64) -> f64 {
    options.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts a `usize` from `options[name]`, returning `default` if missing
/// or wrong type.
///
/// Only non-negative JSON integers qualify; `25.7` frames is a type error,
/// not a truncation.
pub fn param_usize(options: &Value, name: &str, default: usize) -> usize {
    options
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `options[name]`, returning `default` if missing or
/// wrong type.
pub fn param_bool(options: &Value, name: &str, default: bool) -> bool {
    options.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a seed string from `options[name]`, returning `default` if
/// missing, wrong type, or empty.
///
/// An empty seed is formally hashable but useless as an identity, so it
/// falls back to the default the same way a missing key does.
pub fn param_seed(options: &Value, name: &str, default: &str) -> String {
    options
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -- param_f64 --

    #[test]
    fn param_f64_extracts_existing_float() {
        let options = json!({"poissonDiscRadius": 9.5});
        assert!((param_f64(&options, "poissonDiscRadius", 12.0) - 9.5).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_extracts_integer_as_float() {
        let options = json!({"curlSeed": 7});
        assert!((param_f64(&options, "curlSeed", 10.0) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_key_missing() {
        let options = json!({"somethingElse": 1.0});
        assert!((param_f64(&options, "curlIntensity", 0.8) - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_when_wrong_type() {
        let options = json!({"curlIntensity": "strong"});
        assert!((param_f64(&options, "curlIntensity", 0.8) - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn param_f64_returns_default_for_non_object() {
        let options = json!("not an object");
        assert!((param_f64(&options, "noiseSeed", 100.0) - 100.0).abs() < f64::EPSILON);
    }

    // -- param_usize --

    #[test]
    fn param_usize_extracts_existing_integer() {
        let options = json!({"framesQuantity": 60});
        assert_eq!(param_usize(&options, "framesQuantity", 25), 60);
    }

    #[test]
    fn param_usize_returns_default_when_key_missing() {
        let options = json!({});
        assert_eq!(param_usize(&options, "framesQuantity", 25), 25);
    }

    #[test]
    fn param_usize_returns_default_for_fractional_value() {
        let options = json!({"framesQuantity": 25.7});
        assert_eq!(param_usize(&options, "framesQuantity", 25), 25);
    }

    #[test]
    fn param_usize_returns_default_for_negative_integer() {
        let options = json!({"framesQuantity": -5});
        assert_eq!(param_usize(&options, "framesQuantity", 25), 25);
    }

    // -- param_bool --

    #[test]
    fn param_bool_extracts_both_values() {
        let options = json!({"isCircleFilter": true, "isLargeFilter": false});
        assert!(param_bool(&options, "isCircleFilter", false));
        assert!(!param_bool(&options, "isLargeFilter", true));
    }

    #[test]
    fn param_bool_returns_default_when_key_missing() {
        let options = json!({});
        assert!(!param_bool(&options, "isCircleFilter", false));
    }

    #[test]
    fn param_bool_returns_default_for_wrong_type() {
        let options = json!({"isCircleFilter": 1});
        assert!(!param_bool(&options, "isCircleFilter", false));
    }

    // -- param_seed --

    #[test]
    fn param_seed_extracts_existing_string() {
        let options = json!({"letterOrShapeSeed": "glyph-a"});
        assert_eq!(
            param_seed(&options, "letterOrShapeSeed", "default-seed"),
            "glyph-a"
        );
    }

    #[test]
    fn param_seed_returns_default_when_key_missing() {
        let options = json!({});
        assert_eq!(
            param_seed(&options, "letterOrShapeSeed", "default-seed"),
            "default-seed"
        );
    }

    #[test]
    fn param_seed_returns_default_for_empty_string() {
        let options = json!({"letterOrShapeSeed": ""});
        assert_eq!(
            param_seed(&options, "letterOrShapeSeed", "default-seed"),
            "default-seed"
        );
    }

    #[test]
    fn param_seed_returns_default_for_wrong_type() {
        let options = json!({"letterOrShapeSeed": 42});
        assert_eq!(
            param_seed(&options, "letterOrShapeSeed", "default-seed"),
            "default-seed"
        );
    }
}
