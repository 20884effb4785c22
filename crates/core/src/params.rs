//! Helpers for reading typed settings out of a `serde_json::Value` object.
//!
//! A missing key or a value of the wrong type yields the supplied default.
//! Range checks happen later, in the config that owns the setting.

use serde_json::Value;

/// Reads an `f64` from `params[name]`, accepting integers too.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads a non-negative integer from `params[name]`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_float_and_integer() {
        let params = json!({"jitter": 0.05, "reroll_secs": 30});
        assert_eq!(param_f64(&params, "jitter", 0.12), 0.05);
        assert_eq!(param_f64(&params, "reroll_secs", 60.0), 30.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_wrong_type() {
        let params = json!({"jitter": "lots", "amplitude": null});
        assert_eq!(param_f64(&params, "jitter", 0.12), 0.12);
        assert_eq!(param_f64(&params, "amplitude", 0.15), 0.15);
        assert_eq!(param_f64(&params, "transition_secs", 8.0), 8.0);
    }

    #[test]
    fn param_f64_falls_back_for_non_object() {
        assert_eq!(param_f64(&json!([1, 2]), "jitter", 0.12), 0.12);
    }

    #[test]
    fn param_usize_reads_non_negative_integers_only() {
        let params = json!({"fps": 30, "neg": -1, "frac": 2.5});
        assert_eq!(param_usize(&params, "fps", 60), 30);
        assert_eq!(param_usize(&params, "neg", 60), 60);
        assert_eq!(param_usize(&params, "frac", 60), 60);
        assert_eq!(param_usize(&params, "missing", 60), 60);
    }
}
