use serde_json::Value;

/// Flatten a JSON value into display text for a characteristic row.
/// Lists join with ", ", nulls and empty strings become "".
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => if *b { "да".to_string() } else { "нет".to_string() },
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{}: {}", key, value_to_short_string(val)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_values_join() {
        assert_eq!(value_to_short_string(&json!(["сталь", "", "цинк"])), "сталь, цинк");
    }

    #[test]
    fn test_whole_floats_drop_fraction() {
        assert_eq!(value_to_short_string(&json!(500.0)), "500");
        assert_eq!(value_to_short_string(&json!(2.5)), "2.5");
        assert_eq!(value_to_short_string(&json!(42)), "42");
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(value_to_short_string(&Value::Null), "");
    }
}
