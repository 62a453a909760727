#[cfg(test)]
mod tests {
    use serde_json::json;
    use starscan::{render_value, render_value_compact, to_json, to_json_pretty, truncate, Value};

    fn doc(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    // ========================================================================
    // Compact JSON Tests
    // ========================================================================

    #[test]
    fn test_compact_preserves_document_order() {
        let v = Value::from_json_str(r#"{"zulu": 1, "alpha": 2}"#).unwrap();
        assert_eq!(to_json(&v), r#"{"zulu":1,"alpha":2}"#);
    }

    #[test]
    fn test_compact_scalars() {
        assert_eq!(to_json(&Value::Null), "null");
        assert_eq!(to_json(&Value::Boolean(true)), "true");
        assert_eq!(to_json(&Value::Integer(-3)), "-3");
        assert_eq!(to_json(&Value::Float(29.92)), "29.92");
        assert_eq!(to_json(&Value::String("ACY".to_string())), "\"ACY\"");
    }

    #[test]
    fn test_compact_escapes_strings() {
        let v = doc(json!({"note": "line1\nline2 \"quoted\" \\ end"}));
        assert_eq!(
            to_json(&v),
            r#"{"note":"line1\nline2 \"quoted\" \\ end"}"#
        );
    }

    #[test]
    fn test_compact_escapes_control_chars() {
        let v = Value::String("a\u{0001}b".to_string());
        assert_eq!(to_json(&v), "\"a\\u0001b\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_json(&doc(json!({}))), "{}");
        assert_eq!(to_json(&doc(json!([]))), "[]");
        assert_eq!(to_json_pretty(&doc(json!({}))), "{}");
        assert_eq!(to_json_pretty(&doc(json!([]))), "[]");
    }

    // ========================================================================
    // Pretty JSON Tests
    // ========================================================================

    #[test]
    fn test_pretty_object() {
        let v = doc(json!({"range": 5, "units": "nm"}));
        assert_eq!(to_json_pretty(&v), "{\n  \"range\": 5,\n  \"units\": \"nm\"\n}");
    }

    #[test]
    fn test_pretty_nested_indentation() {
        let v = doc(json!({"areas": [{"name": "East"}]}));
        let expected = "{\n  \"areas\": [\n    {\n      \"name\": \"East\"\n    }\n  ]\n}";
        assert_eq!(to_json_pretty(&v), expected);
    }

    // ========================================================================
    // Match Value Rendering Tests
    // ========================================================================

    #[test]
    fn test_render_value_scalars_are_plain_text() {
        assert_eq!(render_value(&Value::String("29.92".to_string())), "29.92");
        assert_eq!(render_value(&Value::Integer(75)), "75");
        assert_eq!(render_value(&Value::Boolean(false)), "false");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn test_render_value_containers_are_pretty() {
        let v = doc(json!({"a": 1}));
        assert_eq!(render_value(&v), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_render_value_compact_containers_stay_on_one_line() {
        let v = doc(json!([1, 2, 3]));
        assert_eq!(render_value_compact(&v), "[1,2,3]");
    }

    // ========================================================================
    // Truncation Tests
    // ========================================================================

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("altimeter", 20), "altimeter");
        assert_eq!(truncate("altimeter", 9), "altimeter");
    }

    #[test]
    fn test_truncate_clips_and_marks() {
        assert_eq!(truncate("altimeter", 4), "alti…");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        // Four 3-byte chars; clipping at 2 chars must not split a code point.
        assert_eq!(truncate("日本語文", 2), "日本…");
        assert_eq!(truncate("日本語文", 4), "日本語文");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate("x", 0), "…");
        assert_eq!(truncate("", 0), "");
    }
}
