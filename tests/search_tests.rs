#[cfg(test)]
mod tests {
    use serde_json::json;
    use starscan::{filter_by_path, search, MatchKind, RegexMatch, SubstringMatch, Value};

    fn doc(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    // ========================================================================
    // Basic Traversal Tests
    // ========================================================================

    #[test]
    fn test_nested_key_match() {
        let root = doc(json!({"a": {"altimeterSetting": 5}}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "a.altimeterSetting");
        assert_eq!(hits[0].kind, MatchKind::Key);
        assert_eq!(hits[0].value, &Value::Integer(5));
    }

    #[test]
    fn test_array_element_path() {
        let root = doc(json!({"list": [{"x": 1}, {"altimeter": "29.92"}]}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "list[1].altimeter");
        assert_eq!(hits[0].value, &Value::String("29.92".to_string()));
    }

    #[test]
    fn test_root_member_has_no_leading_dot() {
        let root = doc(json!({"altimeter": 1}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "altimeter");
    }

    #[test]
    fn test_prefix_is_prepended_to_every_path() {
        let root = doc(json!({"altimeter": 1, "rules": [{"altimeterGroup": 2}]}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "facility");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].path, "facility.altimeter");
        assert_eq!(hits[1].path, "facility.rules[0].altimeterGroup");
    }

    #[test]
    fn test_scalar_root_yields_nothing() {
        let root = Value::String("altimeter".to_string());
        let hits = search(&root, &SubstringMatch::keys_and_values("altimeter"), "");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_object_yields_nothing() {
        let root = doc(json!({}));
        let hits = search(&root, &SubstringMatch::keys_and_values("altimeter"), "");
        assert!(hits.is_empty());
    }

    // ========================================================================
    // Match Policy Tests
    // ========================================================================

    #[test]
    fn test_case_insensitive_key_match() {
        let root = doc(json!({
            "Altimeter": 1,
            "ALTIMETER": 2,
            "autoAltimeterSetting": 3,
            "elevation": 4
        }));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        let paths: Vec<&str> = hits.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["Altimeter", "ALTIMETER", "autoAltimeterSetting"]);
    }

    #[test]
    fn test_value_match_applies_to_strings_only() {
        let root = doc(json!({
            "note": "set the Altimeter here",
            "count": 2992,
            "enabled": true
        }));
        let hits = search(&root, &SubstringMatch::keys_and_values("altimeter"), "");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "note");
        assert_eq!(hits[0].kind, MatchKind::Value);
    }

    #[test]
    fn test_keys_only_predicate_ignores_values() {
        let root = doc(json!({"note": "altimeter"}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_same_member_can_match_on_key_and_value() {
        let root = doc(json!({"altimeterSource": "backup altimeter"}));
        let hits = search(&root, &SubstringMatch::keys_and_values("altimeter"), "");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, MatchKind::Key);
        assert_eq!(hits[1].kind, MatchKind::Value);
        assert_eq!(hits[0].path, hits[1].path);
    }

    #[test]
    fn test_key_match_does_not_prune_subtree() {
        let root = doc(json!({"altimeter": {"altimeterSetting": 1}}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        assert_eq!(hits.len(), 2);
        // Parent reported before its descendant.
        assert_eq!(hits[0].path, "altimeter");
        assert_eq!(hits[1].path, "altimeter.altimeterSetting");
    }

    // ========================================================================
    // Ordering and Idempotence Tests
    // ========================================================================

    #[test]
    fn test_matches_follow_document_order() {
        let root = doc(json!({
            "zAltimeter": 1,
            "aAltimeter": 2,
            "items": [{"altimeterA": 3}, {"altimeterB": 4}]
        }));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        let paths: Vec<&str> = hits.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "zAltimeter",
                "aAltimeter",
                "items[0].altimeterA",
                "items[1].altimeterB"
            ]
        );
    }

    #[test]
    fn test_search_is_idempotent() {
        let root = doc(json!({
            "facility": {"altimeter": "a", "children": [{"altimeterSetting": 1}]}
        }));
        let predicate = SubstringMatch::keys_and_values("altimeter");

        let first = search(&root, &predicate, "");
        let second = search(&root, &predicate, "");
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_counts_from_search_root() {
        let root = doc(json!({"altimeter": 0, "a": {"altimeter": 1, "b": [{"altimeter": 2}]}}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].depth, 0);
        assert_eq!(hits[1].depth, 1);
        assert_eq!(hits[2].depth, 3);
    }

    // ========================================================================
    // Regex Predicate Tests
    // ========================================================================

    #[test]
    fn test_regex_key_match_is_case_insensitive() {
        let root = doc(json!({"AutoAltimeterSetting": 1, "elevation": 2}));
        let predicate = RegexMatch::keys("^auto.*setting$").unwrap();
        let hits = search(&root, &predicate, "");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "AutoAltimeterSetting");
    }

    #[test]
    fn test_regex_value_match_strings_only() {
        let root = doc(json!({"freq": "118.92", "range": 118}));
        let predicate = RegexMatch::keys_and_values(r"^\d+\.\d+$").unwrap();
        let hits = search(&root, &predicate, "");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].path, "freq");
        assert_eq!(hits[0].kind, MatchKind::Value);
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(RegexMatch::keys("(unclosed").is_err());
    }

    // ========================================================================
    // Path Post-Filter Tests
    // ========================================================================

    #[test]
    fn test_filter_by_path_keeps_matching_paths() {
        let root = doc(json!({
            "starsConfiguration": {"altimeterStations": []},
            "towerCabConfiguration": {"altimeterList": []}
        }));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "facility");
        assert_eq!(hits.len(), 2);

        let filtered = filter_by_path(hits, "starsConfiguration");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].path, "facility.starsConfiguration.altimeterStations");
    }

    #[test]
    fn test_filter_by_path_is_case_sensitive() {
        let root = doc(json!({"starsConfiguration": {"altimeterStations": []}}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");

        let filtered = filter_by_path(hits, "STARSCONFIGURATION");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_empty_needle_keeps_everything() {
        let root = doc(json!({"altimeter": 1, "a": {"altimeterSetting": 2}}));
        let hits = search(&root, &SubstringMatch::keys("altimeter"), "");
        let count = hits.len();

        assert_eq!(filter_by_path(hits, "").len(), count);
    }
}
