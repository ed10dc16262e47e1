//! Safe traversal of loosely shaped JSON documents

use serde_json::Value;

/// Walks `doc` one key at a time, returning `None` as soon as a key is
/// missing or the current node is not an object.
pub fn nested<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut node = doc;
    for key in path {
        node = node.as_object()?.get(*key)?;
    }
    Some(node)
}

/// Like [`nested`], additionally requiring a numeric leaf.
pub fn nested_f64(doc: &Value, path: &[&str]) -> Option<f64> {
    nested(doc, path).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_walks_objects() {
        let doc = json!({"data": {"skills": {"attack": {"experience": {"gained": 500}}}}});
        let leaf = nested(&doc, &["data", "skills", "attack", "experience", "gained"]);
        assert_eq!(leaf, Some(&json!(500)));
    }

    #[test]
    fn test_nested_empty_path_returns_document() {
        let doc = json!({"data": {}});
        assert_eq!(nested(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_nested_missing_key_is_none() {
        let doc = json!({"data": {"skills": {}}});
        assert_eq!(nested(&doc, &["data", "bosses"]), None);
    }

    #[test]
    fn test_nested_non_object_intermediate_is_none() {
        let doc = json!({"data": {"skills": 42}});
        assert_eq!(nested(&doc, &["data", "skills", "attack"]), None);
        let doc = json!({"data": [1, 2, 3]});
        assert_eq!(nested(&doc, &["data", "skills"]), None);
    }

    #[test]
    fn test_nested_f64_requires_number() {
        let doc = json!({"value": {"gained": 12.5}});
        assert_eq!(nested_f64(&doc, &["value", "gained"]), Some(12.5));

        let doc = json!({"value": {"gained": "12.5"}});
        assert_eq!(nested_f64(&doc, &["value", "gained"]), None);

        let doc = json!({"value": {"gained": null}});
        assert_eq!(nested_f64(&doc, &["value", "gained"]), None);
    }
}
