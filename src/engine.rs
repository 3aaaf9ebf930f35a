use serde_json::Value;

use crate::errors::{JsonGetError, Result};
use crate::path::{parse_path, JsonPath, PathElement};
use crate::types::{check_type, JsonType};

// =========================
// Public API
// =========================

/// Get a value by path, optionally checking its type.
///
/// ```
/// use json_get::{get, JsonType};
/// use serde_json::json;
///
/// let j = json!({"foo": {"num": 3.4, "s": "Text"}, "arr": [10, 20, 30]});
/// assert_eq!(get(&j, "/foo/num", &JsonType::Any).unwrap(), &json!(3.4));
/// assert_eq!(get(&j, "/arr[1]", &JsonType::Any).unwrap(), &json!(20));
///
/// let err = get(&j, "/arr[10]", &JsonType::Any).unwrap_err();
/// assert_eq!(err.to_string(), "JSON array '/arr' too small (3 <= 10)");
///
/// let err = get(&j, "/foo/num", &JsonType::Int).unwrap_err();
/// assert_eq!(err.to_string(), "wrong JSON type int != float");
/// ```
pub fn get<'a>(json: &'a Value, path: &str, expected: &JsonType) -> Result<&'a Value> {
    let parsed = parse_path(path)?;
    walk(json, parsed.elements(), path, expected)
}

/// Like [`get`], but a path that does not exist yields `default`.
///
/// Only absence is substituted. A malformed path, a container of the wrong
/// kind or a type mismatch is still an error.
pub fn get_or_default<'a>(
    json: &'a Value,
    path: &str,
    default: &'a Value,
    expected: &JsonType,
) -> Result<&'a Value> {
    match get(json, path, expected) {
        Err(e) if e.is_absent() => {
            tracing::debug!(path, error = %e, "substituting default");
            Ok(default)
        }
        other => other,
    }
}

impl JsonPath {
    /// Walk an already parsed path. Missing keys report the rendered path.
    pub fn resolve<'a>(&self, json: &'a Value, expected: &JsonType) -> Result<&'a Value> {
        walk(json, self.elements(), &self.to_string(), expected)
    }
}

// =========================
// Internal walker
// =========================

fn walk<'a>(
    json: &'a Value,
    elements: &[PathElement],
    requested: &str,
    expected: &JsonType,
) -> Result<&'a Value> {
    let mut current = json;
    let mut current_path = String::new();

    for (position, element) in elements.iter().enumerate() {
        tracing::trace!(path = %current_path, %element, "walk step");
        current = match element {
            PathElement::Key(key) => {
                let Value::Object(map) = current else {
                    return fail(JsonGetError::NotAnObject { path: current_path });
                };
                let Some(next) = map.get(key) else {
                    return fail(JsonGetError::NotFound {
                        path: requested.to_string(),
                    });
                };
                current_path.push('/');
                current_path.push_str(key);
                next
            }
            PathElement::Index(index) => {
                let Value::Array(items) = current else {
                    return fail(JsonGetError::NotAnArray { path: current_path });
                };
                let Some(next) = items.get(*index) else {
                    return fail(JsonGetError::IndexOutOfBounds {
                        path: current_path,
                        len: items.len(),
                        index: *index,
                    });
                };
                // Rendered with the step position, not the index value.
                current_path.push_str(&format!("[{position}]"));
                next
            }
        };
    }

    if *expected != JsonType::Any {
        check_type(current, expected).inspect_err(|e| {
            tracing::debug!(path = requested, error = %e, "type check failed");
        })?;
    }
    Ok(current)
}

fn fail<T>(err: JsonGetError) -> Result<T> {
    tracing::debug!(error = %err, "walk failed");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!({"foo": {"num": 3.4, "s": "Text"}, "arr": [10, 20, 30]})
    }

    fn any(json: &Value, path: &str) -> Result<Value> {
        get(json, path, &JsonType::Any).cloned()
    }

    #[test]
    fn root_paths_return_the_document() {
        let j = json!({"foo": "bar"});
        assert_eq!(any(&j, "").unwrap(), j);
        assert_eq!(any(&j, "/").unwrap(), j);
    }

    #[test]
    fn walks_objects_and_arrays() {
        let j = sample();
        assert_eq!(any(&j, "/foo/num").unwrap(), json!(3.4));
        assert_eq!(any(&j, "foo/s").unwrap(), json!("Text"));
        assert_eq!(any(&j, "/arr[1]").unwrap(), json!(20));
    }

    #[test]
    fn missing_key_reports_full_requested_path() {
        let err = any(&sample(), "foo/unknown/deeper").unwrap_err();
        assert_eq!(err.to_string(), "JSON path 'foo/unknown/deeper' not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn wrong_container_points_at_the_container() {
        let j = sample();
        assert_eq!(
            any(&j, "/foo/num/bar").unwrap_err().to_string(),
            "JSON path '/foo/num' is not an object"
        );
        assert_eq!(
            any(&j, "/foo[2]").unwrap_err().to_string(),
            "JSON path '/foo' is not an array"
        );
        assert_eq!(
            any(&json!([1]), "foo").unwrap_err(),
            JsonGetError::NotAnObject { path: String::new() }
        );
    }

    #[test]
    fn index_step_renders_its_position() {
        // Index steps sit at positions 0 and 2; both index values are 1.
        let j = json!([{}, {"foo": [[], []]}]);
        assert_eq!(
            any(&j, "[1]/foo[1][5]").unwrap_err(),
            JsonGetError::IndexOutOfBounds {
                path: "[0]/foo[2]".into(),
                len: 0,
                index: 5,
            }
        );
    }

    #[test]
    fn type_check_runs_after_resolution() {
        let j = sample();
        assert_eq!(
            any(&j, "/foo/missing").unwrap_err().kind(),
            get(&j, "/foo/missing", &JsonType::Str).unwrap_err().kind()
        );
        assert_eq!(
            get(&j, "/foo/num", &JsonType::Str).unwrap_err().to_string(),
            "wrong JSON type str != float"
        );
        assert_eq!(get(&j, "/foo/num", &JsonType::Float).unwrap(), &json!(3.4));
        assert_eq!(
            get(&j, "/arr", &JsonType::list_of(JsonType::Int)).unwrap(),
            &json!([10, 20, 30])
        );
    }

    #[test]
    fn default_only_replaces_absence() {
        let d = json!("I am a default value");
        assert_eq!(
            get_or_default(&json!({}), "/foo", &d, &JsonType::Any).unwrap(),
            &d
        );
        assert_eq!(
            get_or_default(&json!({"a": [1]}), "a[3]", &d, &JsonType::Any).unwrap(),
            &d
        );

        let fallback = json!(123);
        let err = get_or_default(&json!({"foo": "bar"}), "/foo", &fallback, &JsonType::Int)
            .unwrap_err();
        assert_eq!(err.to_string(), "wrong JSON type int != str");

        let err = get_or_default(&json!({"foo": 1}), "foo//bar", &d, &JsonType::Any).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);

        let err = get_or_default(&json!({"foo": 1}), "foo/bar", &d, &JsonType::Any).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongContainer);
    }

    #[test]
    fn resolve_uses_rendered_path() {
        let path: JsonPath = "foo/missing".parse().unwrap();
        assert_eq!(
            path.resolve(&sample(), &JsonType::Any).unwrap_err().to_string(),
            "JSON path '/foo/missing' not found"
        );
        let path: JsonPath = "arr[2]".parse().unwrap();
        assert_eq!(path.resolve(&sample(), &JsonType::Int).unwrap(), &json!(30));
    }
}
