use json_get as jg;
use jg::{check_type, JsonGetError, JsonType};
use serde_json::json;

#[test]
fn test_list_of_int() {
    let ints = JsonType::list_of(JsonType::Int);
    assert!(check_type(&json!([1, 2, 3]), &ints).is_ok());
    assert_eq!(
        check_type(&json!([1, "x"]), &ints).unwrap_err(),
        JsonGetError::TypeMismatch {
            expected: "int".into(),
            actual: "str"
        }
    );
}

#[test]
fn test_list_of_requires_array() {
    let err = check_type(&json!({"a": 1}), &JsonType::list_of(JsonType::Any)).unwrap_err();
    assert_eq!(err.to_string(), "wrong JSON type list != dict");
}

#[test]
fn test_null() {
    assert!(check_type(&json!(null), &JsonType::Null).is_ok());
    assert_eq!(
        check_type(&json!(0), &JsonType::Null).unwrap_err().to_string(),
        "wrong JSON type None != int"
    );
}

#[test]
fn test_any_always_matches() {
    for v in [json!(null), json!(1), json!("s"), json!([1]), json!({})] {
        assert!(check_type(&v, &JsonType::Any).is_ok());
    }
}

#[test]
fn test_type_names() {
    assert_eq!(jg::type_name(&json!(1)), "int");
    assert_eq!(jg::type_name(&json!(1.5)), "float");
    assert_eq!(jg::type_name(&json!(true)), "bool");
    assert_eq!(jg::type_name(&json!({})), "dict");
}
