use lwjson::{Error, Node, ScalarKind, parse};

#[test]
fn wrong_accessor_is_a_type_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"s":"hi","i":1}"#)?;

    let err = node.as_integer().unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "integer",
            found: "object"
        }
    ));

    let err = node.key("s")?.as_boolean().unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "boolean",
            found: "string"
        }
    ));

    let err = node.key("i")?.as_double().unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch {
            expected: "double",
            found: "integer"
        }
    ));
    Ok(())
}

#[test]
fn accessors_on_null_fail() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"v":null}"#)?;
    let v = node.key("v")?;
    assert!(matches!(
        v.as_string().unwrap_err(),
        Error::TypeMismatch { found: "null", .. }
    ));
    assert!(matches!(
        v.as_object().unwrap_err(),
        Error::TypeMismatch { found: "null", .. }
    ));
    Ok(())
}

#[test]
fn integer_indexer_on_object_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"a":1}"#)?;
    let err = node.at(0).unwrap_err();
    assert!(matches!(err, Error::InvalidIndexer { kind: "object", .. }));
    Ok(())
}

#[test]
fn string_indexer_on_array_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse("[1,2]")?;
    let err = node.key("a").unwrap_err();
    assert!(matches!(err, Error::InvalidIndexer { kind: "array", .. }));
    Ok(())
}

#[test]
fn indexers_on_scalars_are_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"v":42}"#)?;
    let v = node.key("v")?;
    assert!(matches!(v.at(0), Err(Error::InvalidIndexer { .. })));
    assert!(matches!(v.key("x"), Err(Error::InvalidIndexer { .. })));
    Ok(())
}

#[test]
fn array_index_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse("[1,2]")?;
    let err = node.at(2).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 2, len: 2 }));
    Ok(())
}

#[test]
fn missing_key_is_key_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"a":1}"#)?;
    let err = node.key("b").unwrap_err();
    assert!(matches!(err, Error::KeyNotFound { key } if key == "b"));
    Ok(())
}

#[test]
fn accessor_failure_leaves_the_tree_intact() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"a":1}"#)?;
    let _ = node.key("missing");
    let _ = node.at(9);
    assert_eq!(node.key("a")?.as_integer()?, 1);
    Ok(())
}

#[test]
fn is_value_only_for_scalars() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"s":"x","n":null,"a":[],"o":{}}"#)?;
    assert!(node.key("s")?.is_value());
    assert!(!node.key("n")?.is_value());
    assert!(!node.key("a")?.is_value());
    assert!(!node.key("o")?.is_value());
    assert!(!node.is_value());
    Ok(())
}

#[test]
fn as_value_exposes_kind_and_text() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"r":1.5}"#)?;
    let scalar = node.key("r")?.as_value()?;
    assert_eq!(scalar.kind(), ScalarKind::Double);
    assert_eq!(scalar.text(), "1.5");

    assert!(matches!(
        Node::Null.as_value().unwrap_err(),
        Error::TypeMismatch { found: "null", .. }
    ));
    Ok(())
}

#[test]
fn type_predicates_are_exclusive() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"v":true}"#)?;
    let v = node.key("v")?;
    assert!(v.is_boolean());
    assert!(!v.is_string() && !v.is_integer() && !v.is_double());
    assert!(!v.is_object() && !v.is_array() && !v.is_null());
    Ok(())
}
