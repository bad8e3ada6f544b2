use lwjson::{Error, parse};

#[test]
fn root_must_be_object_or_array() {
    let err = parse("({}").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { found: Some('(') }));

    let err = parse("42").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { found: Some('4') }));

    let err = parse("\"bare string\"").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { found: Some('"') }));

    let err = parse("   ").unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { found: None }));
}

#[test]
fn unterminated_object_fails() {
    let err = parse("{\"a\":1").unwrap_err();
    assert!(matches!(err, Error::UnterminatedBlock { opening: '{', .. }));
}

#[test]
fn unterminated_array_fails() {
    let err = parse("[1,2").unwrap_err();
    assert!(matches!(err, Error::UnterminatedBlock { opening: '[', .. }));
}

#[test]
fn content_after_root_fails() {
    let err = parse("{} []").unwrap_err();
    assert!(matches!(err, Error::TrailingContent { .. }));
}

#[test]
fn garbage_between_members_fails() {
    let err = parse("{\"a\":1 2}").unwrap_err();
    assert!(matches!(err, Error::TrailingContent { .. }));
}

#[test]
fn missing_colon_fails() {
    let err = parse("{\"a\" 1}").unwrap_err();
    assert!(matches!(err, Error::TrailingContent { .. }));
}

#[test]
fn missing_value_fails() {
    let err = parse("{\"a\":}").unwrap_err();
    assert!(matches!(err, Error::TrailingContent { .. }));
}

#[test]
fn trailing_comma_fails() {
    assert!(matches!(
        parse("{\"a\":1,}").unwrap_err(),
        Error::TrailingContent { .. }
    ));
    assert!(matches!(
        parse("[1,2,]").unwrap_err(),
        Error::TrailingContent { .. }
    ));
}

#[test]
fn leading_comma_fails() {
    assert!(matches!(
        parse("[,1]").unwrap_err(),
        Error::TrailingContent { .. }
    ));
}

#[test]
fn unquoted_key_fails() {
    let err = parse("{a:1}").unwrap_err();
    assert!(matches!(err, Error::TrailingContent { .. }));
}

#[test]
fn bare_object_in_key_position_fails() {
    // `{ { "blah":"val" } }` is not a JSON grammar production.
    let err = parse(r#"{ { "blah":"val" } }"#).unwrap_err();
    assert!(matches!(err, Error::TrailingContent { .. }));
}

#[test]
fn structural_errors_return_no_partial_tree() {
    // The whole parse aborts; the caller gets only the error.
    assert!(parse(r#"{"good":1,"bad":}"#).is_err());
}
