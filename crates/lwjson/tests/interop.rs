#![cfg(feature = "json")]
use lwjson::{Node, parse};
use serde_json::json;

#[test]
fn to_json_value_maps_every_variant() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"s":"hi","b":true,"i":41,"d":0.5,"n":null,"a":[1,2]}"#)?;
    assert_eq!(
        node.to_json_value(),
        json!({"s":"hi","b":true,"i":41,"d":0.5,"n":null,"a":[1,2]})
    );
    Ok(())
}

#[test]
fn from_json_value_matches_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let value = json!({"name":"Kevin","tags":["a","b"],"score":3,"ratio":1.5,"none":null});
    let via_json = Node::from_json_value(&value);
    let via_parse = parse(&serde_json::to_string(&value)?)?;
    assert_eq!(via_json, via_parse);
    Ok(())
}

#[test]
fn json_value_roundtrip() {
    let value = json!({"a":[{"b":1},{"b":2}],"c":{"d":[true,false,null]}});
    let node = Node::from_json_value(&value);
    assert_eq!(node.to_json_value(), value);
}

#[test]
fn huge_u64_becomes_a_double() {
    let value = json!(18446744073709551615u64);
    let node = Node::from_json_value(&value);
    assert!(node.is_double());
}

#[test]
fn node_serializes_through_serde() -> Result<(), Box<dyn std::error::Error>> {
    let node = parse(r#"{"a":1,"b":["x",null]}"#)?;
    let value = serde_json::to_value(&node)?;
    assert_eq!(value, json!({"a":1,"b":["x",null]}));
    Ok(())
}
