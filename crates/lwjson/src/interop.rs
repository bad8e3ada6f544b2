//! Bridges between `Node` and the serde ecosystem.

use crate::node::{Node, ScalarKind};

impl serde::Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Scalar(s) => match s.kind() {
                ScalarKind::String => serializer.serialize_str(s.text()),
                ScalarKind::Boolean => serializer.serialize_bool(s.text() == "true"),
                ScalarKind::Integer => match s.text().parse::<i64>() {
                    Ok(i) => serializer.serialize_i64(i),
                    Err(_) => serializer.serialize_str(s.text()),
                },
                ScalarKind::Double => match s.text().parse::<f64>() {
                    Ok(f) => serializer.serialize_f64(f),
                    Err(_) => serializer.serialize_str(s.text()),
                },
            },
            Node::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Node::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for value in array.iter() {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
        }
    }
}

#[cfg(feature = "json")]
impl Node {
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Node::Null => serde_json::Value::Null,
            Node::Scalar(s) => match s.kind() {
                ScalarKind::String => serde_json::Value::String(s.text().to_string()),
                ScalarKind::Boolean => serde_json::Value::Bool(s.text() == "true"),
                ScalarKind::Integer => s
                    .text()
                    .parse::<i64>()
                    .map(|i| serde_json::Value::Number(i.into()))
                    .unwrap_or_else(|_| serde_json::Value::String(s.text().to_string())),
                ScalarKind::Double => s
                    .text()
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(serde_json::Value::Number)
                    .unwrap_or_else(|| serde_json::Value::String(s.text().to_string())),
            },
            Node::Object(object) => {
                let mut m = serde_json::Map::new();
                for (k, v) in object.iter() {
                    m.insert(k.to_string(), v.to_json_value());
                }
                serde_json::Value::Object(m)
            }
            Node::Array(array) => {
                serde_json::Value::Array(array.iter().map(Node::to_json_value).collect())
            }
        }
    }

    pub fn from_json_value(value: &serde_json::Value) -> Node {
        use crate::node::{ArrayNode, ObjectNode, Scalar};
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Scalar(Scalar::boolean(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Scalar(Scalar::integer(i))
                } else {
                    // u64 beyond i64::MAX or a fraction: both land on f64.
                    Node::from(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Node::Scalar(Scalar::string(s.clone())),
            serde_json::Value::Array(items) => {
                let mut array = ArrayNode::new();
                for item in items {
                    array.add(Node::from_json_value(item));
                }
                Node::Array(array)
            }
            serde_json::Value::Object(map) => {
                let mut object = ObjectNode::new();
                for (k, v) in map {
                    object.add(k.clone(), Node::from_json_value(v));
                }
                Node::Object(object)
            }
        }
    }
}
