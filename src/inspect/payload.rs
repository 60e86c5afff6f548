use serde_json::{Map, Value};

/// The top level of a JSON response, decoded by shape
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
    /// String, number, boolean or null
    Other(Value),
}

impl Payload {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<Value>(body).map(Self::from)
    }

    /// Short name of the JSON type, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Sequence(_) | Payload::Other(Value::Array(_)) => "array",
            Payload::Mapping(_) | Payload::Other(Value::Object(_)) => "object",
            Payload::Other(Value::String(_)) => "string",
            Payload::Other(Value::Number(_)) => "number",
            Payload::Other(Value::Bool(_)) => "boolean",
            Payload::Other(Value::Null) => "null",
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Payload::Sequence(items),
            Value::Object(map) => Payload::Mapping(map),
            other => Payload::Other(other),
        }
    }
}
