use indexmap::IndexMap;

/// A JSON value as loaded from a facility configuration document.
///
/// This type represents all valid JSON types with a distinction between
/// integers and floats (unlike standard JSON which only has "number").
///
/// # Document Order
///
/// Object members keep their original document order (`IndexMap`), and every
/// traversal in this crate iterates them in that order. Reports therefore
/// list matches exactly as the fields appear in the source file.
///
/// # Examples
///
/// ```
/// use starscan::Value;
///
/// let doc = Value::from_json_str(r#"{"id": "ACY", "elevation": 75}"#).unwrap();
/// assert_eq!(doc.get("id").and_then(Value::as_str), Some("ACY"));
/// assert_eq!(doc.get("elevation"), Some(&Value::Integer(75)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object with string keys, in document order
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Parse a JSON document into a `Value`, keeping object member order.
    pub fn from_json_str(s: &str) -> Result<Value, serde_json::Error> {
        let parsed: serde_json::Value = serde_json::from_str(s)?;
        Ok(Value::from(parsed))
    }

    /// True for objects and arrays, the variants that have children.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// True when the value holds nothing worth reporting on: null, an empty
    /// object/array, or an empty string. Numbers and booleans are never
    /// empty. This is the rule the facility summaries use to skip entries
    /// whose `starsConfiguration` is missing or `{}`.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            Value::Object(obj) => obj.is_empty(),
            Value::Boolean(_) | Value::Integer(_) | Value::Float(_) => false,
        }
    }

    /// Object member lookup; `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Borrow the members, if this is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
