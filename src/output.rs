//! Text rendering for search reports.
//!
//! This module provides JSON serialization with support for both compact and
//! pretty-printed output formats, plus the small display helpers the report
//! renderers share (scalar rendering, character-safe truncation).
//!
//! Object keys are printed in document order, never sorted: reports must show
//! fields the way they appear in the source file.
//!
//! # Examples
//!
//! ```
//! use starscan::{to_json, Value};
//!
//! let value = Value::from_json_str(r#"{"z": 1, "a": 2}"#).unwrap();
//!
//! // Document order is preserved, "z" stays first.
//! assert_eq!(to_json(&value), r#"{"z":1,"a":2}"#);
//! ```

use indexmap::IndexMap;

use crate::value::Value;

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => format!("\"{}\"", self.escape_string(s)),
            Value::Array(arr) => self.print_array(arr, indent),
            Value::Object(obj) => self.print_object(obj, indent),
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let mut result = "[\n".to_string();
            let items: Vec<String> = arr
                .iter()
                .map(|v| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push(']');
            result
        } else {
            let items: Vec<String> = arr.iter().map(|v| self.print_value(v, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(&self, obj: &IndexMap<String, Value>, indent: usize) -> String {
        if obj.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let mut result = "{\n".to_string();
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push('}');
            result
        } else {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!("\"{}\":{}", self.escape_string(k), self.print_value(v, indent))
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => {
                    // Unicode escape for control chars
                    format!("\\u{:04x}", c as u32).chars().collect()
                }
                c => vec![c],
            })
            .collect()
    }
}

// Convenience functions

/// Converts a Value to compact JSON string representation.
///
/// Minified output with no extra whitespace. Object keys keep their document
/// order. Also the serialization the whole-document occurrence count in
/// [`crate::Profile::occurrences`] runs over.
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a Value to pretty-printed JSON string representation.
///
/// Human-readable output with 2-space indentation, one member or element per
/// line, object keys in document order. Used by the detail report to render
/// matched objects and arrays.
///
/// # Examples
///
/// ```
/// use starscan::{to_json_pretty, Value};
///
/// let value = Value::from_json_str(r#"{"range": 5, "units": "nm"}"#).unwrap();
/// assert_eq!(to_json_pretty(&value), "{\n  \"range\": 5,\n  \"units\": \"nm\"\n}");
/// ```
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}

/// Render a matched value for a detail listing: pretty JSON for objects and
/// arrays, plain text for scalars (strings print without quotes).
pub fn render_value(value: &Value) -> String {
    if value.is_container() {
        to_json_pretty(value)
    } else {
        render_scalar(value)
    }
}

/// Render a matched value on a single line: compact JSON for objects and
/// arrays, plain text for scalars.
pub fn render_value_compact(value: &Value) -> String {
    if value.is_container() {
        to_json(value)
    } else {
        render_scalar(value)
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Containers are handled by the callers above; compact JSON keeps
        // this total anyway.
        other => to_json(other),
    }
}

/// Clip `s` to at most `max` characters, appending `…` when clipped.
///
/// Counts characters, not bytes, so multibyte input never splits a code
/// point.
///
/// # Examples
///
/// ```
/// use starscan::truncate;
///
/// assert_eq!(truncate("altimeter", 20), "altimeter");
/// assert_eq!(truncate("altimeter", 4), "alti…");
/// ```
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut clipped: String = s.chars().take(max).collect();
        clipped.push('…');
        clipped
    }
}
