//! Conversion of log payloads into the final message text.

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

const JSON_INDENT: &[u8] = b"    ";

/// Anything that can be logged.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Text(String),
    Json(Value),
    /// A missing payload. Formatting yields nothing and the call is dropped.
    Absent,
}

impl Message {
    /// Uses the value's `Display` output.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Message::Text(value.to_string())
    }

    /// Uses the value's `Debug` output.
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Message::Text(format!("{:?}", value))
    }

    /// Produces the text that is handed to the console and the file sink.
    pub fn format(self) -> Option<String> {
        match self {
            Message::Text(text) => Some(text),
            Message::Json(value @ (Value::Object(_) | Value::Array(_))) => pretty_json(&value),
            Message::Json(value) => Some(value.to_string()),
            Message::Absent => None,
        }
    }
}

fn pretty_json(value: &Value) -> Option<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer).ok()?;
    String::from_utf8(buf).ok()
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message::Text(text.clone())
    }
}

impl From<Value> for Message {
    fn from(value: Value) -> Self {
        Message::Json(value)
    }
}

impl From<&Value> for Message {
    fn from(value: &Value) -> Self {
        Message::Json(value.clone())
    }
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(value: Option<T>) -> Self {
        value.map_or(Message::Absent, Into::into)
    }
}
