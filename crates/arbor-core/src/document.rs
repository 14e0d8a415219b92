//! Ordered value model for diagram documents.
//!
//! A diagram document is a string-keyed mapping whose entries describe logic
//! objects. Objects are tagged with a class under the [`CLASS_KEY`] key and
//! may carry a display [`TITLE_KEY`]. Other entries are either nested objects
//! or strings naming a top-level entry of the same document.
//!
//! [`Object`] keeps keys in the order they were written so that a node's
//! children come out in source order. Both [`Value`] and [`Object`] implement
//! [`serde::Deserialize`] for any self-describing format:
//!
//! ```
//! # use arbor_core::document::{Object, Value};
//! let source = r#"{"in": {"$class": "kk.Logic", "onDone": "done"}, "done": {"$class": "kk.Logic.Outlet"}}"#;
//! let document: Object = serde_json::from_str(source).unwrap();
//!
//! let keys: Vec<&str> = document.keys().collect();
//! assert_eq!(keys, ["in", "done"]);
//! assert_eq!(document.get("done").and_then(Value::as_object).and_then(|o| o.class()), Some("kk.Logic.Outlet"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Key holding an object's class tag.
pub const CLASS_KEY: &str = "$class";

/// Key holding an object's optional display title.
pub const TITLE_KEY: &str = "title";

/// A single document value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Returns the contained object, if this value is one.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the contained string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

/// An insertion-ordered, string-keyed mapping of [`Value`]s.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Object(IndexMap<String, Value>);

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `key`, chaining for convenient construction.
    ///
    /// Re-inserting an existing key replaces its value but keeps its
    /// original position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arbor_core::document::Object;
    /// let object = Object::new()
    ///     .with("$class", "kk.Logic.Input")
    ///     .with("title", "Validate input");
    /// assert_eq!(object.class(), Some("kk.Logic.Input"));
    /// assert_eq!(object.title(), Some("Validate input"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts `value` under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Iterates entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The object's class tag, when it is a non-empty string.
    pub fn class(&self) -> Option<&str> {
        self.non_empty_str(CLASS_KEY)
    }

    /// The object's display title, when it is a non-empty string.
    pub fn title(&self) -> Option<&str> {
        self.non_empty_str(TITLE_KEY)
    }

    fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Number(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "{value:?}"),
            Value::Array(values) => write!(f, "[{} items]", values.len()),
            Value::Object(object) => write!(f, "{{{} entries}}", object.len()),
        }
    }
}
