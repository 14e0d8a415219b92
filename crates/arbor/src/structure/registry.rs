//! Named-object lookup and wiring classification.

use thiserror::Error;

use arbor_core::document::{Object, Value};

/// Why a string reference could not be turned into an object.
///
/// None of these abort a build: the offending wiring is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("no object named `{name}`")]
    Unresolved { name: String },

    #[error("`{name}` is a {kind}, not an object")]
    NotAnObject { name: String, kind: &'static str },

    #[error("`{name}` refers back to an object that is already being expanded")]
    Cyclic { name: String },
}

/// Read-only view over the top-level objects of a diagram document.
///
/// String-valued `on<Event>` entries name one of these objects.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    objects: &'a Object,
}

impl<'a> Registry<'a> {
    pub fn new(objects: &'a Object) -> Self {
        Self { objects }
    }

    /// Resolves `name` to an object.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::Unresolved`] when no entry has that name and
    /// [`ReferenceError::NotAnObject`] when the entry is some other value.
    pub fn resolve(&self, name: &str) -> Result<&'a Object, ReferenceError> {
        match self.objects.get(name) {
            Some(Value::Object(object)) => Ok(object),
            Some(other) => Err(ReferenceError::NotAnObject {
                name: name.to_string(),
                kind: other.kind(),
            }),
            None => Err(ReferenceError::Unresolved {
                name: name.to_string(),
            }),
        }
    }
}

/// The shape of an `on<Event>` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wiring<'a> {
    /// An object written in place.
    Inline(&'a Object),
    /// The name of a top-level object.
    Reference(&'a str),
    /// Anything else; never produces a child.
    Other(&'a Value),
}

impl<'a> Wiring<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(object) => Wiring::Inline(object),
            Value::String(name) => Wiring::Reference(name),
            other => Wiring::Other(other),
        }
    }
}
