//! Builds a [`Node`] tree from `on<Event>` wiring.
//!
//! Every key of an object that starts with `on` followed by an event name is
//! a candidate child. Its value is either an inline object or the name of a
//! top-level object. Candidates that resolve to an object carrying a class
//! tag become children named after the event; all others are skipped.

use log::{debug, trace, warn};
use thiserror::Error;

use arbor_core::document::Object;

use super::{
    node::{Node, NodeId},
    registry::{ReferenceError, Registry, Wiring},
};

const EVENT_PREFIX: &str = "on";

/// Why an `on<Event>` entry did not produce a child.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error("value is a {kind}, not an object")]
    NotAnObject { kind: &'static str },

    #[error("object has no class tag")]
    MissingClass,
}

/// An `on<Event>` entry that was ignored while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWiring {
    /// Node whose configuration held the entry.
    pub parent: NodeId,
    /// The full `on<Event>` key.
    pub key: String,
    pub reason: SkipReason,
}

/// Builds diagram trees against one [`Registry`].
///
/// Node ids are handed out in pre-order across every tree built by the same
/// builder.
pub struct TreeBuilder<'a> {
    registry: Registry<'a>,
    next_id: usize,
    expanding: Vec<&'a str>,
    skipped: Vec<SkippedWiring>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(registry: Registry<'a>) -> Self {
        Self {
            registry,
            next_id: 0,
            expanding: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Builds the tree for a top-level entry.
    ///
    /// `name` is treated as the entry's registry name, so wiring that refers
    /// back to it is rejected as cyclic instead of being expanded again.
    pub fn build_entry(&mut self, name: &'a str, object: &'a Object) -> Node {
        self.expanding.push(name);
        let node = self.build(name, object);
        self.expanding.pop();
        node
    }

    /// Builds the node for `object`, labelled with `name`, and all its children.
    pub fn build(&mut self, name: &str, object: &'a Object) -> Node {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        let title = format!(
            "{name}: {}",
            object.title().or(object.class()).unwrap_or_default()
        );
        trace!(id:%, title; "Building node");

        let mut children = Vec::new();
        for (key, value) in object.iter() {
            let Some(event) = event_name(key) else {
                continue;
            };

            let child = match Wiring::classify(value) {
                Wiring::Inline(child) => self.build_child(id, key, event, child),
                Wiring::Reference(reference) => match self.registry.resolve(reference) {
                    Ok(_) if self.expanding.contains(&reference) => {
                        self.skip(
                            id,
                            key,
                            ReferenceError::Cyclic {
                                name: reference.to_string(),
                            }
                            .into(),
                        );
                        None
                    }
                    Ok(child) => {
                        self.expanding.push(reference);
                        let node = self.build_child(id, key, event, child);
                        self.expanding.pop();
                        node
                    }
                    Err(err) => {
                        self.skip(id, key, err.into());
                        None
                    }
                },
                Wiring::Other(other) => {
                    self.skip(id, key, SkipReason::NotAnObject { kind: other.kind() });
                    None
                }
            };

            children.extend(child);
        }

        Node::new(id, title, children)
    }

    fn build_child(
        &mut self,
        parent: NodeId,
        key: &str,
        event: &str,
        object: &'a Object,
    ) -> Option<Node> {
        if object.class().is_none() {
            self.skip(parent, key, SkipReason::MissingClass);
            return None;
        }
        Some(self.build(event, object))
    }

    fn skip(&mut self, parent: NodeId, key: &str, reason: SkipReason) {
        if matches!(reason, SkipReason::Reference(ReferenceError::Cyclic { .. })) {
            warn!(parent:%, key, reason:%; "Skipping cyclic wiring");
        } else {
            debug!(parent:%, key, reason:%; "Skipping wiring");
        }
        self.skipped.push(SkippedWiring {
            parent,
            key: key.to_string(),
            reason,
        });
    }

    /// Entries skipped so far, in the order they were met.
    pub fn skipped(&self) -> &[SkippedWiring] {
        &self.skipped
    }

    /// Consumes the builder, returning the skipped entries.
    pub fn into_skipped(self) -> Vec<SkippedWiring> {
        self.skipped
    }
}

/// Builds a single tree, discarding the record of skipped wiring.
///
/// # Examples
///
/// ```
/// use arbor::structure::{Registry, build};
/// use arbor_core::document::Object;
///
/// let document = Object::new()
///     .with("done", Object::new().with("$class", "kk.Logic.Outlet"));
/// let entry = Object::new()
///     .with("$class", "kk.Logic")
///     .with("onDone", "done")
///     .with("onFail", "missing");
///
/// let root = build(&Registry::new(&document), "in", &entry);
/// assert_eq!(root.title(), "in: kk.Logic");
/// assert_eq!(root.children().len(), 1);
/// assert_eq!(root.children()[0].title(), "Done: kk.Logic.Outlet");
/// ```
pub fn build<'a>(registry: &Registry<'a>, name: &str, object: &'a Object) -> Node {
    TreeBuilder::new(*registry).build(name, object)
}

fn event_name(key: &str) -> Option<&str> {
    key.strip_prefix(EVENT_PREFIX)
        .filter(|event| !event.is_empty())
}

#[cfg(test)]
mod tests {
    use arbor_core::document::Value;

    use super::*;

    fn class(name: &str) -> Object {
        Object::new().with("$class", name)
    }

    fn titles(node: &Node) -> Vec<&str> {
        node.children().iter().map(Node::title).collect()
    }

    #[test]
    fn test_title_prefers_explicit_title() {
        let document = Object::new();
        let entry = class("kk.Logic").with("title", "Login");
        let root = build(&Registry::new(&document), "in", &entry);
        assert_eq!(root.title(), "in: Login");
    }

    #[test]
    fn test_title_without_title_or_class() {
        let document = Object::new();
        let root = build(&Registry::new(&document), "in", &Object::new());
        assert_eq!(root.title(), "in: ");
    }

    #[test]
    fn test_only_string_class_and_title_count() {
        let document = Object::new();
        let entry = class("kk.Logic")
            .with("title", 7.0)
            .with("onNumber", Object::new().with("$class", 3.0))
            .with("onOk", class("kk.Logic.Outlet").with("title", true));

        let mut builder = TreeBuilder::new(Registry::new(&document));
        let root = builder.build("in", &entry);
        assert_eq!(root.title(), "in: kk.Logic");
        assert_eq!(titles(&root), ["Ok: kk.Logic.Outlet"]);
        assert_eq!(builder.skipped().len(), 1);
        assert_eq!(builder.skipped()[0].key, "onNumber");
        assert_eq!(builder.skipped()[0].reason, SkipReason::MissingClass);
    }

    #[test]
    fn test_children_follow_source_order() {
        let document = Object::new();
        let entry = class("kk.Logic")
            .with("onZeta", class("kk.Logic.Outlet"))
            .with("title", "Root")
            .with("onAlpha", class("kk.Logic.Input"))
            .with("onMid", class("kk.Logic.Captcha"));

        let root = build(&Registry::new(&document), "in", &entry);
        assert_eq!(
            titles(&root),
            [
                "Zeta: kk.Logic.Outlet",
                "Alpha: kk.Logic.Input",
                "Mid: kk.Logic.Captcha"
            ]
        );
    }

    #[test]
    fn test_reference_resolves_through_registry() {
        let document = Object::new().with("done", class("kk.Logic.Outlet").with("title", "Finish"));
        let entry = class("kk.Logic").with("onDone", "done");

        let root = build(&Registry::new(&document), "in", &entry);
        assert_eq!(titles(&root), ["Done: Finish"]);
    }

    #[test]
    fn test_non_event_keys_ignored() {
        let document = Object::new();
        let entry = class("kk.Logic")
            .with("handler", class("kk.Logic.Outlet"))
            .with("on", class("kk.Logic.Outlet"))
            .with("Done", class("kk.Logic.Outlet"));

        let mut builder = TreeBuilder::new(Registry::new(&document));
        let root = builder.build("in", &entry);
        assert!(root.is_leaf());
        assert!(builder.skipped().is_empty());
    }

    #[test]
    fn test_skipped_wiring_is_recorded() {
        let document = Object::new().with("count", 3.0);
        let entry = class("kk.Logic")
            .with("onMissing", "nowhere")
            .with("onCount", "count")
            .with("onFlag", true)
            .with("onBare", Object::new().with("title", "no class"))
            .with("onOk", class("kk.Logic.Outlet"));

        let mut builder = TreeBuilder::new(Registry::new(&document));
        let root = builder.build("in", &entry);
        assert_eq!(titles(&root), ["Ok: kk.Logic.Outlet"]);

        let reasons: Vec<_> = builder
            .skipped()
            .iter()
            .map(|skipped| (skipped.key.as_str(), skipped.reason.clone()))
            .collect();
        assert_eq!(
            reasons,
            [
                (
                    "onMissing",
                    SkipReason::Reference(ReferenceError::Unresolved {
                        name: "nowhere".to_string()
                    })
                ),
                (
                    "onCount",
                    SkipReason::Reference(ReferenceError::NotAnObject {
                        name: "count".to_string(),
                        kind: "number"
                    })
                ),
                ("onFlag", SkipReason::NotAnObject { kind: "boolean" }),
                ("onBare", SkipReason::MissingClass),
            ]
        );
        assert!(builder.skipped().iter().all(|s| s.parent == root.id()));
    }

    #[test]
    fn test_pre_order_ids() {
        let document = Object::new();
        let entry = class("kk.Logic")
            .with("onA", class("a").with("onC", class("c")))
            .with("onB", class("b"));

        let root = build(&Registry::new(&document), "in", &entry);
        let order: Vec<_> = root
            .iter()
            .map(|node| (node.id().index(), node.title()))
            .collect();
        assert_eq!(order, [(0, "in: kk.Logic"), (1, "A: a"), (2, "C: c"), (3, "B: b")]);
    }

    #[test]
    fn test_shared_reference_builds_independent_copies() {
        let document = Object::new().with("done", class("kk.Logic.Outlet"));
        let entry = class("kk.Logic")
            .with("onDone", "done")
            .with("onFail", "done");

        let root = build(&Registry::new(&document), "in", &entry);
        assert_eq!(titles(&root), ["Done: kk.Logic.Outlet", "Fail: kk.Logic.Outlet"]);
        assert_ne!(root.children()[0].id(), root.children()[1].id());
    }

    #[test]
    fn test_cyclic_reference_is_skipped() {
        let document = Object::new()
            .with("loop", class("kk.Logic").with("onAgain", "loop"))
            .with("in", class("kk.Logic").with("onStart", "loop").with("onBack", "in"));
        let entry = document.get("in").and_then(Value::as_object).unwrap();

        let mut builder = TreeBuilder::new(Registry::new(&document));
        let root = builder.build_entry("in", entry);

        assert_eq!(titles(&root), ["Start: kk.Logic"]);
        assert!(root.children()[0].is_leaf());

        let cyclic: Vec<_> = builder
            .skipped()
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::Reference(ReferenceError::Cyclic { .. })))
            .map(|s| s.key.as_str())
            .collect();
        assert_eq!(cyclic, ["onAgain", "onBack"]);
    }

    #[test]
    fn test_event_name() {
        assert_eq!(event_name("onDone"), Some("Done"));
        assert_eq!(event_name("on"), None);
        assert_eq!(event_name("done"), None);
    }
}
