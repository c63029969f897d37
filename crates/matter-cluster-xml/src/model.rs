//! The raw element tree that sits between XML text and the typed
//! document in [`crate::types`].
//!
//! Every element carries three independent bags: its attributes, its child
//! elements and the value of its own text node. Values are already typed by
//! [`crate::value::infer_value`]. Repeated children stay repeated and single
//! children stay single; the tree never guesses at one-vs-many.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One XML element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    /// Attributes in document order. `None` marks an empty attribute value.
    pub attributes: Vec<(String, Option<Value>)>,
    /// Trimmed text content of the element itself, if any.
    pub text: Option<Value>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Looks up an attribute value. Returns `None` both when the attribute is
    /// absent and when it was present but empty.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Iterates over the direct children with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// The text value of the first child with the given tag name.
    pub fn child_text(&self, name: &str) -> Option<&Value> {
        self.child(name).and_then(|c| c.text.as_ref())
    }

    // --- Builder-style helpers used when serializing the typed tree ---

    /// Appends an attribute, skipping it entirely when the value is `None`.
    pub fn with_attr(mut self, key: &str, value: Option<Value>) -> Self {
        if let Some(v) = value {
            self.attributes.push((key.to_string(), Some(v)));
        }
        self
    }

    pub fn with_text(mut self, text: Option<Value>) -> Self {
        self.text = text;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends `<name>text</name>` when `text` is present.
    pub fn with_text_child(self, name: &str, text: Option<Value>) -> Self {
        match text {
            Some(t) => self.with_child(Element::new(name).with_text(Some(t))),
            None => self,
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends attributes and children kept verbatim from a parsed document.
    /// An attribute whose key is already set is not repeated.
    pub fn with_extras(
        mut self,
        attributes: &[(String, Option<Value>)],
        children: &[Element],
    ) -> Self {
        for (key, value) in attributes {
            if self.attributes.iter().all(|(k, _)| k != key) {
                self.attributes.push((key.clone(), value.clone()));
            }
        }
        self.children.extend(children.iter().cloned());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexValue;

    #[test]
    fn test_attr_lookup_treats_empty_as_absent() {
        let mut el = Element::new("attribute");
        el.attributes.push(("code".into(), Some(Value::Hex(HexValue::new("0x0001")))));
        el.attributes.push(("define".into(), None));

        assert_eq!(el.attr("code"), Some(&Value::Hex(HexValue::new("0x0001"))));
        assert_eq!(el.attr("define"), None);
        assert_eq!(el.attr("missing"), None);
    }

    #[test]
    fn test_builder_skips_absent_values() {
        let el = Element::new("arg")
            .with_attr("name", Some(Value::string("level")))
            .with_attr("optional", None)
            .with_attr("array", Some(Value::Bool(false)))
            .with_text_child("description", None);

        assert_eq!(el.attributes.len(), 2);
        assert!(el.children.is_empty());
        assert_eq!(el.attr("array"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_with_extras_does_not_repeat_keys() {
        let extras = vec![
            ("name".to_string(), Some(Value::string("shadow"))),
            ("apiMaturity".to_string(), Some(Value::string("provisional"))),
        ];
        let el = Element::new("command")
            .with_attr("name", Some(Value::string("Off")))
            .with_extras(&extras, &[Element::new("mandatoryConform")]);

        assert_eq!(el.attributes.len(), 2);
        assert_eq!(el.attr("name"), Some(&Value::string("Off")));
        assert_eq!(el.attr("apiMaturity"), Some(&Value::string("provisional")));
        assert_eq!(el.children[0].name, "mandatoryConform");
    }
}
