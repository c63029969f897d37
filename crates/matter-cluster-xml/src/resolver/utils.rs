// crates/matter-cluster-xml/src/resolver/utils.rs

//! Small helpers shared by the entity resolvers.

use crate::model::Element;
use crate::types::{Access, ClusterRef};
use crate::value::Value;
use log::{debug, warn};

/// Reads a boolean flag. A non-boolean value (e.g. `"1"`) is not coerced;
/// it is reported and treated as absent.
pub(super) fn flag(element: &str, key: &str, value: &Value) -> Option<bool> {
    let b = value.as_bool();
    if b.is_none() {
        warn!(
            "Ignoring non-boolean value '{}' for @{} on <{}>",
            value, key, element
        );
    }
    b
}

/// Renders any inferred value back into its text form.
pub(super) fn text(value: &Value) -> String {
    value.to_string()
}

/// The text of the first child element with the given name.
pub(super) fn child_string(el: &Element, name: &str) -> Option<String> {
    el.child_text(name).map(text)
}

/// Keeps an attribute the entity has no typed field for.
pub(super) fn extra_attribute(
    element: &str,
    key: &str,
    value: &Value,
) -> (String, Option<Value>) {
    debug!("Keeping unmodeled attribute @{} on <{}>", key, element);
    (key.to_string(), Some(value.clone()))
}

/// Keeps a child element the entity has no typed field for.
pub(super) fn extra_child(parent: &str, child: &Element) -> Element {
    debug!("Keeping unmodeled element <{}> inside <{}>", child.name, parent);
    child.clone()
}

/// Resolves `<access op=".." role=".." privilege=".." modifier=".."/>`.
pub(super) fn resolve_access(el: &Element) -> Access {
    let mut access = Access::default();
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "op" => access.op = Some(text(value)),
            "role" => access.role = Some(text(value)),
            "privilege" => access.privilege = Some(text(value)),
            "modifier" => access.modifier = Some(text(value)),
            other => access.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    access
}

/// Resolves `<cluster code=".."/>` inside an enum or struct.
pub(super) fn resolve_cluster_ref(el: &Element) -> ClusterRef {
    ClusterRef {
        code: el.attr("code").map(Value::to_hex).unwrap_or_default(),
    }
}
