// crates/matter-cluster-xml/src/resolver/cluster.rs

//! Resolves `<cluster>`, `<clusterExtension>` and their attributes, commands
//! and events.
//!
//! Each resolver starts from the entity's `Default` and fills in the fields
//! it knows about. Anything else lands in the entity's extra attributes and
//! children.

use super::utils::{child_string, extra_attribute, extra_child, flag, resolve_access, text};
use crate::model::Element;
use crate::types::{
    Argument, Attribute, Cluster, ClusterExtension, ClusterSide, Command, Event, EventField,
    GlobalAttribute,
};
use crate::value::Value;

/// Resolves one `<cluster>` element.
pub(super) fn resolve_cluster(el: &Element) -> Cluster {
    let mut cluster = Cluster::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "singleton" => cluster.singleton = flag(&el.name, key, value),
            other => cluster.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    for child in &el.children {
        match child.name.as_str() {
            "domain" => cluster.domain = child.text.as_ref().map(text),
            "name" => cluster.name = child.text.as_ref().map(text).unwrap_or_default(),
            "code" => cluster.code = child.text.as_ref().map(Value::to_hex).unwrap_or_default(),
            "define" => cluster.define = child.text.as_ref().map(text),
            "description" => cluster.description = child.text.as_ref().map(text),
            "client" => cluster.client = Some(resolve_cluster_side(child)),
            "server" => cluster.server = Some(resolve_cluster_side(child)),
            "globalAttribute" => cluster
                .global_attributes
                .push(resolve_global_attribute(child)),
            "attribute" => cluster.attributes.push(resolve_attribute(child)),
            "command" => cluster.commands.push(resolve_command(child)),
            "event" => cluster.events.push(resolve_event(child)),
            _ => cluster.extra_children.push(extra_child(&el.name, child)),
        }
    }

    cluster
}

/// Resolves one `<clusterExtension code="..">` element.
pub(super) fn resolve_cluster_extension(el: &Element) -> ClusterExtension {
    let mut extension = ClusterExtension::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "code" => extension.code = value.to_hex(),
            other => extension.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    for child in &el.children {
        match child.name.as_str() {
            "attribute" => extension.attributes.push(resolve_attribute(child)),
            "command" => extension.commands.push(resolve_command(child)),
            "event" => extension.events.push(resolve_event(child)),
            _ => extension.extra_children.push(extra_child(&el.name, child)),
        }
    }

    extension
}

fn resolve_cluster_side(el: &Element) -> ClusterSide {
    let mut side = ClusterSide {
        enabled: el.text.as_ref().and_then(|v| flag(&el.name, "text()", v)),
        ..Default::default()
    };
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "tick" => side.tick = flag(&el.name, key, value),
            "init" => side.init = flag(&el.name, key, value),
            other => side.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    side
}

fn resolve_global_attribute(el: &Element) -> GlobalAttribute {
    let mut global = GlobalAttribute::default();
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "side" => global.side = Some(text(value)),
            "code" => global.code = value.to_hex(),
            "value" => global.value = Some(value.clone()),
            other => global.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    global
}

/// Resolves an `<attribute>`. The display name is the element's text node;
/// a `name` attribute is accepted as a fallback.
pub(super) fn resolve_attribute(el: &Element) -> Attribute {
    let mut attribute = Attribute::default();
    let mut name_attr = None;

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => name_attr = Some(text(value)),
            "side" => attribute.side = Some(text(value)),
            "code" => attribute.code = value.to_hex(),
            "define" => attribute.define = Some(text(value)),
            "type" => attribute.type_name = Some(text(value)),
            "entryType" => attribute.entry_type = Some(text(value)),
            "array" => attribute.array = flag(&el.name, key, value),
            "length" => attribute.length = Some(value.clone()),
            "min" => attribute.min = Some(value.clone()),
            "max" => attribute.max = Some(value.clone()),
            "minLength" => attribute.min_length = Some(value.clone()),
            "default" => attribute.default = Some(value.clone()),
            "isNullable" => attribute.is_nullable = flag(&el.name, key, value),
            "reportable" => attribute.reportable = flag(&el.name, key, value),
            "writable" => attribute.writable = flag(&el.name, key, value),
            "optional" => attribute.optional = flag(&el.name, key, value),
            "introducedIn" => attribute.introduced_in = Some(text(value)),
            other => attribute.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    attribute.name = el
        .text
        .as_ref()
        .map(text)
        .or(name_attr)
        .unwrap_or_default();

    for child in &el.children {
        match child.name.as_str() {
            "description" => attribute.description = child.text.as_ref().map(text),
            "access" => attribute.access.push(resolve_access(child)),
            _ => attribute.extra_children.push(extra_child(&el.name, child)),
        }
    }

    attribute
}

pub(super) fn resolve_command(el: &Element) -> Command {
    let mut command = Command::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => command.name = text(value),
            "source" => command.source = Some(text(value)),
            "code" => command.code = value.to_hex(),
            "response" => command.response = Some(text(value)),
            "optional" => command.optional = flag(&el.name, key, value),
            "disableDefaultResponse" => {
                command.disable_default_response = flag(&el.name, key, value)
            }
            "isFabricScoped" => command.is_fabric_scoped = flag(&el.name, key, value),
            "mustUseTimedInvoke" => command.must_use_timed_invoke = flag(&el.name, key, value),
            other => command.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    command.description = child_string(el, "description");
    for child in &el.children {
        match child.name.as_str() {
            "description" => {}
            "arg" => command.args.push(resolve_argument(child)),
            "access" => command.access.push(resolve_access(child)),
            _ => command.extra_children.push(extra_child(&el.name, child)),
        }
    }

    command
}

fn resolve_argument(el: &Element) -> Argument {
    let mut arg = Argument::default();
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => arg.name = text(value),
            "type" => arg.type_name = Some(text(value)),
            "fieldId" => arg.field_id = Some(value.to_hex()),
            "array" => arg.array = flag(&el.name, key, value),
            "optional" => arg.optional = flag(&el.name, key, value),
            "isNullable" => arg.is_nullable = flag(&el.name, key, value),
            "default" => arg.default = Some(value.clone()),
            "min" => arg.min = Some(value.clone()),
            "max" => arg.max = Some(value.clone()),
            other => arg.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    arg.extra_children = el.children.iter().map(|c| extra_child(&el.name, c)).collect();
    arg
}

pub(super) fn resolve_event(el: &Element) -> Event {
    let mut event = Event::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => event.name = text(value),
            "side" => event.side = Some(text(value)),
            "code" => event.code = value.to_hex(),
            "priority" => event.priority = Some(text(value)),
            "optional" => event.optional = flag(&el.name, key, value),
            "isFabricSensitive" => event.is_fabric_sensitive = flag(&el.name, key, value),
            other => event.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    event.description = child_string(el, "description");
    for child in &el.children {
        match child.name.as_str() {
            "description" => {}
            "field" => event.fields.push(resolve_event_field(child)),
            "access" => event.access.push(resolve_access(child)),
            _ => event.extra_children.push(extra_child(&el.name, child)),
        }
    }

    event
}

fn resolve_event_field(el: &Element) -> EventField {
    let mut field = EventField::default();
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "id" => field.id = value.to_hex(),
            "name" => field.name = text(value),
            "type" => field.type_name = Some(text(value)),
            "array" => field.array = flag(&el.name, key, value),
            "isNullable" => field.is_nullable = flag(&el.name, key, value),
            "optional" => field.optional = flag(&el.name, key, value),
            other => field.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    field.extra_children = el.children.iter().map(|c| extra_child(&el.name, c)).collect();
    field
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexValue;
    use crate::parser::parse_element_tree;

    #[test]
    fn test_resolve_attribute_keeps_false_and_zero() {
        let el = parse_element_tree(
            r#"<attribute side="server" code="0x0004" type="int8u" length="0" writable="false" optional="false" default="0x00">Level</attribute>"#,
        )
        .unwrap();
        let attribute = resolve_attribute(&el);

        assert_eq!(attribute.name, "Level");
        assert_eq!(attribute.code, HexValue::new("0x0004"));
        assert_eq!(attribute.length, Some(Value::Int(0)));
        assert_eq!(attribute.writable, Some(false));
        assert_eq!(attribute.optional, Some(false));
        assert_eq!(attribute.default, Some(Value::Hex(HexValue::new("0x00"))));
        assert_eq!(attribute.reportable, None);
    }

    #[test]
    fn test_resolve_attribute_with_children() {
        let el = parse_element_tree(
            r#"<attribute code="0x0010" define="OPTIONS" type="bitmap8" writable="true">
                 Options
                 <access op="read" privilege="view"/>
                 <access op="write" privilege="operate"/>
               </attribute>"#,
        )
        .unwrap();
        let attribute = resolve_attribute(&el);

        assert_eq!(attribute.name, "Options");
        assert_eq!(attribute.access.len(), 2);
        assert_eq!(attribute.access[1].op.as_deref(), Some("write"));
    }

    #[test]
    fn test_resolve_command_with_args() {
        let el = parse_element_tree(
            r#"<command source="client" code="0x00" name="MoveToLevel" optional="false">
                 <description>Moves to a level.</description>
                 <arg name="Level" type="int8u"/>
                 <arg name="TransitionTime" type="int16u" isNullable="true"/>
               </command>"#,
        )
        .unwrap();
        let command = resolve_command(&el);

        assert_eq!(command.name, "MoveToLevel");
        assert_eq!(command.code.as_str(), "0x00");
        assert_eq!(command.description.as_deref(), Some("Moves to a level."));
        assert_eq!(command.args.len(), 2);
        assert_eq!(command.args[1].is_nullable, Some(true));
        assert_eq!(command.optional, Some(false));
    }

    #[test]
    fn test_resolve_cluster_keeps_unmodeled_content() {
        let el = parse_element_tree(
            r#"<cluster apiMaturity="provisional">
                 <name>Sample</name>
                 <code>0xfc00</code>
                 <features>
                   <feature bit="0" code="LT" name="Lighting"/>
                 </features>
                 <attribute code="0x0000" type="boolean">OnOff<mandatoryConform/></attribute>
                 <command code="0x00" name="Off"><arg name="Mode" type="enum8"><optionalConform/></arg></command>
               </cluster>"#,
        )
        .unwrap();
        let cluster = resolve_cluster(&el);

        assert_eq!(
            cluster.extra_attributes,
            vec![("apiMaturity".to_string(), Some(Value::string("provisional")))]
        );
        assert_eq!(cluster.extra_children.len(), 1);
        assert_eq!(cluster.extra_children[0].name, "features");
        assert_eq!(cluster.extra_children[0].children[0].attr("code"), Some(&Value::string("LT")));
        assert_eq!(cluster.attributes[0].name, "OnOff");
        assert_eq!(cluster.attributes[0].extra_children[0].name, "mandatoryConform");
        assert_eq!(cluster.commands[0].args[0].extra_children[0].name, "optionalConform");
    }

    #[test]
    fn test_resolve_event_field_ids_become_hex() {
        let el = parse_element_tree(
            r#"<event side="server" code="0x01" name="Fault" priority="critical">
                 <field id="1" name="Current" type="int8u"/>
               </event>"#,
        )
        .unwrap();
        let event = resolve_event(&el);

        assert_eq!(event.priority.as_deref(), Some("critical"));
        assert_eq!(event.fields[0].id.as_str(), "0x0001");
    }
}
