// crates/matter-cluster-xml/src/builder/cluster.rs

//! Builds `<cluster>`, `<clusterExtension>` and their members.

use super::{build_access_element, flag, hex, string};
use crate::model::Element;
use crate::types::{
    Argument, Attribute, Cluster, ClusterExtension, ClusterSide, Command, Event, EventField,
    GlobalAttribute,
};

/// Builds the `<cluster>` element. Children follow the conventional order:
/// header fields, client/server, global attributes, attributes, commands, events.
pub(super) fn build_cluster_element(cluster: &Cluster) -> Element {
    Element::new("cluster")
        .with_attr("singleton", flag(cluster.singleton))
        .with_text_child("domain", string(cluster.domain.as_deref()))
        .with_text_child("name", string(Some(cluster.name.as_str())))
        .with_text_child("code", hex(&cluster.code))
        .with_text_child("define", string(cluster.define.as_deref()))
        .with_text_child("description", string(cluster.description.as_deref()))
        .with_children(cluster.client.as_ref().map(|s| build_side_element("client", s)))
        .with_children(cluster.server.as_ref().map(|s| build_side_element("server", s)))
        .with_children(cluster.global_attributes.iter().map(build_global_attribute_element))
        .with_children(cluster.attributes.iter().map(build_attribute_element))
        .with_children(cluster.commands.iter().map(build_command_element))
        .with_children(cluster.events.iter().map(build_event_element))
        .with_extras(&cluster.extra_attributes, &cluster.extra_children)
}

/// Builds `<clusterExtension code="..">` holding only the given members.
pub(super) fn build_cluster_extension_element(extension: &ClusterExtension) -> Element {
    Element::new("clusterExtension")
        .with_attr("code", hex(&extension.code))
        .with_children(extension.attributes.iter().map(build_attribute_element))
        .with_children(extension.commands.iter().map(build_command_element))
        .with_children(extension.events.iter().map(build_event_element))
        .with_extras(&extension.extra_attributes, &extension.extra_children)
}

fn build_side_element(name: &str, side: &ClusterSide) -> Element {
    Element::new(name)
        .with_attr("tick", flag(side.tick))
        .with_attr("init", flag(side.init))
        .with_text(flag(side.enabled))
        .with_extras(&side.extra_attributes, &[])
}

fn build_global_attribute_element(global: &GlobalAttribute) -> Element {
    Element::new("globalAttribute")
        .with_attr("side", string(global.side.as_deref()))
        .with_attr("code", hex(&global.code))
        .with_attr("value", global.value.clone())
        .with_extras(&global.extra_attributes, &[])
}

/// Builds an `<attribute>`. The name is written as the element's text node,
/// ahead of any `<description>`/`<access>` children.
pub(super) fn build_attribute_element(attribute: &Attribute) -> Element {
    Element::new("attribute")
        .with_attr("side", string(attribute.side.as_deref()))
        .with_attr("code", hex(&attribute.code))
        .with_attr("define", string(attribute.define.as_deref()))
        .with_attr("type", string(attribute.type_name.as_deref()))
        .with_attr("entryType", string(attribute.entry_type.as_deref()))
        .with_attr("array", flag(attribute.array))
        .with_attr("length", attribute.length.clone())
        .with_attr("min", attribute.min.clone())
        .with_attr("max", attribute.max.clone())
        .with_attr("minLength", attribute.min_length.clone())
        .with_attr("default", attribute.default.clone())
        .with_attr("isNullable", flag(attribute.is_nullable))
        .with_attr("reportable", flag(attribute.reportable))
        .with_attr("writable", flag(attribute.writable))
        .with_attr("optional", flag(attribute.optional))
        .with_attr("introducedIn", string(attribute.introduced_in.as_deref()))
        .with_text(string(Some(attribute.name.as_str())))
        .with_text_child("description", string(attribute.description.as_deref()))
        .with_children(attribute.access.iter().map(build_access_element))
        .with_extras(&attribute.extra_attributes, &attribute.extra_children)
}

pub(super) fn build_command_element(command: &Command) -> Element {
    Element::new("command")
        .with_attr("source", string(command.source.as_deref()))
        .with_attr("code", hex(&command.code))
        .with_attr("name", string(Some(command.name.as_str())))
        .with_attr("response", string(command.response.as_deref()))
        .with_attr("optional", flag(command.optional))
        .with_attr(
            "disableDefaultResponse",
            flag(command.disable_default_response),
        )
        .with_attr("isFabricScoped", flag(command.is_fabric_scoped))
        .with_attr("mustUseTimedInvoke", flag(command.must_use_timed_invoke))
        .with_text_child("description", string(command.description.as_deref()))
        .with_children(command.args.iter().map(build_argument_element))
        .with_children(command.access.iter().map(build_access_element))
        .with_extras(&command.extra_attributes, &command.extra_children)
}

fn build_argument_element(arg: &Argument) -> Element {
    Element::new("arg")
        .with_attr("fieldId", arg.field_id.as_ref().and_then(hex))
        .with_attr("name", string(Some(arg.name.as_str())))
        .with_attr("type", string(arg.type_name.as_deref()))
        .with_attr("array", flag(arg.array))
        .with_attr("optional", flag(arg.optional))
        .with_attr("isNullable", flag(arg.is_nullable))
        .with_attr("default", arg.default.clone())
        .with_attr("min", arg.min.clone())
        .with_attr("max", arg.max.clone())
        .with_extras(&arg.extra_attributes, &arg.extra_children)
}

pub(super) fn build_event_element(event: &Event) -> Element {
    Element::new("event")
        .with_attr("side", string(event.side.as_deref()))
        .with_attr("code", hex(&event.code))
        .with_attr("name", string(Some(event.name.as_str())))
        .with_attr("priority", string(event.priority.as_deref()))
        .with_attr("optional", flag(event.optional))
        .with_attr("isFabricSensitive", flag(event.is_fabric_sensitive))
        .with_text_child("description", string(event.description.as_deref()))
        .with_children(event.fields.iter().map(build_event_field_element))
        .with_children(event.access.iter().map(build_access_element))
        .with_extras(&event.extra_attributes, &event.extra_children)
}

fn build_event_field_element(field: &EventField) -> Element {
    Element::new("field")
        .with_attr("id", hex(&field.id))
        .with_attr("name", string(Some(field.name.as_str())))
        .with_attr("type", string(field.type_name.as_deref()))
        .with_attr("array", flag(field.array))
        .with_attr("isNullable", flag(field.is_nullable))
        .with_attr("optional", flag(field.optional))
        .with_extras(&field.extra_attributes, &field.extra_children)
}
