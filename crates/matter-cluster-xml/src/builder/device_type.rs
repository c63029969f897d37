// crates/matter-cluster-xml/src/builder/device_type.rs

use super::{flag, hex, string};
use crate::model::Element;
use crate::types::{ClusterInclude, DeviceClusters, DeviceType, EditableHex};
use crate::value::Value;

pub(super) fn build_device_type_element(device_type: &DeviceType) -> Element {
    Element::new("deviceType")
        .with_text_child("name", string(Some(device_type.name.as_str())))
        .with_text_child("domain", string(device_type.domain.as_deref()))
        .with_text_child("typeName", string(device_type.type_name.as_deref()))
        .with_children(
            device_type
                .profile_id
                .as_ref()
                .map(|id| build_editable_hex_element("profileId", id)),
        )
        .with_children(
            device_type
                .device_id
                .as_ref()
                .map(|id| build_editable_hex_element("deviceId", id)),
        )
        .with_text_child("class", string(device_type.class.as_deref()))
        .with_text_child("scope", string(device_type.scope.as_deref()))
        .with_children(device_type.clusters.as_ref().map(build_clusters_element))
        .with_extras(&device_type.extra_attributes, &device_type.extra_children)
}

fn build_editable_hex_element(name: &str, id: &EditableHex) -> Element {
    Element::new(name)
        .with_attr("editable", flag(id.editable))
        .with_text(hex(&id.value))
}

fn build_clusters_element(clusters: &DeviceClusters) -> Element {
    Element::new("clusters")
        .with_attr("lockOthers", flag(clusters.lock_others))
        .with_children(clusters.includes.iter().map(build_include_element))
        .with_extras(&clusters.extra_attributes, &clusters.extra_children)
}

fn build_include_element(include: &ClusterInclude) -> Element {
    let require = |name: &'static str, values: &[String]| {
        values
            .iter()
            .map(move |v| Element::new(name).with_text(Some(Value::string(v.as_str()))))
            .collect::<Vec<_>>()
    };

    Element::new("include")
        .with_attr("cluster", string(Some(include.cluster.as_str())))
        .with_attr("client", flag(include.client))
        .with_attr("server", flag(include.server))
        .with_attr("clientLocked", flag(include.client_locked))
        .with_attr("serverLocked", flag(include.server_locked))
        .with_children(require("requireAttribute", &include.require_attributes))
        .with_children(require("requireCommand", &include.require_commands))
        .with_extras(&include.extra_attributes, &include.extra_children)
}
