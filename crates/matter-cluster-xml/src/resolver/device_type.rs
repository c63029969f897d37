// crates/matter-cluster-xml/src/resolver/device_type.rs

//! Resolves `<deviceType>` definitions.

use super::utils::{extra_attribute, extra_child, flag, text};
use crate::model::Element;
use crate::types::{ClusterInclude, DeviceClusters, DeviceType, EditableHex};
use crate::value::Value;

pub(super) fn resolve_device_type(el: &Element) -> DeviceType {
    let mut device_type = DeviceType::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        device_type
            .extra_attributes
            .push(extra_attribute(&el.name, key, value));
    }

    for child in &el.children {
        match child.name.as_str() {
            "name" => device_type.name = child.text.as_ref().map(text).unwrap_or_default(),
            "domain" => device_type.domain = child.text.as_ref().map(text),
            "typeName" => device_type.type_name = child.text.as_ref().map(text),
            "profileId" => device_type.profile_id = Some(resolve_editable_hex(child)),
            "deviceId" => device_type.device_id = Some(resolve_editable_hex(child)),
            "class" => device_type.class = child.text.as_ref().map(text),
            "scope" => device_type.scope = child.text.as_ref().map(text),
            "clusters" => device_type.clusters = Some(resolve_device_clusters(child)),
            _ => device_type.extra_children.push(extra_child(&el.name, child)),
        }
    }

    device_type
}

fn resolve_editable_hex(el: &Element) -> EditableHex {
    EditableHex {
        value: el.text.as_ref().map(Value::to_hex).unwrap_or_default(),
        editable: el.attr("editable").and_then(|v| flag(&el.name, "editable", v)),
    }
}

fn resolve_device_clusters(el: &Element) -> DeviceClusters {
    let mut clusters = DeviceClusters::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "lockOthers" => clusters.lock_others = flag(&el.name, key, value),
            other => clusters.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    for child in &el.children {
        match child.name.as_str() {
            "include" => clusters.includes.push(resolve_include(child)),
            _ => clusters.extra_children.push(extra_child(&el.name, child)),
        }
    }

    clusters
}

fn resolve_include(el: &Element) -> ClusterInclude {
    let mut include = ClusterInclude::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "cluster" => include.cluster = text(value),
            "client" => include.client = flag(&el.name, key, value),
            "server" => include.server = flag(&el.name, key, value),
            "clientLocked" => include.client_locked = flag(&el.name, key, value),
            "serverLocked" => include.server_locked = flag(&el.name, key, value),
            other => include.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    for child in &el.children {
        match (child.name.as_str(), child.text.as_ref()) {
            ("requireAttribute", Some(value)) => include.require_attributes.push(text(value)),
            ("requireCommand", Some(value)) => include.require_commands.push(text(value)),
            _ => include.extra_children.push(extra_child(&el.name, child)),
        }
    }

    include
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_element_tree;

    #[test]
    fn test_resolve_device_type() {
        let el = parse_element_tree(
            r#"<deviceType>
                 <name>MA-onofflight</name>
                 <domain>CHIP</domain>
                 <typeName>Matter On/Off Light</typeName>
                 <profileId editable="false">0x0103</profileId>
                 <deviceId editable="false">0x0100</deviceId>
                 <class>Simple</class>
                 <scope>Endpoint</scope>
                 <clusters lockOthers="true">
                   <include cluster="On/Off" client="false" server="true" clientLocked="true" serverLocked="true">
                     <requireAttribute>ON_OFF</requireAttribute>
                     <requireCommand>Off</requireCommand>
                     <requireCommand>On</requireCommand>
                   </include>
                 </clusters>
               </deviceType>"#,
        )
        .unwrap();
        let device_type = resolve_device_type(&el);

        assert_eq!(device_type.name, "MA-onofflight");
        assert_eq!(device_type.type_name.as_deref(), Some("Matter On/Off Light"));
        let device_id = device_type.device_id.unwrap();
        assert_eq!(device_id.value.as_str(), "0x0100");
        assert_eq!(device_id.editable, Some(false));

        let clusters = device_type.clusters.unwrap();
        assert_eq!(clusters.lock_others, Some(true));
        let include = &clusters.includes[0];
        assert_eq!(include.cluster, "On/Off");
        assert_eq!(include.client, Some(false));
        assert_eq!(include.require_attributes, vec!["ON_OFF"]);
        assert_eq!(include.require_commands, vec!["Off", "On"]);
    }
}
