//! Serializes the typed document back into configurator XML.
//!
//! The typed tree is first converted into the raw element tree with every
//! value already in its on-the-wire form: hex identifiers become their
//! canonical string, booleans become the literal strings `"true"`/`"false"`
//! and absent or empty values are dropped. The element tree is then written
//! with [`crate::writer`] and normalized by [`crate::format`].

mod cluster;
mod data_type;
mod device_type;

use crate::error::XmlError;
use crate::format::inline_text_nodes;
use crate::hex::HexValue;
use crate::model::Element;
use crate::resolver::ROOT_ELEMENT;
use crate::types::{Access, ClusterExtension, Configurator};
use crate::value::Value;
use crate::writer::{WriterConfig, write_document};

/// Serializes a [`Configurator`] into a configurator XML string.
///
/// The output starts with an XML declaration, is indented by two spaces per
/// level and has text-only elements collapsed onto one line.
///
/// # Errors
/// Only fails if writing into the output buffer fails.
pub fn save_configurator_to_string(configurator: &Configurator) -> Result<String, XmlError> {
    save_configurator_with_config(configurator, &WriterConfig::default())
}

/// Same as [`save_configurator_to_string`] with explicit writer settings.
pub fn save_configurator_with_config(
    configurator: &Configurator,
    config: &WriterConfig,
) -> Result<String, XmlError> {
    // 1. Typed tree -> raw element tree.
    let root = build_configurator_element(configurator);

    // 2. Raw element tree -> indented text.
    let indented = write_document(&root, config)?;

    // 3. Collapse text nodes the way the protocol tooling expects.
    Ok(inline_text_nodes(&indented))
}

/// Converts the typed document into the raw `<configurator>` element.
pub fn build_configurator_element(configurator: &Configurator) -> Element {
    Element::new(ROOT_ELEMENT)
        .with_children(configurator.domain.as_ref().map(|d| {
            Element::new("domain").with_attr("name", string(Some(d.name.as_str())))
        }))
        .with_children(configurator.enums.iter().map(data_type::build_enum_element))
        .with_children(configurator.structs.iter().map(data_type::build_struct_element))
        .with_children(configurator.clusters.iter().map(cluster::build_cluster_element))
        .with_children(
            configurator
                .cluster_extensions
                .iter()
                .map(cluster::build_cluster_extension_element),
        )
        .with_children(
            configurator
                .device_types
                .iter()
                .map(device_type::build_device_type_element),
        )
        .with_children(configurator.other.iter().cloned())
}

/// Builds the element for a single cluster extension, used when exporting
/// a delta outside of a full document.
pub fn build_cluster_extension_element(extension: &ClusterExtension) -> Element {
    cluster::build_cluster_extension_element(extension)
}

// --- Value Encoding Helpers ---

/// Non-empty strings only; `None` and `""` are omitted.
fn string(value: Option<&str>) -> Option<Value> {
    value.filter(|s| !s.is_empty()).map(Value::string)
}

/// Booleans are written as literal strings so `false` is never dropped.
fn flag(value: Option<bool>) -> Option<Value> {
    value.map(|b| Value::string(if b { "true" } else { "false" }))
}

/// Hex identifiers are written as their canonical `0x` string.
fn hex(value: &HexValue) -> Option<Value> {
    Some(Value::string(value.as_str()))
}

fn build_access_element(access: &Access) -> Element {
    Element::new("access")
        .with_attr("op", string(access.op.as_deref()))
        .with_attr("role", string(access.role.as_deref()))
        .with_attr("privilege", string(access.privilege.as_deref()))
        .with_attr("modifier", string(access.modifier.as_deref()))
        .with_extras(&access.extra_attributes, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, Cluster, ClusterSide};

    fn sample_cluster() -> Cluster {
        Cluster {
            domain: Some("General".into()),
            name: "Sample".into(),
            code: HexValue::new("0xFC00"),
            define: Some("SAMPLE_CLUSTER".into()),
            description: Some("A sample cluster.".into()),
            server: Some(ClusterSide {
                enabled: Some(true),
                tick: Some(false),
                init: Some(false),
                ..Default::default()
            }),
            attributes: vec![Attribute {
                name: "Counter".into(),
                side: Some("server".into()),
                code: HexValue::from_number(0),
                define: Some("COUNTER".into()),
                type_name: Some("int16u".into()),
                writable: Some(false),
                default: Some(Value::Int(0)),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_save_configurator_to_string() {
        let configurator = Configurator {
            clusters: vec![sample_cluster()],
            ..Default::default()
        };
        let xml = save_configurator_to_string(&configurator).unwrap();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<configurator>
  <cluster>
    <domain>General</domain>
    <name>Sample</name>
    <code>0xfc00</code>
    <define>SAMPLE_CLUSTER</define>
    <description>A sample cluster.</description>
    <server tick="false" init="false">true</server>
    <attribute side="server" code="0x0000" define="COUNTER" type="int16u" default="0" writable="false">Counter</attribute>
  </cluster>
</configurator>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_empty_configurator_is_self_closing() {
        let xml = save_configurator_to_string(&Configurator::default()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<configurator/>"
        );
    }

    #[test]
    fn test_extension_element() {
        let extension = ClusterExtension {
            code: HexValue::new("0x0006"),
            attributes: sample_cluster().attributes,
            ..Default::default()
        };
        let el = build_cluster_extension_element(&extension);
        assert_eq!(el.name, "clusterExtension");
        assert_eq!(el.attr("code"), Some(&Value::string("0x0006")));
        assert_eq!(el.children.len(), 1);
    }
}
