// crates/matter-cluster-xml/src/types.rs

//! Public, strongly-shaped data structures for a parsed configurator file.
//!
//! Optional flags are `Option<bool>` so that an explicit `false` survives a
//! round trip; only `None` is treated as "absent" when serializing.
//!
//! Attributes and child elements an entity has no typed field for are kept
//! verbatim in its `extra_attributes`/`extra_children` (`other` at the root)
//! and written back after the known ones.

use crate::hex::HexValue;
use crate::model::Element;
use crate::value::Value;
use serde::{Deserialize, Serialize};

// --- Root Structure ---

/// The `<configurator>` root element.
///
/// A cluster file holds one or more `<cluster>` elements; an extension file
/// holds `<clusterExtension>` elements instead. Both may carry enums, structs
/// and device types.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configurator {
    /// `<domain name=".."/>`
    pub domain: Option<Domain>,
    pub enums: Vec<EnumType>,
    pub structs: Vec<StructType>,
    pub clusters: Vec<Cluster>,
    pub device_types: Vec<DeviceType>,
    pub cluster_extensions: Vec<ClusterExtension>,
    /// Root children the typed model does not cover, such as `<bitmap>`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<Element>,
}

impl Configurator {
    /// True when the document holds nothing worth serializing.
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.enums.is_empty()
            && self.structs.is_empty()
            && self.clusters.is_empty()
            && self.device_types.is_empty()
            && self.cluster_extensions.is_empty()
            && self.other.is_empty()
    }

    /// Finds a cluster by its code.
    pub fn cluster_by_code(&self, code: &HexValue) -> Option<&Cluster> {
        self.clusters.iter().find(|c| &c.code == code)
    }
}

/// Represents `<domain name="CHIP"/>` at the root.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
}

// --- Cluster ---

/// Represents a `<cluster>` element.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// `<domain>` text, e.g. "General".
    pub domain: Option<String>,
    /// `<name>`
    pub name: String,
    /// `<code>`
    pub code: HexValue,
    /// `<define>`, e.g. "ON_OFF_CLUSTER".
    pub define: Option<String>,
    /// `<description>`
    pub description: Option<String>,
    /// `@singleton`
    pub singleton: Option<bool>,
    /// `<client tick=".." init="..">true</client>`
    pub client: Option<ClusterSide>,
    /// `<server tick=".." init="..">true</server>`
    pub server: Option<ClusterSide>,
    pub global_attributes: Vec<GlobalAttribute>,
    pub attributes: Vec<Attribute>,
    pub commands: Vec<Command>,
    pub events: Vec<Event>,
    /// Attributes the typed fields above do not cover, e.g. `@apiMaturity`.
    /// Written back unchanged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    /// Child elements without a typed field, e.g. `<features>` or
    /// conformance markers. Written back after the known children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// The `<client>`/`<server>` flags of a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterSide {
    /// The element's text.
    pub enabled: Option<bool>,
    /// `@tick`
    pub tick: Option<bool>,
    /// `@init`
    pub init: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
}

/// Represents `<globalAttribute side=".." code=".." value=".."/>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalAttribute {
    pub side: Option<String>,
    pub code: HexValue,
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
}

/// Represents an `<attribute>` of a cluster. Its display name is the
/// element's own text node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Text node, e.g. `OnOff`.
    pub name: String,
    /// `@side` ("server" or "client")
    pub side: Option<String>,
    /// `@code`
    pub code: HexValue,
    /// `@define`
    pub define: Option<String>,
    /// `@type`
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// `@entryType`, the element type of list attributes.
    pub entry_type: Option<String>,
    /// `@array`
    pub array: Option<bool>,
    /// `@length`
    pub length: Option<Value>,
    /// `@min`
    pub min: Option<Value>,
    /// `@max`
    pub max: Option<Value>,
    /// `@minLength`
    pub min_length: Option<Value>,
    /// `@default`
    pub default: Option<Value>,
    /// `@isNullable`
    pub is_nullable: Option<bool>,
    /// `@reportable`
    pub reportable: Option<bool>,
    /// `@writable`
    pub writable: Option<bool>,
    /// `@optional`
    pub optional: Option<bool>,
    /// `@introducedIn`
    pub introduced_in: Option<String>,
    /// `<description>`
    pub description: Option<String>,
    pub access: Vec<Access>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// Represents `<access op=".." role=".." privilege=".." modifier=".."/>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Access {
    pub op: Option<String>,
    pub role: Option<String>,
    pub privilege: Option<String>,
    pub modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
}

/// Represents a `<command>` of a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// `@name`
    pub name: String,
    /// `@source` ("client" or "server")
    pub source: Option<String>,
    /// `@code`
    pub code: HexValue,
    /// `@response`, name of the response command.
    pub response: Option<String>,
    /// `@optional`
    pub optional: Option<bool>,
    /// `@disableDefaultResponse`
    pub disable_default_response: Option<bool>,
    /// `@isFabricScoped`
    pub is_fabric_scoped: Option<bool>,
    /// `@mustUseTimedInvoke`
    pub must_use_timed_invoke: Option<bool>,
    /// `<description>`
    pub description: Option<String>,
    pub args: Vec<Argument>,
    pub access: Vec<Access>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// Represents an `<arg>` of a command.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub field_id: Option<HexValue>,
    pub array: Option<bool>,
    pub optional: Option<bool>,
    pub is_nullable: Option<bool>,
    pub default: Option<Value>,
    pub min: Option<Value>,
    pub max: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// Represents an `<event>` of a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// `@name`
    pub name: String,
    /// `@side`
    pub side: Option<String>,
    /// `@code`
    pub code: HexValue,
    /// `@priority` ("debug", "info", "critical")
    pub priority: Option<String>,
    /// `@optional`
    pub optional: Option<bool>,
    /// `@isFabricSensitive`
    pub is_fabric_sensitive: Option<bool>,
    /// `<description>`
    pub description: Option<String>,
    pub fields: Vec<EventField>,
    pub access: Vec<Access>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// Represents a `<field>` of an event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventField {
    pub id: HexValue,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub array: Option<bool>,
    pub is_nullable: Option<bool>,
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

// --- Data Types ---

/// `<cluster code=".."/>` inside an enum or struct, assigning the type to a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterRef {
    pub code: HexValue,
}

/// Represents an `<enum>` definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub clusters: Vec<ClusterRef>,
    pub items: Vec<EnumItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// `<item name=".." value=".."/>` of an enum.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnumItem {
    pub name: String,
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// Represents a `<struct>` definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructType {
    pub name: String,
    pub is_fabric_scoped: Option<bool>,
    pub clusters: Vec<ClusterRef>,
    pub items: Vec<StructField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// `<item>` of a struct.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructField {
    pub field_id: Option<HexValue>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub array: Option<bool>,
    pub optional: Option<bool>,
    pub is_nullable: Option<bool>,
    pub is_fabric_sensitive: Option<bool>,
    pub min_length: Option<Value>,
    pub max_length: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

// --- Device Type ---

/// Represents a `<deviceType>` definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceType {
    /// `<name>`
    pub name: String,
    /// `<domain>`
    pub domain: Option<String>,
    /// `<typeName>`
    pub type_name: Option<String>,
    /// `<profileId editable="..">`
    pub profile_id: Option<EditableHex>,
    /// `<deviceId editable="..">`
    pub device_id: Option<EditableHex>,
    /// `<class>`
    pub class: Option<String>,
    /// `<scope>`
    pub scope: Option<String>,
    /// `<clusters lockOthers="..">`
    pub clusters: Option<DeviceClusters>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// A hex identifier element with an `editable` attribute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditableHex {
    pub value: HexValue,
    pub editable: Option<bool>,
}

/// The `<clusters>` block of a device type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceClusters {
    pub lock_others: Option<bool>,
    pub includes: Vec<ClusterInclude>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

/// `<include cluster="..">` inside a device type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInclude {
    pub cluster: String,
    pub client: Option<bool>,
    pub server: Option<bool>,
    pub client_locked: Option<bool>,
    pub server_locked: Option<bool>,
    /// `<requireAttribute>` texts
    pub require_attributes: Vec<String>,
    /// `<requireCommand>` texts
    pub require_commands: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

// --- Cluster Extension ---

/// Represents `<clusterExtension code="..">`, the manufacturer additions to
/// an existing cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterExtension {
    pub code: HexValue,
    pub attributes: Vec<Attribute>,
    pub commands: Vec<Command>,
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_attributes: Vec<(String, Option<Value>)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_children: Vec<Element>,
}

impl ClusterExtension {
    /// Views the extension as a cluster so it can be selected into a snapshot.
    /// Only the code and the three collections are carried over.
    pub fn to_cluster(&self) -> Cluster {
        Cluster {
            code: self.code.clone(),
            attributes: self.attributes.clone(),
            commands: self.commands.clone(),
            events: self.events.clone(),
            ..Default::default()
        }
    }
}
