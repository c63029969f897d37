// src/lib.rs

#![doc = "Parses, diffs and serializes Matter cluster XML (configurator) files."]
#![doc = ""]
#![doc = "The crate reads the `<configurator>` documents used by Matter tooling into"]
#![doc = "typed structures, keeps a Base/Current snapshot pair while a cluster is"]
#![doc = "edited, and writes either the full document or a minimal extension holding"]
#![doc = "only the manufacturer additions."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `parse_configurator`: Parsing a configurator document into `Configurator`."]
#![doc = "- `save_configurator_to_string`: Serializing a `Configurator` back into XML."]
#![doc = "- `ClusterEngine`: Loading, selecting, editing and diffing a cluster."]

// --- Crate Modules ---

mod builder;
mod engine;
mod error;
mod format;
mod hex;
mod model;
mod parser;
mod resolver;
mod types;
mod value;
mod writer;

// --- Public API Re-exports ---

pub use builder::{
    build_cluster_extension_element, build_configurator_element, save_configurator_to_string,
    save_configurator_with_config,
};
pub use engine::{ClusterEngine, EngineState, InstanceObserver, LoggingObserver, NoOpObserver};
pub use error::XmlError;
pub use format::inline_text_nodes;
pub use hex::{HexValue, sanitize_hex_string};
pub use model::Element;
pub use parser::{parse_configurator, parse_element_tree};
pub use types::{
    Access, Argument, Attribute, Cluster, ClusterExtension, ClusterInclude, ClusterRef,
    ClusterSide, Command, Configurator, DeviceClusters, DeviceType, Domain, EditableHex, EnumItem,
    EnumType, Event, EventField, GlobalAttribute, StructField, StructType,
};
pub use value::{Value, encode_value, infer_value};
pub use writer::{WriterConfig, XML_DECLARATION, write_document};
