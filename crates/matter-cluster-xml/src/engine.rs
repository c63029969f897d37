// crates/matter-cluster-xml/src/engine.rs

//! The snapshot pair and the extension diff.
//!
//! [`ClusterEngine`] keeps two snapshots of a loaded document: Base, the
//! document as loaded, and Current, the document as edited. The diff queries
//! compare them by name to find what the manufacturer added, and
//! [`ClusterEngine::get_serialized_cluster_extension`] exports only that
//! delta.

mod diff;
mod observer;

pub use observer::{InstanceObserver, LoggingObserver, NoOpObserver};

use crate::builder::save_configurator_to_string;
use crate::error::XmlError;
use crate::hex::HexValue;
use crate::parser::parse_configurator;
use crate::types::{
    Attribute, Cluster, ClusterExtension, Command, Configurator, DeviceType, EnumType, Event,
    StructType,
};
use diff::{new_by_name, remove_by_name, same_device_type, upsert_by_name};
use log::{debug, error, info, warn};

/// Lifecycle of a [`ClusterEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Nothing loaded yet, or the engine was reset.
    #[default]
    Empty,
    /// A document was loaded; no cluster selected yet.
    Loaded,
    /// A cluster was selected and Current is being edited.
    Initialized,
}

/// Holds the Base and Current snapshots of one configurator document.
///
/// The engine is single-threaded; every mutation takes `&mut self`. A
/// multi-threaded host wraps the whole engine in one `Mutex`.
#[derive(Default)]
pub struct ClusterEngine {
    current: Configurator,
    base: Configurator,
    /// The document as parsed by the last successful load.
    loaded: Configurator,
    file_name: Option<String>,
    content: Option<String>,
    is_extension: bool,
    state: EngineState,
    /// Set by `initialize`, cleared by `commit_base`.
    base_sync_pending: bool,
    observers: Vec<Box<dyn InstanceObserver>>,
}

impl ClusterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer that is called on every change of Current.
    pub fn add_observer<O: InstanceObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    // --- Accessors ---

    pub fn current(&self) -> &Configurator {
        &self.current
    }

    pub fn base(&self) -> &Configurator {
        &self.base
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_extension(&self) -> bool {
        self.is_extension
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    // --- Loading ---

    /// True when `xml` parses and holds more than one `<cluster>`, meaning
    /// the host has to ask which one to edit.
    pub fn is_multiple_cluster(xml: &str) -> bool {
        match parse_configurator(xml) {
            Ok(doc) => doc.clusters.len() > 1,
            Err(e) => {
                debug!("Not a multi-cluster document: {}", e);
                false
            }
        }
    }

    /// The clusters a host can offer for selection. For an extension
    /// document these are the extensions viewed as clusters.
    pub fn cluster_choices(xml: &str) -> Result<Vec<Cluster>, XmlError> {
        let doc = parse_configurator(xml)?;
        if doc.clusters.is_empty() {
            Ok(doc
                .cluster_extensions
                .iter()
                .map(ClusterExtension::to_cluster)
                .collect())
        } else {
            Ok(doc.clusters)
        }
    }

    /// Loads a cluster document into both snapshots.
    ///
    /// Returns `false` and leaves the engine untouched if the text does not
    /// parse or holds neither a `<cluster>` nor a `<deviceType>`.
    pub fn load(&mut self, file_name: &str, xml: &str) -> bool {
        self.try_load(file_name, xml, false)
    }

    /// Loads an extension document into both snapshots.
    ///
    /// Same contract as [`load`](Self::load), but the document must hold a
    /// `<clusterExtension>` or a `<deviceType>`.
    pub fn load_extension(&mut self, file_name: &str, xml: &str) -> bool {
        self.try_load(file_name, xml, true)
    }

    fn try_load(&mut self, file_name: &str, xml: &str, is_extension: bool) -> bool {
        match parse_loadable(xml, is_extension) {
            Ok(doc) => {
                info!(
                    "Loaded '{}': {} cluster(s), {} extension(s), {} device type(s)",
                    file_name,
                    doc.clusters.len(),
                    doc.cluster_extensions.len(),
                    doc.device_types.len()
                );
                self.accept(file_name, xml, doc, is_extension);
                true
            }
            Err(e) => {
                error!("Failed to load '{}': {}", file_name, e);
                false
            }
        }
    }

    fn accept(&mut self, file_name: &str, xml: &str, doc: Configurator, is_extension: bool) {
        self.current = doc.clone();
        self.base = doc.clone();
        self.loaded = doc;
        self.file_name = Some(file_name.to_string());
        self.content = Some(xml.to_string());
        self.is_extension = is_extension;
        self.state = EngineState::Loaded;
        self.base_sync_pending = false;
    }

    // --- Two-phase initialization ---

    /// Phase one: selects the cluster to edit and notifies observers.
    ///
    /// Current becomes the loaded document's enums, structs and device types
    /// plus `selected`. Observers see the new Current against the old Base.
    /// Base is only synced by a later [`commit_base`](Self::commit_base).
    pub fn initialize(&mut self, selected: Option<Cluster>) {
        if self.state == EngineState::Empty {
            warn!("initialize called before a document was loaded");
            return;
        }

        self.current = Configurator {
            domain: self.loaded.domain.clone(),
            enums: self.loaded.enums.clone(),
            structs: self.loaded.structs.clone(),
            clusters: selected.into_iter().collect(),
            device_types: self.loaded.device_types.clone(),
            cluster_extensions: Vec::new(),
            other: self.loaded.other.clone(),
        };
        self.state = EngineState::Initialized;
        self.base_sync_pending = true;

        debug!(
            "Initialized with cluster {:?}",
            self.current.clusters.first().map(|c| c.code.as_str())
        );
        self.notify();
    }

    /// Phase two: copies Current into Base if `initialize` left a sync
    /// pending. Returns whether a copy happened.
    pub fn commit_base(&mut self) -> bool {
        if !self.base_sync_pending {
            return false;
        }
        self.base = self.current.clone();
        self.base_sync_pending = false;
        true
    }

    // --- Diff ---

    /// The Base counterpart of Current's selected cluster, matched by code.
    /// Only Base's `<cluster>` elements count; a freshly loaded extension has
    /// none, so everything it holds is new until `commit_base`.
    fn base_cluster(&self, code: &HexValue) -> Option<&Cluster> {
        self.base.cluster_by_code(code)
    }

    /// Runs `pick` on Current's selected cluster and its Base counterpart.
    fn new_items<T, F>(&self, pick: F) -> Vec<T>
    where
        T: diff::Named + Clone,
        F: Fn(&Cluster) -> &[T],
    {
        let Some(current) = self.current.clusters.first() else {
            return Vec::new();
        };
        match self.base_cluster(&current.code) {
            Some(base) => new_by_name(pick(current), pick(base)),
            None => pick(current).to_vec(),
        }
    }

    /// Attributes of the selected cluster whose name is not in Base.
    pub fn get_new_attributes(&self) -> Vec<Attribute> {
        self.new_items(|c| c.attributes.as_slice())
    }

    /// Commands of the selected cluster whose name is not in Base.
    pub fn get_new_commands(&self) -> Vec<Command> {
        self.new_items(|c| c.commands.as_slice())
    }

    /// Events of the selected cluster whose name is not in Base.
    pub fn get_new_events(&self) -> Vec<Event> {
        self.new_items(|c| c.events.as_slice())
    }

    /// Current's first device type, unless Base's first device type has the
    /// same name and type name.
    pub fn get_new_device_type(&self) -> Option<DeviceType> {
        let current = self.current.device_types.first()?;
        match self.base.device_types.first() {
            Some(base) if same_device_type(current, base) => None,
            _ => Some(current.clone()),
        }
    }

    // --- Export ---

    /// The full Current document, or an empty string if Current is empty.
    pub fn get_serialized_cluster(&self) -> String {
        if self.current.is_empty() {
            return String::new();
        }
        self.serialize(&self.current)
    }

    /// A minimal document holding only what Current adds over Base: one
    /// `<clusterExtension>` with the new attributes, commands and events,
    /// and the new device type. Empty string when there is no delta.
    pub fn get_serialized_cluster_extension(&self) -> String {
        let attributes = self.get_new_attributes();
        let commands = self.get_new_commands();
        let events = self.get_new_events();
        let device_type = self.get_new_device_type();

        let mut delta = Configurator::default();
        if !attributes.is_empty() || !commands.is_empty() || !events.is_empty() {
            if let Some(cluster) = self.current.clusters.first() {
                delta.cluster_extensions.push(ClusterExtension {
                    code: cluster.code.clone(),
                    attributes,
                    commands,
                    events,
                    ..Default::default()
                });
            }
        }
        delta.device_types.extend(device_type);

        if delta.is_empty() {
            debug!("No extension delta between Base and Current");
            return String::new();
        }
        self.serialize(&delta)
    }

    fn serialize(&self, doc: &Configurator) -> String {
        match save_configurator_to_string(doc) {
            Ok(xml) => {
                info!("Exported document ({} bytes)", xml.len());
                xml
            }
            Err(e) => {
                error!("Failed to serialize document: {}", e);
                String::new()
            }
        }
    }

    // --- Setters (Current only) ---

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.instance_changed(&self.current, &self.base);
        }
    }

    /// The selected cluster of Current, created empty if there is none.
    fn selected_cluster_mut(&mut self) -> &mut Cluster {
        if self.current.clusters.is_empty() {
            self.current.clusters.push(Cluster::default());
        }
        &mut self.current.clusters[0]
    }

    /// Updates the identifying fields of the selected cluster.
    pub fn set_cluster_info(
        &mut self,
        name: &str,
        code: HexValue,
        define: Option<String>,
        domain: Option<String>,
        description: Option<String>,
    ) {
        let cluster = self.selected_cluster_mut();
        cluster.name = name.to_string();
        cluster.code = code;
        cluster.define = define;
        cluster.domain = domain;
        cluster.description = description;
        self.notify();
    }

    pub fn upsert_attribute(&mut self, attribute: Attribute) {
        upsert_by_name(&mut self.selected_cluster_mut().attributes, attribute);
        self.notify();
    }

    /// Returns whether an attribute with that name existed.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let removed = match self.current.clusters.first_mut() {
            Some(cluster) => remove_by_name(&mut cluster.attributes, name),
            None => false,
        };
        self.notify();
        removed
    }

    pub fn upsert_command(&mut self, command: Command) {
        upsert_by_name(&mut self.selected_cluster_mut().commands, command);
        self.notify();
    }

    pub fn remove_command(&mut self, name: &str) -> bool {
        let removed = match self.current.clusters.first_mut() {
            Some(cluster) => remove_by_name(&mut cluster.commands, name),
            None => false,
        };
        self.notify();
        removed
    }

    pub fn upsert_event(&mut self, event: Event) {
        upsert_by_name(&mut self.selected_cluster_mut().events, event);
        self.notify();
    }

    pub fn remove_event(&mut self, name: &str) -> bool {
        let removed = match self.current.clusters.first_mut() {
            Some(cluster) => remove_by_name(&mut cluster.events, name),
            None => false,
        };
        self.notify();
        removed
    }

    /// Replaces Current's device types with `device_type`, or clears them.
    pub fn set_device_type(&mut self, device_type: Option<DeviceType>) {
        self.current.device_types = device_type.into_iter().collect();
        self.notify();
    }

    pub fn upsert_enum(&mut self, enum_type: EnumType) {
        upsert_by_name(&mut self.current.enums, enum_type);
        self.notify();
    }

    pub fn upsert_struct(&mut self, struct_type: StructType) {
        upsert_by_name(&mut self.current.structs, struct_type);
        self.notify();
    }

    /// Drops both snapshots and the load record. Observers stay registered.
    pub fn reset(&mut self) {
        self.current = Configurator::default();
        self.base = Configurator::default();
        self.loaded = Configurator::default();
        self.file_name = None;
        self.content = None;
        self.is_extension = false;
        self.state = EngineState::Empty;
        self.base_sync_pending = false;
        self.notify();
    }
}

/// Parses a document and checks it holds something to edit.
fn parse_loadable(xml: &str, is_extension: bool) -> Result<Configurator, XmlError> {
    let doc = parse_configurator(xml)?;
    let (has_clusters, element) = if is_extension {
        (
            !doc.cluster_extensions.is_empty(),
            "clusterExtension or deviceType",
        )
    } else {
        (!doc.clusters.is_empty(), "cluster or deviceType")
    };
    if !has_clusters && doc.device_types.is_empty() {
        return Err(XmlError::MissingElement { element });
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TWO_CLUSTERS: &str = r#"<?xml version="1.0"?>
<configurator>
  <domain name="CHIP"/>
  <enum name="StartUpOnOffEnum" type="enum8">
    <cluster code="0x0006"/>
    <item name="Off" value="0x00"/>
  </enum>
  <cluster>
    <domain>General</domain>
    <name>On/Off</name>
    <code>0x0006</code>
    <define>ON_OFF_CLUSTER</define>
    <attribute side="server" code="0x0000" define="ON_OFF" type="boolean" writable="false">OnOff</attribute>
    <attribute side="server" code="0x4000" define="GLOBAL_SCENE_CONTROL" type="boolean" optional="true">GlobalSceneControl</attribute>
    <command source="client" code="0x00" name="Off" optional="false"/>
  </cluster>
  <cluster>
    <domain>General</domain>
    <name>Level Control</name>
    <code>0x0008</code>
  </cluster>
  <deviceType>
    <name>MA-onofflight</name>
    <typeName>On/Off Light</typeName>
  </deviceType>
</configurator>"#;

    fn attr(name: &str, code: u64) -> Attribute {
        Attribute {
            name: name.into(),
            code: HexValue::from_number(code),
            side: Some("server".into()),
            ..Default::default()
        }
    }

    fn loaded_engine() -> ClusterEngine {
        let mut engine = ClusterEngine::new();
        assert!(engine.load("onoff.xml", TWO_CLUSTERS));
        engine
    }

    fn select_first(engine: &mut ClusterEngine) {
        let first = engine.base().clusters[0].clone();
        engine.initialize(Some(first));
        assert!(engine.commit_base());
    }

    struct Recorder(Rc<RefCell<Vec<(usize, usize)>>>);
    impl InstanceObserver for Recorder {
        fn instance_changed(&mut self, current: &Configurator, base: &Configurator) {
            self.0
                .borrow_mut()
                .push((current.clusters.len(), base.clusters.len()));
        }
    }

    #[test]
    fn test_load_sets_both_snapshots() {
        let engine = loaded_engine();
        assert_eq!(engine.state(), EngineState::Loaded);
        assert_eq!(engine.file_name(), Some("onoff.xml"));
        assert_eq!(engine.content(), Some(TWO_CLUSTERS));
        assert!(!engine.is_extension());
        assert_eq!(engine.current(), engine.base());
        assert_eq!(engine.current().clusters.len(), 2);
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let mut engine = loaded_engine();
        assert!(!engine.load("enums.xml", r#"<configurator><enum name="E"/></configurator>"#));
        assert!(!engine.load("broken.xml", "<configurator><cluster>"));
        assert!(!engine.load_extension(
            "plain.xml",
            "<configurator><cluster><name>X</name></cluster></configurator>"
        ));

        assert_eq!(engine.file_name(), Some("onoff.xml"));
        assert_eq!(engine.content(), Some(TWO_CLUSTERS));
        assert_eq!(engine.state(), EngineState::Loaded);
        assert_eq!(engine.current().clusters.len(), 2);
    }

    #[test]
    fn test_parse_loadable_names_the_missing_element() {
        let result = parse_loadable("<configurator><cluster/></configurator>", true);
        assert!(matches!(
            result,
            Err(XmlError::MissingElement { element }) if element.starts_with("clusterExtension")
        ));
        assert!(parse_loadable("<configurator><deviceType/></configurator>", true).is_ok());
    }

    #[test]
    fn test_is_multiple_cluster_and_choices() {
        assert!(ClusterEngine::is_multiple_cluster(TWO_CLUSTERS));
        assert!(!ClusterEngine::is_multiple_cluster("<configurator><cluster/></configurator>"));
        assert!(!ClusterEngine::is_multiple_cluster("not xml <"));

        let choices = ClusterEngine::cluster_choices(TWO_CLUSTERS).unwrap();
        let names: Vec<_> = choices.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["On/Off", "Level Control"]);
    }

    #[test]
    fn test_initialize_carries_siblings_and_notifies_before_commit() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = loaded_engine();
        engine.add_observer(Recorder(log.clone()));

        let selected = engine.base().clusters[1].clone();
        engine.initialize(Some(selected));

        // Observer ran against the old Base (two clusters).
        assert_eq!(*log.borrow(), vec![(1, 2)]);
        assert_eq!(engine.state(), EngineState::Initialized);
        assert_eq!(engine.current().clusters[0].name, "Level Control");
        assert_eq!(engine.current().enums.len(), 1);
        assert_eq!(engine.current().device_types.len(), 1);
        assert_eq!(engine.base().clusters.len(), 2);

        assert!(engine.commit_base());
        assert_eq!(engine.base(), engine.current());
        assert!(!engine.commit_base());
    }

    #[test]
    fn test_initialize_without_document_is_ignored() {
        let mut engine = ClusterEngine::new();
        engine.initialize(None);
        assert_eq!(engine.state(), EngineState::Empty);
        assert!(!engine.commit_base());
    }

    #[test]
    fn test_new_attributes_with_empty_base() {
        let mut engine = ClusterEngine::new();
        assert!(engine.load(
            "bare.xml",
            "<configurator><cluster><name>X</name><code>0xfc01</code></cluster></configurator>"
        ));
        select_first(&mut engine);

        let added = vec![attr("A", 0), attr("B", 1), attr("C", 2)];
        for a in &added {
            engine.upsert_attribute(a.clone());
        }
        // Base has no attribute collection at all.
        assert!(engine.base().clusters[0].attributes.is_empty());
        assert_eq!(engine.get_new_attributes(), added);
    }

    #[test]
    fn test_new_attributes_partial_overlap() {
        let mut engine = loaded_engine();
        select_first(&mut engine);
        engine.upsert_attribute(attr("OnTime", 0x4001));

        let new = engine.get_new_attributes();
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].name, "OnTime");
        assert!(engine.get_new_commands().is_empty());
        assert!(engine.get_new_events().is_empty());
    }

    #[test]
    fn test_missing_base_cluster_makes_everything_new() {
        let mut engine = loaded_engine();
        select_first(&mut engine);
        engine.set_cluster_info("Custom", HexValue::new("0xfc10"), None, None, None);
        assert_eq!(engine.get_new_attributes().len(), 2);
        assert_eq!(engine.get_new_commands().len(), 1);
    }

    #[test]
    fn test_fresh_extension_exports_everything() {
        const EXTENSION: &str = r#"<configurator>
  <clusterExtension code="0x0006">
    <attribute side="server" code="0xfff10000" type="int16u">MfgTime</attribute>
    <command source="client" code="0xfff10000" name="MfgOn"/>
  </clusterExtension>
</configurator>"#;
        let mut engine = ClusterEngine::new();
        assert!(engine.load_extension("ext.xml", EXTENSION));
        let choice = ClusterEngine::cluster_choices(EXTENSION).unwrap().remove(0);
        engine.initialize(Some(choice));

        // Base holds only the extension, which is not a cluster to diff against.
        assert_eq!(engine.get_new_attributes().len(), 1);
        assert_eq!(engine.get_new_commands().len(), 1);
        let doc = parse_configurator(&engine.get_serialized_cluster_extension()).unwrap();
        assert_eq!(doc.cluster_extensions[0].code.as_str(), "0x0006");
        assert_eq!(doc.cluster_extensions[0].attributes[0].name, "MfgTime");

        assert!(engine.commit_base());
        assert_eq!(engine.get_serialized_cluster_extension(), "");
    }

    #[test]
    fn test_identical_snapshots_have_no_extension() {
        let mut engine = loaded_engine();
        select_first(&mut engine);
        assert_eq!(engine.get_new_device_type(), None);
        assert_eq!(engine.get_serialized_cluster_extension(), "");
    }

    #[test]
    fn test_extension_holds_only_the_delta() {
        let mut engine = loaded_engine();
        select_first(&mut engine);
        engine.upsert_attribute(attr("OnTime", 0x4001));
        engine.upsert_command(Command {
            name: "OffWithEffect".into(),
            code: HexValue::from_number(0x40),
            source: Some("client".into()),
            ..Default::default()
        });

        let xml = engine.get_serialized_cluster_extension();
        let doc = parse_configurator(&xml).unwrap();
        assert!(doc.clusters.is_empty());
        assert!(doc.device_types.is_empty());
        assert_eq!(doc.cluster_extensions.len(), 1);
        let ext = &doc.cluster_extensions[0];
        assert_eq!(ext.code.as_str(), "0x0006");
        assert_eq!(ext.attributes.len(), 1);
        assert_eq!(ext.attributes[0].name, "OnTime");
        assert_eq!(ext.commands[0].name, "OffWithEffect");
        assert!(ext.events.is_empty());
    }

    #[test]
    fn test_new_device_type_is_shallow() {
        let mut engine = loaded_engine();
        select_first(&mut engine);

        let mut same = engine.current().device_types[0].clone();
        same.class = Some("Simple".into());
        engine.set_device_type(Some(same));
        assert_eq!(engine.get_new_device_type(), None);

        let renamed = DeviceType {
            name: "MA-dimmablelight".into(),
            type_name: Some("Dimmable Light".into()),
            ..Default::default()
        };
        engine.set_device_type(Some(renamed.clone()));
        assert_eq!(engine.get_new_device_type(), Some(renamed));

        let xml = engine.get_serialized_cluster_extension();
        let doc = parse_configurator(&xml).unwrap();
        assert!(doc.cluster_extensions.is_empty());
        assert_eq!(doc.device_types[0].name, "MA-dimmablelight");
    }

    #[test]
    fn test_setters_notify_and_upsert_in_place() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut engine = loaded_engine();
        select_first(&mut engine);
        engine.add_observer(Recorder(log.clone()));
        engine.add_observer(NoOpObserver);
        engine.add_observer(LoggingObserver);

        let mut on_off = engine.current().clusters[0].attributes[0].clone();
        on_off.reportable = Some(true);
        engine.upsert_attribute(on_off);
        assert!(engine.remove_attribute("GlobalSceneControl"));
        assert!(!engine.remove_event("Missing"));
        engine.upsert_enum(EnumType {
            name: "StartUpOnOffEnum".into(),
            ..Default::default()
        });
        engine.upsert_struct(StructType {
            name: "Pair".into(),
            ..Default::default()
        });

        assert_eq!(log.borrow().len(), 5);
        let cluster = &engine.current().clusters[0];
        assert_eq!(cluster.attributes.len(), 1);
        assert_eq!(cluster.attributes[0].reportable, Some(true));
        assert_eq!(engine.current().enums.len(), 1);
        assert!(engine.current().enums[0].items.is_empty());
        assert_eq!(engine.current().structs.len(), 1);
        // Base is never touched by setters.
        assert_eq!(engine.base().clusters[0].attributes.len(), 2);
    }

    #[test]
    fn test_serialized_cluster() {
        let mut engine = ClusterEngine::new();
        assert_eq!(engine.get_serialized_cluster(), "");

        assert!(engine.load("onoff.xml", TWO_CLUSTERS));
        select_first(&mut engine);
        let doc = parse_configurator(&engine.get_serialized_cluster()).unwrap();
        assert_eq!(doc.clusters.len(), 1);
        assert_eq!(doc.clusters[0].name, "On/Off");
        assert_eq!(doc.enums.len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut engine = loaded_engine();
        engine.reset();
        assert_eq!(engine.state(), EngineState::Empty);
        assert_eq!(engine.file_name(), None);
        assert!(engine.current().is_empty());
        assert!(engine.base().is_empty());
    }
}
