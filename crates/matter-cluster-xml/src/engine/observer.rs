// crates/matter-cluster-xml/src/engine/observer.rs

use crate::types::Configurator;
use log::info;

/// Receives the snapshot pair whenever the engine's Current snapshot changes.
///
/// During [`initialize`](super::ClusterEngine::initialize) observers run
/// before Base is synced, so `base` is still the previous snapshot.
pub trait InstanceObserver {
    fn instance_changed(&mut self, current: &Configurator, base: &Configurator);
}

/// An observer that does nothing.
pub struct NoOpObserver;
impl InstanceObserver for NoOpObserver {
    fn instance_changed(&mut self, _current: &Configurator, _base: &Configurator) {}
}

/// An observer that logs a summary of every change using the `log` facade.
pub struct LoggingObserver;
impl InstanceObserver for LoggingObserver {
    fn instance_changed(&mut self, current: &Configurator, base: &Configurator) {
        let name = current
            .clusters
            .first()
            .map(|c| c.name.as_str())
            .unwrap_or("<none>");
        info!(
            "[Instance]: cluster '{}' changed ({} cluster(s), {} device type(s); base has {} cluster(s))",
            name,
            current.clusters.len(),
            current.device_types.len(),
            base.clusters.len()
        );
    }
}
