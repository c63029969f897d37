// crates/matter-cluster-xml/src/engine/diff.rs

//! Name-keyed set operations shared by the diff queries and the setters.

use crate::types::{Attribute, Command, DeviceType, EnumType, Event, StructType};
use std::collections::HashSet;

/// Entities that are identified by their `name` within a collection.
pub(crate) trait Named {
    fn name(&self) -> &str;
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

impl_named!(Attribute, Command, Event, EnumType, StructType, DeviceType);

/// Items of `current` whose name does not occur in `base`, in `current`
/// order. Repeated names in `current` are reported once.
pub(crate) fn new_by_name<T: Named + Clone>(current: &[T], base: &[T]) -> Vec<T> {
    let known: HashSet<&str> = base.iter().map(Named::name).collect();
    let mut seen = HashSet::new();
    current
        .iter()
        .filter(|item| !known.contains(item.name()) && seen.insert(item.name()))
        .cloned()
        .collect()
}

/// Replaces the item with the same name in place, or appends it.
pub(crate) fn upsert_by_name<T: Named>(items: &mut Vec<T>, item: T) {
    match items.iter_mut().find(|existing| existing.name() == item.name()) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

/// Removes every item with the given name. Returns whether anything was removed.
pub(crate) fn remove_by_name<T: Named>(items: &mut Vec<T>, name: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.name() != name);
    items.len() != before
}

/// Shallow identity: same `name` and `type_name`. Sub-fields such as the
/// device id or cluster includes are not compared.
pub(crate) fn same_device_type(a: &DeviceType, b: &DeviceType) -> bool {
    a.name == b.name && a.type_name == b.type_name
}
