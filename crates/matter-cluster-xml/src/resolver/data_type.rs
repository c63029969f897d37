// crates/matter-cluster-xml/src/resolver/data_type.rs

//! Resolves the root-level `<enum>` and `<struct>` definitions.

use super::utils::{extra_attribute, extra_child, flag, resolve_cluster_ref, text};
use crate::model::Element;
use crate::types::{EnumItem, EnumType, StructField, StructType};
use crate::value::Value;

pub(super) fn resolve_enum(el: &Element) -> EnumType {
    let mut enum_type = EnumType::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => enum_type.name = text(value),
            "type" => enum_type.type_name = Some(text(value)),
            other => enum_type.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    for child in &el.children {
        match child.name.as_str() {
            "cluster" => enum_type.clusters.push(resolve_cluster_ref(child)),
            "item" => enum_type.items.push(resolve_enum_item(child)),
            _ => enum_type.extra_children.push(extra_child(&el.name, child)),
        }
    }

    enum_type
}

fn resolve_enum_item(el: &Element) -> EnumItem {
    let mut item = EnumItem::default();
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => item.name = text(value),
            "value" => item.value = Some(value.clone()),
            other => item.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    item.extra_children = el.children.iter().map(|c| extra_child(&el.name, c)).collect();
    item
}

pub(super) fn resolve_struct(el: &Element) -> StructType {
    let mut struct_type = StructType::default();

    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "name" => struct_type.name = text(value),
            "isFabricScoped" => struct_type.is_fabric_scoped = flag(&el.name, key, value),
            other => struct_type.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }

    for child in &el.children {
        match child.name.as_str() {
            "cluster" => struct_type.clusters.push(resolve_cluster_ref(child)),
            "item" => struct_type.items.push(resolve_struct_field(child)),
            _ => struct_type.extra_children.push(extra_child(&el.name, child)),
        }
    }

    struct_type
}

fn resolve_struct_field(el: &Element) -> StructField {
    let mut field = StructField::default();
    for (key, value) in &el.attributes {
        let Some(value) = value else { continue };
        match key.as_str() {
            "fieldId" => field.field_id = Some(Value::to_hex(value)),
            "name" => field.name = text(value),
            "type" => field.type_name = Some(text(value)),
            "array" => field.array = flag(&el.name, key, value),
            "optional" => field.optional = flag(&el.name, key, value),
            "isNullable" => field.is_nullable = flag(&el.name, key, value),
            "isFabricSensitive" => field.is_fabric_sensitive = flag(&el.name, key, value),
            "minLength" => field.min_length = Some(value.clone()),
            "maxLength" => field.max_length = Some(value.clone()),
            other => field.extra_attributes.push(extra_attribute(&el.name, other, value)),
        }
    }
    field.extra_children = el.children.iter().map(|c| extra_child(&el.name, c)).collect();
    field
}
