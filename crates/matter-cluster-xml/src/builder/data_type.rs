// crates/matter-cluster-xml/src/builder/data_type.rs

use super::{flag, hex, string};
use crate::model::Element;
use crate::types::{ClusterRef, EnumType, StructField, StructType};

pub(super) fn build_enum_element(enum_type: &EnumType) -> Element {
    Element::new("enum")
        .with_attr("name", string(Some(enum_type.name.as_str())))
        .with_attr("type", string(enum_type.type_name.as_deref()))
        .with_children(enum_type.clusters.iter().map(build_cluster_ref_element))
        .with_children(enum_type.items.iter().map(|item| {
            Element::new("item")
                .with_attr("name", string(Some(item.name.as_str())))
                .with_attr("value", item.value.clone())
                .with_extras(&item.extra_attributes, &item.extra_children)
        }))
        .with_extras(&enum_type.extra_attributes, &enum_type.extra_children)
}

pub(super) fn build_struct_element(struct_type: &StructType) -> Element {
    Element::new("struct")
        .with_attr("name", string(Some(struct_type.name.as_str())))
        .with_attr("isFabricScoped", flag(struct_type.is_fabric_scoped))
        .with_children(struct_type.clusters.iter().map(build_cluster_ref_element))
        .with_children(struct_type.items.iter().map(build_struct_field_element))
        .with_extras(&struct_type.extra_attributes, &struct_type.extra_children)
}

fn build_cluster_ref_element(cluster: &ClusterRef) -> Element {
    Element::new("cluster").with_attr("code", hex(&cluster.code))
}

fn build_struct_field_element(field: &StructField) -> Element {
    Element::new("item")
        .with_attr("fieldId", field.field_id.as_ref().and_then(hex))
        .with_attr("name", string(Some(field.name.as_str())))
        .with_attr("type", string(field.type_name.as_deref()))
        .with_attr("array", flag(field.array))
        .with_attr("optional", flag(field.optional))
        .with_attr("isNullable", flag(field.is_nullable))
        .with_attr("isFabricSensitive", flag(field.is_fabric_sensitive))
        .with_attr("minLength", field.min_length.clone())
        .with_attr("maxLength", field.max_length.clone())
        .with_extras(&field.extra_attributes, &field.extra_children)
}
