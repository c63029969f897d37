// crates/matter-cluster-xml/src/resolver.rs

//! Maps the raw element tree onto the typed document in [`crate::types`].
//!
//! The resolvers work from explicit per-entity field lists: every entity
//! starts as its `Default` and only known attributes and children are merged
//! in. Anything else is logged at `debug` level and kept verbatim in the
//! entity's extra attributes and children, so a full export writes it back.

mod cluster;
mod data_type;
mod device_type;
mod utils;

use crate::error::XmlError;
use crate::model::Element;
use crate::types::{Configurator, Domain};
use log::debug;

/// Name of the root element every configurator document must use.
pub(crate) const ROOT_ELEMENT: &str = "configurator";

/// Resolves a parsed `<configurator>` element into a [`Configurator`].
///
/// # Errors
/// Returns [`XmlError::UnexpectedRoot`] when the root element has another name.
pub(crate) fn resolve_configurator(root: &Element) -> Result<Configurator, XmlError> {
    if root.name != ROOT_ELEMENT {
        return Err(XmlError::UnexpectedRoot {
            found: root.name.clone(),
        });
    }

    let mut configurator = Configurator::default();

    for child in &root.children {
        match child.name.as_str() {
            "domain" => {
                configurator.domain = Some(Domain {
                    name: child
                        .attr("name")
                        .or(child.text.as_ref())
                        .map(utils::text)
                        .unwrap_or_default(),
                })
            }
            "enum" => configurator.enums.push(data_type::resolve_enum(child)),
            "struct" => configurator.structs.push(data_type::resolve_struct(child)),
            "cluster" => configurator.clusters.push(cluster::resolve_cluster(child)),
            "clusterExtension" => configurator
                .cluster_extensions
                .push(cluster::resolve_cluster_extension(child)),
            "deviceType" => configurator
                .device_types
                .push(device_type::resolve_device_type(child)),
            _ => configurator.other.push(utils::extra_child(&root.name, child)),
        }
    }

    debug!(
        "Resolved configurator: {} cluster(s), {} extension(s), {} device type(s), {} enum(s), {} struct(s)",
        configurator.clusters.len(),
        configurator.cluster_extensions.len(),
        configurator.device_types.len(),
        configurator.enums.len(),
        configurator.structs.len()
    );

    Ok(configurator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_element_tree;

    #[test]
    fn test_rejects_foreign_root() {
        let root = parse_element_tree("<cluster><name>X</name></cluster>").unwrap();
        let result = resolve_configurator(&root);
        assert!(matches!(
            result,
            Err(XmlError::UnexpectedRoot { ref found }) if found == "cluster"
        ));
    }

    #[test]
    fn test_resolves_root_collections() {
        let root = parse_element_tree(
            r#"<configurator>
                 <domain name="CHIP"/>
                 <enum name="A" type="enum8"/>
                 <struct name="B"/>
                 <cluster><name>One</name><code>0x0001</code></cluster>
                 <cluster><name>Two</name><code>0x0002</code></cluster>
                 <deviceType><name>dev</name></deviceType>
                 <unknownThing/>
               </configurator>"#,
        )
        .unwrap();
        let configurator = resolve_configurator(&root).unwrap();

        assert_eq!(configurator.domain.unwrap().name, "CHIP");
        assert_eq!(configurator.enums.len(), 1);
        assert_eq!(configurator.structs.len(), 1);
        assert_eq!(configurator.clusters.len(), 2);
        assert_eq!(configurator.clusters[1].name, "Two");
        assert_eq!(configurator.device_types.len(), 1);
        assert!(configurator.cluster_extensions.is_empty());
        assert_eq!(configurator.other.len(), 1);
        assert_eq!(configurator.other[0].name, "unknownThing");
    }
}
