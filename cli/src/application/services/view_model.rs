//! Projection of the catalog and live statuses into the service tree.
//!
//! Every call re-queries the engine; nothing is cached between calls.

use devsvc_common::{
    DetailNode, GroupNode, ServiceDefinition, ServiceNode, ServiceTree, ServiceType, TreeGroup,
    TreeService, ViewNode,
};

use crate::application::ports::{ContainerInspector, ImageStore};
use crate::application::services::status;
use crate::domain::Catalog;

/// One group per service type present in the catalog, in first-occurrence order.
#[must_use]
pub fn build_groups(catalog: &Catalog) -> Vec<GroupNode> {
    catalog
        .service_types()
        .into_iter()
        .map(|service_type| GroupNode {
            label: service_type.group_label().to_string(),
            service_type,
        })
        .collect()
}

/// Services of one type, each with a freshly resolved status.
pub async fn build_services(
    engine: &(impl ImageStore + ContainerInspector),
    catalog: &Catalog,
    service_type: ServiceType,
) -> Vec<ServiceNode> {
    let defs: Vec<&ServiceDefinition> = catalog.of_type(service_type).collect();
    let statuses = status::resolve_all(engine, defs.iter().copied()).await;
    defs.into_iter()
        .zip(statuses)
        .map(|(def, status)| ServiceNode {
            definition: def.clone(),
            status,
        })
        .collect()
}

/// Connection details of a service: port always, then username, password and
/// database when the definition carries them.
#[must_use]
pub fn build_details(node: &ServiceNode) -> Vec<DetailNode> {
    let def = &node.definition;
    let mut details = vec![detail("Port", def.port.to_string())];
    let optional = [
        ("Username", &def.username),
        ("Password", &def.password),
        ("Database", &def.database),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            details.push(detail(label, value.clone()));
        }
    }
    details
}

/// Children of `parent`, or the root groups when `parent` is `None`.
///
/// Detail nodes are leaves.
pub async fn children(
    engine: &(impl ImageStore + ContainerInspector),
    catalog: &Catalog,
    parent: Option<&ViewNode>,
) -> Vec<ViewNode> {
    match parent {
        None => into_nodes(build_groups(catalog)),
        Some(ViewNode::Group(group)) => {
            into_nodes(build_services(engine, catalog, group.service_type).await)
        }
        Some(ViewNode::Service(service)) => into_nodes(build_details(service)),
        Some(ViewNode::Detail(_)) => Vec::new(),
    }
}

/// The whole tree, fully expanded.
pub async fn build_tree(
    engine: &(impl ImageStore + ContainerInspector),
    catalog: &Catalog,
) -> ServiceTree {
    let mut groups = Vec::new();
    for group in build_groups(catalog) {
        let services = build_services(engine, catalog, group.service_type)
            .await
            .into_iter()
            .map(|node| TreeService {
                presentation: node.status.presentation(),
                description: node.description(),
                details: build_details(&node),
                node,
            })
            .collect();
        groups.push(TreeGroup { group, services });
    }
    ServiceTree { groups }
}

fn detail(label: &str, value: String) -> DetailNode {
    DetailNode {
        label: label.to_string(),
        value,
    }
}

fn into_nodes<T: Into<ViewNode>>(items: Vec<T>) -> Vec<ViewNode> {
    items.into_iter().map(Into::into).collect()
}
