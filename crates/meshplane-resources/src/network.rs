//! Network, network router, and network resource reconciliation and
//! lookup. Routers and resources are addressed within their parent
//! network.

use serde::Deserialize;
use tracing::{debug, info};

use meshplane_client::models::{
    Network, NetworkRequest, NetworkResource, NetworkResourceRequest, NetworkRouter,
    NetworkRouterRequest,
};
use meshplane_client::NetworkApi;
use meshplane_core::{resolve_one, Desired, MatchOutcome, Reconcile, Selector};

use crate::error::{ResourceError, ResourceResult};

/// Desired configuration for a network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSpec {
    #[serde(default)]
    pub name: Desired<String>,
    #[serde(default)]
    pub description: Desired<Option<String>>,
}

impl Reconcile for NetworkSpec {
    type Remote = Network;
    type Request = NetworkRequest;

    fn merge(&self, remote: &Network) -> NetworkRequest {
        NetworkRequest {
            name: self.name.resolve(&remote.name),
            description: self.description.resolve(&remote.description),
        }
    }
}

/// Desired configuration for a network router.
///
/// `peer` and `peer_groups` are mutually exclusive upstream; the schema
/// layer enforces that before a spec reaches the merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkRouterSpec {
    #[serde(default)]
    pub peer: Desired<Option<String>>,
    #[serde(default)]
    pub peer_groups: Desired<Vec<String>>,
    #[serde(default)]
    pub metric: Desired<u32>,
    #[serde(default)]
    pub masquerade: Desired<bool>,
    #[serde(default)]
    pub enabled: Desired<bool>,
}

impl Reconcile for NetworkRouterSpec {
    type Remote = NetworkRouter;
    type Request = NetworkRouterRequest;

    fn merge(&self, remote: &NetworkRouter) -> NetworkRouterRequest {
        NetworkRouterRequest {
            peer: self.peer.resolve(&remote.peer),
            peer_groups: self.peer_groups.resolve(&remote.peer_groups),
            metric: self.metric.resolve(&remote.metric),
            masquerade: self.masquerade.resolve(&remote.masquerade),
            enabled: self.enabled.resolve(&remote.enabled),
        }
    }
}

/// Desired configuration for a network resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkResourceSpec {
    #[serde(default)]
    pub name: Desired<String>,
    #[serde(default)]
    pub description: Desired<Option<String>>,
    #[serde(default)]
    pub address: Desired<String>,
    #[serde(default)]
    pub enabled: Desired<bool>,
    #[serde(default)]
    pub groups: Desired<Vec<String>>,
}

impl Reconcile for NetworkResourceSpec {
    type Remote = NetworkResource;
    type Request = NetworkResourceRequest;

    fn merge(&self, remote: &NetworkResource) -> NetworkResourceRequest {
        NetworkResourceRequest {
            name: self.name.resolve(&remote.name),
            description: self.description.resolve(&remote.description),
            address: self.address.resolve(&remote.address),
            enabled: self.enabled.resolve(&remote.enabled),
            groups: self.groups.resolve(&remote.groups),
        }
    }
}

/// Optional criteria identifying a single network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
}

impl Selector<Network> for NetworkSelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn evaluate(&self, candidate: &Network) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
    }
}

/// Optional criteria identifying a single router within a network, by id
/// or by its routing peer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkRouterSelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub peer: Desired<String>,
}

impl Selector<NetworkRouter> for NetworkRouterSelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.peer.is_set()
    }

    fn evaluate(&self, candidate: &NetworkRouter) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar_opt(&self.peer, candidate.peer.as_ref())
    }
}

/// Create a network from its spec. `name` must be set.
pub async fn create_network(api: &impl NetworkApi, spec: &NetworkSpec) -> ResourceResult<Network> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;
    let request = NetworkRequest {
        name,
        description: spec.description.get().cloned().flatten(),
    };

    let created = api.create_network(request).await?;
    info!(network_id = %created.id, name = %created.name, "created network");
    Ok(created)
}

/// Merge the spec against the current remote state and push the result.
pub async fn apply_network(
    api: &impl NetworkApi,
    id: &str,
    spec: &NetworkSpec,
) -> ResourceResult<Network> {
    let remote = api.get_network(id).await?;
    let request = spec.merge(&remote);
    let updated = api.update_network(id, request).await?;
    info!(network_id = %id, "updated network");
    Ok(updated)
}

/// Delete a network by id.
pub async fn delete_network(api: &impl NetworkApi, id: &str) -> ResourceResult<()> {
    api.delete_network(id).await?;
    info!(network_id = %id, "deleted network");
    Ok(())
}

/// Locate exactly one network matching the selector.
pub async fn find_network(
    api: &impl NetworkApi,
    selector: &NetworkSelector,
) -> ResourceResult<Network> {
    let networks = api.list_networks().await?;
    debug!(candidates = networks.len(), "resolving network");
    let network = resolve_one(&networks, selector)?;
    Ok(network.clone())
}

/// Create a router in a network. Either `peer` or `peer_groups` must be
/// set; service defaults apply to the rest.
pub async fn create_network_router(
    api: &impl NetworkApi,
    network_id: &str,
    spec: &NetworkRouterSpec,
) -> ResourceResult<NetworkRouter> {
    if spec.peer.is_unset() && spec.peer_groups.is_unset() {
        return Err(ResourceError::missing_field("peer or peer_groups"));
    }

    let request = NetworkRouterRequest {
        peer: spec.peer.get().cloned().flatten(),
        peer_groups: spec.peer_groups.get().cloned().unwrap_or_default(),
        metric: spec.metric.get().copied().unwrap_or(9999),
        masquerade: spec.masquerade.get().copied().unwrap_or(true),
        enabled: spec.enabled.get().copied().unwrap_or(true),
    };

    let created = api.create_network_router(network_id, request).await?;
    info!(network_id = %network_id, router_id = %created.id, "created network router");
    Ok(created)
}

/// Merge the spec against the current remote router state and push the
/// result.
pub async fn apply_network_router(
    api: &impl NetworkApi,
    network_id: &str,
    router_id: &str,
    spec: &NetworkRouterSpec,
) -> ResourceResult<NetworkRouter> {
    let remote = api.get_network_router(network_id, router_id).await?;
    let request = spec.merge(&remote);
    let updated = api
        .update_network_router(network_id, router_id, request)
        .await?;
    info!(network_id = %network_id, router_id = %router_id, "updated network router");
    Ok(updated)
}

/// Delete a router from a network.
pub async fn delete_network_router(
    api: &impl NetworkApi,
    network_id: &str,
    router_id: &str,
) -> ResourceResult<()> {
    api.delete_network_router(network_id, router_id).await?;
    info!(network_id = %network_id, router_id = %router_id, "deleted network router");
    Ok(())
}

/// Locate exactly one router of a network matching the selector.
pub async fn find_network_router(
    api: &impl NetworkApi,
    network_id: &str,
    selector: &NetworkRouterSelector,
) -> ResourceResult<NetworkRouter> {
    let routers = api.list_network_routers(network_id).await?;
    debug!(
        network_id = %network_id,
        candidates = routers.len(),
        "resolving network router"
    );
    let router = resolve_one(&routers, selector)?;
    Ok(router.clone())
}

/// Create a resource in a network. `name`, `address`, and `groups` must
/// be set.
pub async fn create_network_resource(
    api: &impl NetworkApi,
    network_id: &str,
    spec: &NetworkResourceSpec,
) -> ResourceResult<NetworkResource> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;
    let address = spec
        .address
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("address"))?;
    let groups = spec
        .groups
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("groups"))?;

    let request = NetworkResourceRequest {
        name,
        description: spec.description.get().cloned().flatten(),
        address,
        enabled: spec.enabled.get().copied().unwrap_or(true),
        groups,
    };

    let created = api.create_network_resource(network_id, request).await?;
    info!(network_id = %network_id, resource_id = %created.id, "created network resource");
    Ok(created)
}

/// Merge the spec against the current remote resource state and push the
/// result.
pub async fn apply_network_resource(
    api: &impl NetworkApi,
    network_id: &str,
    resource_id: &str,
    spec: &NetworkResourceSpec,
) -> ResourceResult<NetworkResource> {
    let remote = api.get_network_resource(network_id, resource_id).await?;
    let request = spec.merge(&remote);
    let updated = api
        .update_network_resource(network_id, resource_id, request)
        .await?;
    info!(network_id = %network_id, resource_id = %resource_id, "updated network resource");
    Ok(updated)
}

/// Delete a resource from a network.
pub async fn delete_network_resource(
    api: &impl NetworkApi,
    network_id: &str,
    resource_id: &str,
) -> ResourceResult<()> {
    api.delete_network_resource(network_id, resource_id).await?;
    info!(network_id = %network_id, resource_id = %resource_id, "deleted network resource");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_router() -> NetworkRouter {
        NetworkRouter {
            id: "r1".to_string(),
            peer: Some("p1".to_string()),
            peer_groups: vec![],
            metric: 100,
            masquerade: true,
            enabled: true,
        }
    }

    #[test]
    fn test_router_merge_all_unset_reproduces_remote() {
        let request = NetworkRouterSpec::default().merge(&remote_router());
        assert_eq!(request.peer, Some("p1".to_string()));
        assert_eq!(request.metric, 100);
        assert!(request.masquerade);
    }

    #[test]
    fn test_router_merge_switches_peer_to_groups() {
        let spec = NetworkRouterSpec {
            peer: Desired::Set(None),
            peer_groups: Desired::Set(vec!["g-routers".to_string()]),
            ..NetworkRouterSpec::default()
        };
        let request = spec.merge(&remote_router());
        assert_eq!(request.peer, None);
        assert_eq!(request.peer_groups, vec!["g-routers".to_string()]);
    }

    #[test]
    fn test_router_selector_by_peer() {
        let selector = NetworkRouterSelector {
            peer: Desired::Set("p1".to_string()),
            ..NetworkRouterSelector::default()
        };
        assert!(selector.evaluate(&remote_router()).is_match());

        let groups_router = NetworkRouter {
            peer: None,
            ..remote_router()
        };
        // A peer criterion against a group-based router is a mismatch.
        assert!(!selector.evaluate(&groups_router).is_match());
    }

    #[test]
    fn test_network_merge_description() {
        let remote = Network {
            id: "n1".to_string(),
            name: "lab".to_string(),
            description: Some("lab network".to_string()),
            routers: vec![],
            resources: vec![],
        };
        let spec = NetworkSpec {
            description: Desired::Set(None),
            ..NetworkSpec::default()
        };
        let request = spec.merge(&remote);
        assert_eq!(request.name, "lab");
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_resource_merge_single_field() {
        let remote = NetworkResource {
            id: "res-1".to_string(),
            name: "intranet".to_string(),
            description: None,
            address: "10.0.0.0/24".to_string(),
            enabled: true,
            groups: vec!["g1".to_string()],
        };
        let spec = NetworkResourceSpec {
            enabled: Desired::Set(false),
            ..NetworkResourceSpec::default()
        };
        let request = spec.merge(&remote);
        assert!(!request.enabled);
        assert_eq!(request.address, "10.0.0.0/24");
        assert_eq!(request.groups, vec!["g1".to_string()]);
    }
}
