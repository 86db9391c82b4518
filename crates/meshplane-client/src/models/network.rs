//! Network, network router, and network resource models.
//!
//! A network groups routers (the peers that forward its traffic) and
//! resources (the addresses reachable through it). Routers and resources
//! are addressed within their parent network.

use serde::{Deserialize, Serialize};

/// A routed network as held by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Opaque network identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ids of the network's routers.
    #[serde(default)]
    pub routers: Vec<String>,
    /// Ids of the network's resources.
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Create/update payload for a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A routing peer assignment inside a network.
///
/// Exactly one of `peer` and `peer_groups` is populated; the upstream
/// schema layer enforces the exclusivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRouter {
    /// Opaque router identifier.
    pub id: String,
    /// A single routing peer id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer: Option<String>,
    /// Groups whose peers act as routers.
    #[serde(default)]
    pub peer_groups: Vec<String>,
    /// Route metric; lower wins.
    pub metric: u32,
    pub masquerade: bool,
    pub enabled: bool,
}

/// Create/update payload for a network router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRouterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer: Option<String>,
    #[serde(default)]
    pub peer_groups: Vec<String>,
    pub metric: u32,
    pub masquerade: bool,
    pub enabled: bool,
}

/// An address reachable through a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkResource {
    /// Opaque resource identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Host IP, CIDR subnet, or domain.
    pub address: String,
    pub enabled: bool,
    /// Access control group ids.
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Create/update payload for a network resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkResourceRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub address: String,
    pub enabled: bool,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_with_peer_groups() {
        let router: NetworkRouter = serde_json::from_str(
            r#"{"id": "r1", "peer_groups": ["g1"], "metric": 100, "masquerade": true, "enabled": true}"#,
        )
        .unwrap();
        assert_eq!(router.peer, None);
        assert_eq!(router.peer_groups, vec!["g1".to_string()]);
    }

    #[test]
    fn test_router_request_omits_absent_peer() {
        let request = NetworkRouterRequest {
            peer: None,
            peer_groups: vec!["g1".to_string()],
            metric: 9999,
            masquerade: false,
            enabled: true,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("\"peer\""));
    }
}
