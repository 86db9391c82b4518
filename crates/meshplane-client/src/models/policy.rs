//! Access policy models.

use serde::{Deserialize, Serialize};

/// An access policy as held by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Opaque policy identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    /// Posture check ids evaluated on the source peers.
    #[serde(default)]
    pub source_posture_checks: Vec<String>,
    /// The policy's rules. The service currently stores exactly one rule
    /// per policy but models a list on the wire.
    #[serde(default)]
    pub rules: Vec<PolicyRule>,
}

/// A single traffic rule inside a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRule {
    /// Rule identifier; assigned by the service on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    pub action: RuleAction,
    pub bidirectional: bool,
    pub protocol: RuleProtocol,
    /// Single ports, as decimal strings.
    #[serde(default)]
    pub ports: Vec<String>,
    /// Inclusive port ranges; mutually exclusive with `ports` upstream.
    #[serde(default)]
    pub port_ranges: Vec<PortRange>,
    /// Source group ids.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Destination group ids.
    #[serde(default)]
    pub destinations: Vec<String>,
    /// Source network resource, alternative to source groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_resource: Option<ResourceRef>,
    /// Destination network resource, alternative to destination groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_resource: Option<ResourceRef>,
}

/// What a matching rule does with the traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Accept,
    Drop,
}

/// Protocol a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleProtocol {
    All,
    Tcp,
    Udp,
    Icmp,
}

/// An inclusive port range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

/// Reference to a network resource used as a rule endpoint.
///
/// Opaque to the merge: a desired reference replaces the remote one
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

/// Kind of address a network resource describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Host,
    Subnet,
    Domain,
}

/// Create/update payload for a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(default)]
    pub source_posture_checks: Vec<String>,
    pub rules: Vec<PolicyRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> PolicyRule {
        PolicyRule {
            id: Some("r1".to_string()),
            name: "allow-ssh".to_string(),
            description: None,
            enabled: true,
            action: RuleAction::Accept,
            bidirectional: false,
            protocol: RuleProtocol::Tcp,
            ports: vec!["22".to_string()],
            port_ranges: vec![],
            sources: vec!["g-dev".to_string()],
            destinations: vec!["g-servers".to_string()],
            source_resource: None,
            destination_resource: None,
        }
    }

    #[test]
    fn test_action_and_protocol_wire_format() {
        assert_eq!(serde_json::to_string(&RuleAction::Accept).unwrap(), "\"accept\"");
        assert_eq!(serde_json::to_string(&RuleProtocol::All).unwrap(), "\"all\"");
        let parsed: RuleProtocol = serde_json::from_str("\"icmp\"").unwrap();
        assert_eq!(parsed, RuleProtocol::Icmp);
    }

    #[test]
    fn test_resource_ref_type_field() {
        let reference = ResourceRef {
            id: "res-1".to_string(),
            kind: ResourceKind::Subnet,
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains("\"type\":\"subnet\""));
    }

    #[test]
    fn test_rule_roundtrip() {
        let json = serde_json::to_string(&rule()).unwrap();
        let parsed: PolicyRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule());
    }
}
