//! DNS settings and nameserver group models.

use serde::{Deserialize, Serialize};

/// Account-wide DNS settings singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsSettings {
    /// Groups whose peers have DNS management disabled.
    #[serde(default)]
    pub disabled_management_groups: Vec<String>,
}

/// A nameserver group as held by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameserverGroup {
    /// Opaque nameserver group identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The upstream nameservers, replaced wholesale on update.
    pub nameservers: Vec<Nameserver>,
    pub enabled: bool,
    /// Distribution group ids.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Whether this group resolves all domains.
    pub primary: bool,
    /// Match domains; empty when primary.
    #[serde(default)]
    pub domains: Vec<String>,
    /// Whether match domains are also used as search domains.
    pub search_domains_enabled: bool,
}

/// A single upstream nameserver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameserver {
    pub ip: String,
    pub ns_type: NameserverType,
    pub port: u16,
}

/// Transport the nameserver speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameserverType {
    Udp,
    Tcp,
}

/// Update payload for the DNS settings singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsSettingsRequest {
    #[serde(default)]
    pub disabled_management_groups: Vec<String>,
}

/// Create/update payload for a nameserver group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameserverGroupRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub nameservers: Vec<Nameserver>,
    pub enabled: bool,
    #[serde(default)]
    pub groups: Vec<String>,
    pub primary: bool,
    #[serde(default)]
    pub domains: Vec<String>,
    pub search_domains_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nameserver_roundtrip() {
        let ns = Nameserver {
            ip: "8.8.8.8".to_string(),
            ns_type: NameserverType::Udp,
            port: 53,
        };
        let json = serde_json::to_string(&ns).unwrap();
        assert!(json.contains("\"ns_type\":\"udp\""));
        let parsed: Nameserver = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ns);
    }

    #[test]
    fn test_dns_settings_default_empty() {
        let settings: DnsSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.disabled_management_groups.is_empty());
    }
}
