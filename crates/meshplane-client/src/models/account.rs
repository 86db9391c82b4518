//! Account and account settings models.

use serde::{Deserialize, Serialize};

/// An account as held by the management service.
///
/// Each access token is scoped to exactly one account; the list endpoint
/// returns a single element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account identifier.
    pub id: String,
    /// Domain the account was created under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// The account-wide settings object.
    pub settings: AccountSettings,
}

/// Account-wide settings.
///
/// Updates always push the full settings object; there is no field-level
/// patch on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    /// Whether peer sessions expire and must re-authenticate.
    pub peer_login_expiration_enabled: bool,
    /// Peer session lifetime in seconds.
    pub peer_login_expiration: i64,
    /// Whether inactive peers have their sessions expired.
    pub peer_inactivity_expiration_enabled: bool,
    /// Inactivity window in seconds.
    pub peer_inactivity_expiration: i64,
    /// Whether non-admin users are blocked from viewing the dashboard.
    pub regular_users_view_blocked: bool,
    /// Whether group memberships propagate from users to their peers.
    pub groups_propagation_enabled: bool,
    /// Whether groups are sourced from JWT claims.
    pub jwt_groups_enabled: bool,
    /// JWT claim carrying group names; the service treats it as nullable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_groups_claim_name: Option<String>,
    /// Groups allowed to authenticate via JWT; empty means all.
    #[serde(default)]
    pub jwt_allow_groups: Vec<String>,
    /// Whether routing peers resolve DNS for the networks they route.
    pub routing_peer_dns_resolution_enabled: bool,
    /// Optional extra settings composite; absent on accounts that never
    /// enabled any of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<AccountExtraSettings>,
}

/// Settings gated behind account-level feature toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountExtraSettings {
    /// Whether new peers require manual approval.
    pub peer_approval_enabled: bool,
    /// Whether network traffic events are recorded.
    pub network_traffic_logs_enabled: bool,
    /// Whether per-connection packet counters are recorded.
    pub network_traffic_packet_counter_enabled: bool,
}

/// Update payload for an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRequest {
    /// The full replacement settings object.
    pub settings: AccountSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip() {
        let settings = AccountSettings {
            peer_login_expiration_enabled: true,
            peer_login_expiration: 86400,
            peer_inactivity_expiration_enabled: false,
            peer_inactivity_expiration: 600,
            regular_users_view_blocked: true,
            groups_propagation_enabled: true,
            jwt_groups_enabled: true,
            jwt_groups_claim_name: Some("roles".to_string()),
            jwt_allow_groups: vec!["admins".to_string()],
            routing_peer_dns_resolution_enabled: false,
            extra: Some(AccountExtraSettings {
                peer_approval_enabled: true,
                network_traffic_logs_enabled: false,
                network_traffic_packet_counter_enabled: false,
            }),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AccountSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_null_claim_name_omitted() {
        let settings = AccountSettings {
            peer_login_expiration_enabled: false,
            peer_login_expiration: 0,
            peer_inactivity_expiration_enabled: false,
            peer_inactivity_expiration: 0,
            regular_users_view_blocked: false,
            groups_propagation_enabled: false,
            jwt_groups_enabled: false,
            jwt_groups_claim_name: None,
            jwt_allow_groups: vec![],
            routing_peer_dns_resolution_enabled: false,
            extra: None,
        };

        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("jwt_groups_claim_name"));
        assert!(!json.contains("extra"));
    }
}
