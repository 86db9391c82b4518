//! Account settings reconciliation.
//!
//! The account is a singleton: the access token is scoped to exactly one,
//! and the service exposes update only. The handler fetches the current
//! account, merges the spec into its settings, and pushes the full
//! settings object back.

use serde::Deserialize;
use tracing::info;

use meshplane_client::models::{Account, AccountExtraSettings, AccountRequest, AccountSettings};
use meshplane_client::{AccountApi, ApiError};
use meshplane_core::{Desired, Reconcile};

use crate::error::ResourceResult;

/// Desired account-wide settings.
///
/// Mirrors [`AccountSettings`] field-for-field in tri-state form. The
/// `extra` composite merges as an opaque unit: setting it replaces the
/// remote composite wholesale, `Set(None)` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountSettingsSpec {
    #[serde(default)]
    pub peer_login_expiration_enabled: Desired<bool>,
    #[serde(default)]
    pub peer_login_expiration: Desired<i64>,
    #[serde(default)]
    pub peer_inactivity_expiration_enabled: Desired<bool>,
    #[serde(default)]
    pub peer_inactivity_expiration: Desired<i64>,
    #[serde(default)]
    pub regular_users_view_blocked: Desired<bool>,
    #[serde(default)]
    pub groups_propagation_enabled: Desired<bool>,
    #[serde(default)]
    pub jwt_groups_enabled: Desired<bool>,
    #[serde(default)]
    pub jwt_groups_claim_name: Desired<Option<String>>,
    #[serde(default)]
    pub jwt_allow_groups: Desired<Vec<String>>,
    #[serde(default)]
    pub routing_peer_dns_resolution_enabled: Desired<bool>,
    #[serde(default)]
    pub extra: Desired<Option<AccountExtraSettings>>,
}

impl Reconcile for AccountSettingsSpec {
    type Remote = AccountSettings;
    type Request = AccountSettings;

    fn merge(&self, remote: &AccountSettings) -> AccountSettings {
        AccountSettings {
            peer_login_expiration_enabled: self
                .peer_login_expiration_enabled
                .resolve(&remote.peer_login_expiration_enabled),
            peer_login_expiration: self
                .peer_login_expiration
                .resolve(&remote.peer_login_expiration),
            peer_inactivity_expiration_enabled: self
                .peer_inactivity_expiration_enabled
                .resolve(&remote.peer_inactivity_expiration_enabled),
            peer_inactivity_expiration: self
                .peer_inactivity_expiration
                .resolve(&remote.peer_inactivity_expiration),
            regular_users_view_blocked: self
                .regular_users_view_blocked
                .resolve(&remote.regular_users_view_blocked),
            groups_propagation_enabled: self
                .groups_propagation_enabled
                .resolve(&remote.groups_propagation_enabled),
            jwt_groups_enabled: self.jwt_groups_enabled.resolve(&remote.jwt_groups_enabled),
            jwt_groups_claim_name: self
                .jwt_groups_claim_name
                .resolve(&remote.jwt_groups_claim_name),
            jwt_allow_groups: self.jwt_allow_groups.resolve(&remote.jwt_allow_groups),
            routing_peer_dns_resolution_enabled: self
                .routing_peer_dns_resolution_enabled
                .resolve(&remote.routing_peer_dns_resolution_enabled),
            extra: self.extra.resolve(&remote.extra),
        }
    }
}

/// Merge the spec into the token's account settings and push the result.
pub async fn apply_account_settings(
    api: &impl AccountApi,
    spec: &AccountSettingsSpec,
) -> ResourceResult<Account> {
    // The token sees exactly one account.
    let account = api
        .list_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::not_found("account", "current"))?;

    let settings = spec.merge(&account.settings);
    let updated = api
        .update_account(&account.id, AccountRequest { settings })
        .await?;
    info!(account_id = %updated.id, "updated account settings");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> AccountSettings {
        AccountSettings {
            peer_login_expiration_enabled: true,
            peer_login_expiration: 86400,
            peer_inactivity_expiration_enabled: false,
            peer_inactivity_expiration: 600,
            regular_users_view_blocked: false,
            groups_propagation_enabled: true,
            jwt_groups_enabled: true,
            jwt_groups_claim_name: Some("roles".to_string()),
            jwt_allow_groups: vec!["admins".to_string()],
            routing_peer_dns_resolution_enabled: true,
            extra: Some(AccountExtraSettings {
                peer_approval_enabled: false,
                network_traffic_logs_enabled: true,
                network_traffic_packet_counter_enabled: false,
            }),
        }
    }

    #[test]
    fn test_merge_all_unset_reproduces_remote() {
        let merged = AccountSettingsSpec::default().merge(&remote());
        assert_eq!(merged, remote());
    }

    #[test]
    fn test_merge_single_field_override() {
        let spec = AccountSettingsSpec {
            peer_login_expiration: Desired::Set(3600),
            ..AccountSettingsSpec::default()
        };
        let merged = spec.merge(&remote());
        assert_eq!(merged.peer_login_expiration, 3600);
        assert_eq!(
            merged.jwt_groups_claim_name,
            remote().jwt_groups_claim_name
        );
        assert_eq!(merged.extra, remote().extra);
    }

    #[test]
    fn test_merge_clears_nullable_claim_name() {
        let spec = AccountSettingsSpec {
            jwt_groups_claim_name: Desired::Set(None),
            ..AccountSettingsSpec::default()
        };
        assert_eq!(spec.merge(&remote()).jwt_groups_claim_name, None);
    }

    #[test]
    fn test_merge_replaces_extra_composite_wholesale() {
        let replacement = AccountExtraSettings {
            peer_approval_enabled: true,
            network_traffic_logs_enabled: false,
            network_traffic_packet_counter_enabled: false,
        };
        let spec = AccountSettingsSpec {
            extra: Desired::Set(Some(replacement.clone())),
            ..AccountSettingsSpec::default()
        };
        assert_eq!(spec.merge(&remote()).extra, Some(replacement));
    }

    #[test]
    fn test_merge_empty_allow_groups_replaces() {
        let spec = AccountSettingsSpec {
            jwt_allow_groups: Desired::Set(vec![]),
            ..AccountSettingsSpec::default()
        };
        assert!(spec.merge(&remote()).jwt_allow_groups.is_empty());
    }

    #[test]
    fn test_spec_deserializes_sparse_input() {
        let spec: AccountSettingsSpec =
            serde_json::from_str(r#"{"jwt_groups_enabled": false}"#).unwrap();
        assert_eq!(spec.jwt_groups_enabled, Desired::Set(false));
        assert!(spec.peer_login_expiration.is_unset());
        assert!(spec.extra.is_unset());
    }
}
