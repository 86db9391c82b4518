//! Setup key reconciliation and lookup.
//!
//! Only revocation and the auto-assigned groups are mutable after
//! creation; everything else is fixed when the key is minted. Supplying a
//! fixed field on update is reported as an error rather than silently
//! dropped, so the declarative layer can decide to recreate the key.

use serde::Deserialize;
use tracing::{debug, info};

use meshplane_client::models::{
    CreateSetupKeyRequest, SetupKey, SetupKeyType, UpdateSetupKeyRequest,
};
use meshplane_client::SetupKeyApi;
use meshplane_core::{resolve_one, Desired, MatchOutcome, Reconcile, Selector};

use crate::error::{ResourceError, ResourceResult};

/// Desired configuration for a setup key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupKeySpec {
    /// Fixed at creation.
    #[serde(default)]
    pub name: Desired<String>,
    /// Fixed at creation.
    #[serde(default)]
    pub key_type: Desired<SetupKeyType>,
    /// Seconds until expiry, zero for never. Fixed at creation.
    #[serde(default)]
    pub expires_in: Desired<i64>,
    /// Fixed at creation.
    #[serde(default)]
    pub usage_limit: Desired<u32>,
    /// Fixed at creation.
    #[serde(default)]
    pub ephemeral: Desired<bool>,
    #[serde(default)]
    pub revoked: Desired<bool>,
    #[serde(default)]
    pub auto_groups: Desired<Vec<String>>,
}

impl SetupKeySpec {
    /// Name of the first creation-fixed field that was set, if any.
    fn fixed_field_set(&self) -> Option<&'static str> {
        if self.name.is_set() {
            Some("name")
        } else if self.key_type.is_set() {
            Some("type")
        } else if self.expires_in.is_set() {
            Some("expires_in")
        } else if self.usage_limit.is_set() {
            Some("usage_limit")
        } else if self.ephemeral.is_set() {
            Some("ephemeral")
        } else {
            None
        }
    }
}

impl Reconcile for SetupKeySpec {
    type Remote = SetupKey;
    type Request = UpdateSetupKeyRequest;

    /// Merge the mutable fields only; [`apply_setup_key`] rejects specs
    /// that set creation-fixed fields before the merge runs.
    fn merge(&self, remote: &SetupKey) -> UpdateSetupKeyRequest {
        UpdateSetupKeyRequest {
            revoked: self.revoked.resolve(&remote.revoked),
            auto_groups: self.auto_groups.resolve(&remote.auto_groups),
        }
    }
}

/// Optional criteria identifying a single setup key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupKeySelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
}

impl Selector<SetupKey> for SetupKeySelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn evaluate(&self, candidate: &SetupKey) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
    }
}

/// Mint a new setup key from its spec. `name` must be set; unset optional
/// fields take the service defaults (reusable, never expires, unlimited).
pub async fn create_setup_key(
    api: &impl SetupKeyApi,
    spec: &SetupKeySpec,
) -> ResourceResult<SetupKey> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;

    let request = CreateSetupKeyRequest {
        name,
        key_type: spec.key_type.get().copied().unwrap_or(SetupKeyType::Reusable),
        expires_in: spec.expires_in.get().copied().unwrap_or(0),
        auto_groups: spec.auto_groups.get().cloned().unwrap_or_default(),
        usage_limit: spec.usage_limit.get().copied().unwrap_or(0),
        ephemeral: spec.ephemeral.get().copied().unwrap_or(false),
    };

    let created = api.create_setup_key(request).await?;
    info!(setup_key_id = %created.id, name = %created.name, "created setup key");
    Ok(created)
}

/// Merge the mutable fields against the current remote state and push
/// the result. Fails with [`ResourceError::CreateOnly`] when the spec
/// sets a field that is fixed at creation.
pub async fn apply_setup_key(
    api: &impl SetupKeyApi,
    id: &str,
    spec: &SetupKeySpec,
) -> ResourceResult<SetupKey> {
    if let Some(field) = spec.fixed_field_set() {
        return Err(ResourceError::create_only(field, "setup key"));
    }

    let remote = api.get_setup_key(id).await?;
    let request = spec.merge(&remote);
    let updated = api.update_setup_key(id, request).await?;
    info!(setup_key_id = %id, revoked = updated.revoked, "updated setup key");
    Ok(updated)
}

/// Locate exactly one setup key matching the selector.
pub async fn find_setup_key(
    api: &impl SetupKeyApi,
    selector: &SetupKeySelector,
) -> ResourceResult<SetupKey> {
    let keys = api.list_setup_keys().await?;
    debug!(candidates = keys.len(), "resolving setup key");
    let key = resolve_one(&keys, selector)?;
    Ok(key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn remote() -> SetupKey {
        SetupKey {
            id: "sk-1".to_string(),
            key: "XXXX-XXXX".to_string(),
            name: "ci".to_string(),
            key_type: SetupKeyType::Reusable,
            expires: None,
            valid: true,
            revoked: false,
            used_times: 4,
            last_used: None,
            auto_groups: vec!["g-ci".to_string()],
            usage_limit: 0,
            ephemeral: false,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_merge_all_unset_reproduces_mutable_fields() {
        let request = SetupKeySpec::default().merge(&remote());
        assert!(!request.revoked);
        assert_eq!(request.auto_groups, vec!["g-ci".to_string()]);
    }

    #[test]
    fn test_merge_revokes_key() {
        let spec = SetupKeySpec {
            revoked: Desired::Set(true),
            ..SetupKeySpec::default()
        };
        let request = spec.merge(&remote());
        assert!(request.revoked);
        assert_eq!(request.auto_groups, remote().auto_groups);
    }

    #[test]
    fn test_merge_clears_auto_groups() {
        let spec = SetupKeySpec {
            auto_groups: Desired::Set(vec![]),
            ..SetupKeySpec::default()
        };
        assert!(spec.merge(&remote()).auto_groups.is_empty());
    }

    #[test]
    fn test_fixed_field_detection() {
        let spec = SetupKeySpec {
            expires_in: Desired::Set(86400),
            ..SetupKeySpec::default()
        };
        assert_eq!(spec.fixed_field_set(), Some("expires_in"));

        let mutable_only = SetupKeySpec {
            revoked: Desired::Set(true),
            auto_groups: Desired::Set(vec!["g1".to_string()]),
            ..SetupKeySpec::default()
        };
        assert_eq!(mutable_only.fixed_field_set(), None);
    }

    #[test]
    fn test_selector_by_id() {
        let selector = SetupKeySelector {
            id: Desired::Set("sk-1".to_string()),
            ..SetupKeySelector::default()
        };
        assert!(selector.evaluate(&remote()).is_match());
    }
}
