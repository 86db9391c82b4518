//! Access policy reconciliation and lookup.

use serde::Deserialize;
use tracing::{debug, info};

use meshplane_client::models::{Policy, PolicyRequest, PolicyRule};
use meshplane_client::PolicyApi;
use meshplane_core::{resolve_one, Desired, MatchOutcome, Reconcile, Selector};

use crate::error::{ResourceError, ResourceResult};

/// Desired configuration for a policy.
///
/// The rule list replaces wholesale: a set list fully overwrites the
/// remote rules (the service re-assigns rule ids as needed), an unset
/// list carries the remote rules through verbatim. Individual rules are
/// opaque to the merge — there is no per-rule reconciliation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicySpec {
    #[serde(default)]
    pub name: Desired<String>,
    #[serde(default)]
    pub description: Desired<Option<String>>,
    #[serde(default)]
    pub enabled: Desired<bool>,
    #[serde(default)]
    pub source_posture_checks: Desired<Vec<String>>,
    #[serde(default)]
    pub rules: Desired<Vec<PolicyRule>>,
}

impl Reconcile for PolicySpec {
    type Remote = Policy;
    type Request = PolicyRequest;

    fn merge(&self, remote: &Policy) -> PolicyRequest {
        PolicyRequest {
            name: self.name.resolve(&remote.name),
            description: self.description.resolve(&remote.description),
            enabled: self.enabled.resolve(&remote.enabled),
            source_posture_checks: self
                .source_posture_checks
                .resolve(&remote.source_posture_checks),
            rules: self.rules.resolve(&remote.rules),
        }
    }
}

/// Optional criteria identifying a single policy.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicySelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
}

impl Selector<Policy> for PolicySelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn evaluate(&self, candidate: &Policy) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
    }
}

/// Create a policy from its spec. `name` and a non-empty rule list must
/// be set; the service rejects rule-less policies.
pub async fn create_policy(api: &impl PolicyApi, spec: &PolicySpec) -> ResourceResult<Policy> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;
    let rules = spec
        .rules
        .get()
        .filter(|rules| !rules.is_empty())
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("rules"))?;

    let request = PolicyRequest {
        name,
        description: spec.description.get().cloned().flatten(),
        enabled: spec.enabled.get().copied().unwrap_or(true),
        source_posture_checks: spec.source_posture_checks.get().cloned().unwrap_or_default(),
        rules,
    };

    let created = api.create_policy(request).await?;
    info!(policy_id = %created.id, name = %created.name, "created policy");
    Ok(created)
}

/// Merge the spec against the current remote state and push the result.
pub async fn apply_policy(
    api: &impl PolicyApi,
    id: &str,
    spec: &PolicySpec,
) -> ResourceResult<Policy> {
    let remote = api.get_policy(id).await?;
    let request = spec.merge(&remote);
    let updated = api.update_policy(id, request).await?;
    info!(policy_id = %id, rules = updated.rules.len(), "updated policy");
    Ok(updated)
}

/// Delete a policy by id.
pub async fn delete_policy(api: &impl PolicyApi, id: &str) -> ResourceResult<()> {
    api.delete_policy(id).await?;
    info!(policy_id = %id, "deleted policy");
    Ok(())
}

/// Locate exactly one policy matching the selector.
pub async fn find_policy(api: &impl PolicyApi, selector: &PolicySelector) -> ResourceResult<Policy> {
    let policies = api.list_policies().await?;
    debug!(candidates = policies.len(), "resolving policy");
    let policy = resolve_one(&policies, selector)?;
    Ok(policy.clone())
}
