//! Posture check reconciliation and lookup.
//!
//! Every sub-check merges as an opaque composite: `Set(Some(..))`
//! replaces the remote sub-check wholesale, `Set(None)` removes it, and
//! `Unset` leaves it untouched. Updating one leaf of a sub-check means
//! resending the whole sub-check.

use serde::Deserialize;
use tracing::{debug, info};

use meshplane_client::models::{
    ChecksDefinition, GeoLocationCheck, MinVersionCheck, OsVersionCheck, PeerNetworkRangeCheck,
    PostureCheck, PostureCheckRequest, ProcessCheck,
};
use meshplane_client::PostureCheckApi;
use meshplane_core::{resolve_one, Desired, MatchOutcome, Reconcile, Selector};

use crate::error::{ResourceError, ResourceResult};

/// Desired configuration for a posture check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostureCheckSpec {
    #[serde(default)]
    pub name: Desired<String>,
    #[serde(default)]
    pub description: Desired<Option<String>>,
    #[serde(default)]
    pub nb_version_check: Desired<Option<MinVersionCheck>>,
    #[serde(default)]
    pub os_version_check: Desired<Option<OsVersionCheck>>,
    #[serde(default)]
    pub geo_location_check: Desired<Option<GeoLocationCheck>>,
    #[serde(default)]
    pub peer_network_range_check: Desired<Option<PeerNetworkRangeCheck>>,
    #[serde(default)]
    pub process_check: Desired<Option<ProcessCheck>>,
}

impl Reconcile for PostureCheckSpec {
    type Remote = PostureCheck;
    type Request = PostureCheckRequest;

    fn merge(&self, remote: &PostureCheck) -> PostureCheckRequest {
        PostureCheckRequest {
            name: self.name.resolve(&remote.name),
            description: self.description.resolve(&remote.description),
            checks: ChecksDefinition {
                nb_version_check: self
                    .nb_version_check
                    .resolve(&remote.checks.nb_version_check),
                os_version_check: self
                    .os_version_check
                    .resolve(&remote.checks.os_version_check),
                geo_location_check: self
                    .geo_location_check
                    .resolve(&remote.checks.geo_location_check),
                peer_network_range_check: self
                    .peer_network_range_check
                    .resolve(&remote.checks.peer_network_range_check),
                process_check: self.process_check.resolve(&remote.checks.process_check),
            },
        }
    }
}

/// Optional criteria identifying a single posture check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostureCheckSelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
}

impl Selector<PostureCheck> for PostureCheckSelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn evaluate(&self, candidate: &PostureCheck) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
    }
}

/// Create a posture check from its spec. `name` must be set.
pub async fn create_posture_check(
    api: &impl PostureCheckApi,
    spec: &PostureCheckSpec,
) -> ResourceResult<PostureCheck> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;

    let request = PostureCheckRequest {
        name,
        description: spec.description.get().cloned().flatten(),
        checks: ChecksDefinition {
            nb_version_check: spec.nb_version_check.get().cloned().flatten(),
            os_version_check: spec.os_version_check.get().cloned().flatten(),
            geo_location_check: spec.geo_location_check.get().cloned().flatten(),
            peer_network_range_check: spec.peer_network_range_check.get().cloned().flatten(),
            process_check: spec.process_check.get().cloned().flatten(),
        },
    };

    let created = api.create_posture_check(request).await?;
    info!(posture_check_id = %created.id, name = %created.name, "created posture check");
    Ok(created)
}

/// Merge the spec against the current remote state and push the result.
pub async fn apply_posture_check(
    api: &impl PostureCheckApi,
    id: &str,
    spec: &PostureCheckSpec,
) -> ResourceResult<PostureCheck> {
    let remote = api.get_posture_check(id).await?;
    let request = spec.merge(&remote);
    let updated = api.update_posture_check(id, request).await?;
    info!(posture_check_id = %id, "updated posture check");
    Ok(updated)
}

/// Delete a posture check by id.
pub async fn delete_posture_check(api: &impl PostureCheckApi, id: &str) -> ResourceResult<()> {
    api.delete_posture_check(id).await?;
    info!(posture_check_id = %id, "deleted posture check");
    Ok(())
}

/// Locate exactly one posture check matching the selector.
pub async fn find_posture_check(
    api: &impl PostureCheckApi,
    selector: &PostureCheckSelector,
) -> ResourceResult<PostureCheck> {
    let checks = api.list_posture_checks().await?;
    debug!(candidates = checks.len(), "resolving posture check");
    let check = resolve_one(&checks, selector)?;
    Ok(check.clone())
}
