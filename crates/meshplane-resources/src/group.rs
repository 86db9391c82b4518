//! Group reconciliation and lookup.

use serde::Deserialize;
use tracing::{debug, info};

use meshplane_client::models::{Group, GroupRequest};
use meshplane_client::GroupApi;
use meshplane_core::{resolve_one, Desired, MatchOutcome, Reconcile, Selector};

use crate::error::{ResourceError, ResourceResult};

/// Desired configuration for a group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupSpec {
    #[serde(default)]
    pub name: Desired<String>,
    /// Member peer ids; a set value replaces the membership wholesale.
    #[serde(default)]
    pub peers: Desired<Vec<String>>,
}

impl Reconcile for GroupSpec {
    type Remote = Group;
    type Request = GroupRequest;

    fn merge(&self, remote: &Group) -> GroupRequest {
        GroupRequest {
            name: self.name.resolve(&remote.name),
            peers: self.peers.resolve(&remote.peers),
        }
    }
}

/// Optional criteria identifying a single group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupSelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
}

impl Selector<Group> for GroupSelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn evaluate(&self, candidate: &Group) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
    }
}

/// Create a group from its spec. `name` must be set.
pub async fn create_group(api: &impl GroupApi, spec: &GroupSpec) -> ResourceResult<Group> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;
    let request = GroupRequest {
        name,
        peers: spec.peers.get().cloned().unwrap_or_default(),
    };

    let created = api.create_group(request).await?;
    info!(group_id = %created.id, name = %created.name, "created group");
    Ok(created)
}

/// Merge the spec against the current remote state and push the result.
pub async fn apply_group(api: &impl GroupApi, id: &str, spec: &GroupSpec) -> ResourceResult<Group> {
    let remote = api.get_group(id).await?;
    let request = spec.merge(&remote);
    let updated = api.update_group(id, request).await?;
    info!(group_id = %id, "updated group");
    Ok(updated)
}

/// Delete a group by id.
pub async fn delete_group(api: &impl GroupApi, id: &str) -> ResourceResult<()> {
    api.delete_group(id).await?;
    info!(group_id = %id, "deleted group");
    Ok(())
}

/// Locate exactly one group matching the selector.
pub async fn find_group(api: &impl GroupApi, selector: &GroupSelector) -> ResourceResult<Group> {
    let groups = api.list_groups().await?;
    debug!(candidates = groups.len(), "resolving group");
    let group = resolve_one(&groups, selector)?;
    Ok(group.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote() -> Group {
        Group {
            id: "g1".to_string(),
            name: "office".to_string(),
            peers: vec!["p1".to_string(), "p2".to_string()],
            issued: Some("api".to_string()),
        }
    }

    #[test]
    fn test_merge_all_unset_reproduces_remote() {
        let request = GroupSpec::default().merge(&remote());
        assert_eq!(request.name, "office");
        assert_eq!(request.peers, vec!["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn test_merge_set_name_keeps_peers() {
        let spec = GroupSpec {
            name: Desired::Set("renamed".to_string()),
            ..GroupSpec::default()
        };
        let request = spec.merge(&remote());
        assert_eq!(request.name, "renamed");
        assert_eq!(request.peers, remote().peers);
    }

    #[test]
    fn test_merge_empty_peers_clears_membership() {
        let spec = GroupSpec {
            peers: Desired::Set(vec![]),
            ..GroupSpec::default()
        };
        assert!(spec.merge(&remote()).peers.is_empty());
    }

    #[test]
    fn test_selector_by_id() {
        let selector = GroupSelector {
            id: Desired::Set("g1".to_string()),
            ..GroupSelector::default()
        };
        assert!(selector.is_constrained());
        assert!(selector.evaluate(&remote()).is_match());
    }

    #[test]
    fn test_selector_mismatched_name_disqualifies() {
        let selector = GroupSelector {
            id: Desired::Set("g1".to_string()),
            name: Desired::Set("other".to_string()),
        };
        assert!(!selector.evaluate(&remote()).is_match());
    }

    #[test]
    fn test_unconstrained_selector() {
        assert!(!GroupSelector::default().is_constrained());
    }

    #[test]
    fn test_spec_deserializes_sparse_input() {
        let spec: GroupSpec = serde_json::from_str(r#"{"peers": []}"#).unwrap();
        assert!(spec.name.is_unset());
        assert_eq!(spec.peers, Desired::Set(vec![]));
    }
}
