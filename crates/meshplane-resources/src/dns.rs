//! DNS settings and nameserver group reconciliation and lookup.

use serde::Deserialize;
use tracing::{debug, info};

use meshplane_client::models::{
    DnsSettings, DnsSettingsRequest, Nameserver, NameserverGroup, NameserverGroupRequest,
};
use meshplane_client::DnsApi;
use meshplane_core::{resolve_one, Desired, MatchOutcome, Reconcile, Selector};

use crate::error::{ResourceError, ResourceResult};

/// Desired account-wide DNS settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsSettingsSpec {
    #[serde(default)]
    pub disabled_management_groups: Desired<Vec<String>>,
}

impl Reconcile for DnsSettingsSpec {
    type Remote = DnsSettings;
    type Request = DnsSettingsRequest;

    fn merge(&self, remote: &DnsSettings) -> DnsSettingsRequest {
        DnsSettingsRequest {
            disabled_management_groups: self
                .disabled_management_groups
                .resolve(&remote.disabled_management_groups),
        }
    }
}

/// Merge the spec into the DNS settings singleton and push the result.
pub async fn apply_dns_settings(
    api: &impl DnsApi,
    spec: &DnsSettingsSpec,
) -> ResourceResult<DnsSettings> {
    let remote = api.get_dns_settings().await?;
    let request = spec.merge(&remote);
    let updated = api.update_dns_settings(request).await?;
    info!(
        disabled_groups = updated.disabled_management_groups.len(),
        "updated dns settings"
    );
    Ok(updated)
}

/// Desired configuration for a nameserver group.
///
/// The nameserver list replaces wholesale, like every other collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameserverGroupSpec {
    #[serde(default)]
    pub name: Desired<String>,
    #[serde(default)]
    pub description: Desired<Option<String>>,
    #[serde(default)]
    pub nameservers: Desired<Vec<Nameserver>>,
    #[serde(default)]
    pub enabled: Desired<bool>,
    #[serde(default)]
    pub groups: Desired<Vec<String>>,
    #[serde(default)]
    pub primary: Desired<bool>,
    #[serde(default)]
    pub domains: Desired<Vec<String>>,
    #[serde(default)]
    pub search_domains_enabled: Desired<bool>,
}

impl Reconcile for NameserverGroupSpec {
    type Remote = NameserverGroup;
    type Request = NameserverGroupRequest;

    fn merge(&self, remote: &NameserverGroup) -> NameserverGroupRequest {
        NameserverGroupRequest {
            name: self.name.resolve(&remote.name),
            description: self.description.resolve(&remote.description),
            nameservers: self.nameservers.resolve(&remote.nameservers),
            enabled: self.enabled.resolve(&remote.enabled),
            groups: self.groups.resolve(&remote.groups),
            primary: self.primary.resolve(&remote.primary),
            domains: self.domains.resolve(&remote.domains),
            search_domains_enabled: self
                .search_domains_enabled
                .resolve(&remote.search_domains_enabled),
        }
    }
}

/// Optional criteria identifying a single nameserver group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameserverGroupSelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
}

impl Selector<NameserverGroup> for NameserverGroupSelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set()
    }

    fn evaluate(&self, candidate: &NameserverGroup) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
    }
}

/// Create a nameserver group from its spec. `name`, a non-empty
/// nameserver list, and the distribution groups must be set.
pub async fn create_nameserver_group(
    api: &impl DnsApi,
    spec: &NameserverGroupSpec,
) -> ResourceResult<NameserverGroup> {
    let name = spec
        .name
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("name"))?;
    let nameservers = spec
        .nameservers
        .get()
        .filter(|servers| !servers.is_empty())
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("nameservers"))?;
    let groups = spec
        .groups
        .get()
        .cloned()
        .ok_or_else(|| ResourceError::missing_field("groups"))?;

    let request = NameserverGroupRequest {
        name,
        description: spec.description.get().cloned().flatten(),
        nameservers,
        enabled: spec.enabled.get().copied().unwrap_or(true),
        groups,
        primary: spec.primary.get().copied().unwrap_or(false),
        domains: spec.domains.get().cloned().unwrap_or_default(),
        search_domains_enabled: spec.search_domains_enabled.get().copied().unwrap_or(false),
    };

    let created = api.create_nameserver_group(request).await?;
    info!(nameserver_group_id = %created.id, name = %created.name, "created nameserver group");
    Ok(created)
}

/// Merge the spec against the current remote state and push the result.
pub async fn apply_nameserver_group(
    api: &impl DnsApi,
    id: &str,
    spec: &NameserverGroupSpec,
) -> ResourceResult<NameserverGroup> {
    let remote = api.get_nameserver_group(id).await?;
    let request = spec.merge(&remote);
    let updated = api.update_nameserver_group(id, request).await?;
    info!(nameserver_group_id = %id, "updated nameserver group");
    Ok(updated)
}

/// Delete a nameserver group by id.
pub async fn delete_nameserver_group(api: &impl DnsApi, id: &str) -> ResourceResult<()> {
    api.delete_nameserver_group(id).await?;
    info!(nameserver_group_id = %id, "deleted nameserver group");
    Ok(())
}

/// Locate exactly one nameserver group matching the selector.
pub async fn find_nameserver_group(
    api: &impl DnsApi,
    selector: &NameserverGroupSelector,
) -> ResourceResult<NameserverGroup> {
    let groups = api.list_nameserver_groups().await?;
    debug!(candidates = groups.len(), "resolving nameserver group");
    let group = resolve_one(&groups, selector)?;
    Ok(group.clone())
}
