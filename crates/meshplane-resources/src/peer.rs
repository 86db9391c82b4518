//! Peer lookup.
//!
//! Peers are read-only through the management API; this module only
//! resolves them, either to exactly one (by id, name, or mesh IP) or to
//! the subset belonging to given groups.

use serde::Deserialize;
use tracing::debug;

use meshplane_client::models::Peer;
use meshplane_client::PeerApi;
use meshplane_core::{resolve_all, resolve_one, Desired, MatchOutcome, Selector};

use crate::error::ResourceResult;

/// Optional criteria identifying peers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeerSelector {
    #[serde(default)]
    pub id: Desired<String>,
    #[serde(default)]
    pub name: Desired<String>,
    #[serde(default)]
    pub ip: Desired<String>,
    /// Groups the peer must belong to (all of them).
    #[serde(default)]
    pub groups: Desired<Vec<String>>,
}

impl Selector<Peer> for PeerSelector {
    fn is_constrained(&self) -> bool {
        self.id.is_set() || self.name.is_set() || self.ip.is_set() || self.groups.is_set()
    }

    fn evaluate(&self, candidate: &Peer) -> MatchOutcome {
        MatchOutcome::new()
            .scalar(&self.id, &candidate.id)
            .scalar(&self.name, &candidate.name)
            .scalar(&self.ip, &candidate.ip)
            .superset(&self.groups, &candidate.groups)
    }
}

/// Locate exactly one peer matching the selector.
pub async fn find_peer(api: &impl PeerApi, selector: &PeerSelector) -> ResourceResult<Peer> {
    let peers = api.list_peers().await?;
    debug!(candidates = peers.len(), "resolving peer");
    let peer = resolve_one(&peers, selector)?;
    Ok(peer.clone())
}

/// Return every peer matching the selector, preserving the service's
/// ordering. Zero matches is a valid, empty answer.
pub async fn find_peers(api: &impl PeerApi, selector: &PeerSelector) -> ResourceResult<Vec<Peer>> {
    let peers = api.list_peers().await?;
    let matched = resolve_all(&peers, selector);
    debug!(
        candidates = peers.len(),
        matched = matched.len(),
        "filtered peers"
    );
    Ok(matched.into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(id: &str, name: &str, ip: &str, groups: &[&str]) -> Peer {
        Peer {
            id: id.to_string(),
            name: name.to_string(),
            ip: ip.to_string(),
            dns_label: None,
            ssh_enabled: false,
            hostname: format!("{name}.lan"),
            os: Some("linux".to_string()),
            connected: true,
            groups: groups.iter().map(|g| (*g).to_string()).collect(),
            last_seen: None,
        }
    }

    #[test]
    fn test_selector_by_ip() {
        let candidate = peer("p1", "laptop", "100.64.0.7", &[]);
        let selector = PeerSelector {
            ip: Desired::Set("100.64.0.7".to_string()),
            ..PeerSelector::default()
        };
        assert!(selector.evaluate(&candidate).is_match());
    }

    #[test]
    fn test_membership_selector() {
        let candidates = [
            peer("p1", "p1", "100.64.0.1", &["g1"]),
            peer("p2", "p2", "100.64.0.2", &["g1", "g2"]),
            peer("p3", "p3", "100.64.0.3", &["g2"]),
        ];
        let selector = PeerSelector {
            groups: Desired::Set(vec!["g1".to_string()]),
            ..PeerSelector::default()
        };

        let matched: Vec<&str> = candidates
            .iter()
            .filter(|candidate| selector.evaluate(candidate).is_match())
            .map(|candidate| candidate.id.as_str())
            .collect();
        assert_eq!(matched, vec!["p1", "p2"]);
    }

    #[test]
    fn test_combined_criteria_all_must_hold() {
        let candidate = peer("p1", "laptop", "100.64.0.7", &["g1"]);
        let selector = PeerSelector {
            name: Desired::Set("laptop".to_string()),
            groups: Desired::Set(vec!["g2".to_string()]),
            ..PeerSelector::default()
        };
        // Name matches but membership mismatches.
        assert!(!selector.evaluate(&candidate).is_match());
    }
}
