//! Peer models.
//!
//! Peers enroll themselves through the agent; the management API exposes
//! them read-mostly. This crate models them for lookup and filtering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A peer as held by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    /// Opaque peer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Mesh IP address.
    pub ip: String,
    /// Fully qualified mesh DNS label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    pub ssh_enabled: bool,
    /// Hostname reported by the agent.
    pub hostname: String,
    /// Operating system reported by the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    pub connected: bool,
    /// Ids of the groups the peer belongs to.
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}
