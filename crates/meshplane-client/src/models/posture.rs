//! Posture check models.
//!
//! A posture check bundles optional sub-checks; a peer passes the check
//! only when it passes every sub-check present. Each sub-check is an
//! opaque composite: updates replace it wholesale.

use serde::{Deserialize, Serialize};

/// A posture check as held by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureCheck {
    /// Opaque posture check identifier.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub checks: ChecksDefinition,
}

/// The sub-checks of a posture check. Every field is optional; an absent
/// sub-check is simply not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecksDefinition {
    /// Minimum agent version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_version_check: Option<MinVersionCheck>,
    /// Per-platform minimum OS versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version_check: Option<OsVersionCheck>,
    /// Geo-location allow/deny list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_location_check: Option<GeoLocationCheck>,
    /// Peer network range allow/deny list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_network_range_check: Option<PeerNetworkRangeCheck>,
    /// Required running processes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_check: Option<ProcessCheck>,
}

/// Minimum version requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinVersionCheck {
    pub min_version: String,
}

/// Per-platform OS version requirements. Mobile and darwin platforms
/// check the OS version; linux and windows check the kernel version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsVersionCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<MinVersionCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<MinVersionCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub darwin: Option<MinVersionCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<MinKernelVersionCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<MinKernelVersionCheck>,
}

/// Minimum kernel version requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinKernelVersionCheck {
    pub min_kernel_version: String,
}

/// Allow or deny peers by connection location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationCheck {
    pub locations: Vec<Location>,
    pub action: CheckAction,
}

/// A location entry; city is optional, country-wide when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Two-letter ISO 3166-1 country code.
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// Whether a list-based sub-check allows or denies the listed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckAction {
    Allow,
    Deny,
}

/// Allow or deny peers by their reported network ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerNetworkRangeCheck {
    /// CIDR ranges.
    pub ranges: Vec<String>,
    pub action: CheckAction,
}

/// Require one of the listed processes to be running on the peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessCheck {
    pub processes: Vec<Process>,
}

/// Per-platform process paths; at least one platform path is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows_path: Option<String>,
}

/// Create/update payload for a posture check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureCheckRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub checks: ChecksDefinition,
}
