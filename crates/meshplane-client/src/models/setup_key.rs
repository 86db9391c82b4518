//! Setup key models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A setup key as held by the management service.
///
/// The plain key material is returned once, on creation; subsequent reads
/// return a redacted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupKey {
    /// Opaque setup key identifier.
    pub id: String,
    /// The (possibly redacted) key material.
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: SetupKeyType,
    /// Expiry time; absent for non-expiring keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    /// Whether the key can still enroll peers.
    pub valid: bool,
    pub revoked: bool,
    pub used_times: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    /// Groups auto-assigned to peers enrolled with this key.
    #[serde(default)]
    pub auto_groups: Vec<String>,
    /// Maximum number of enrollments; zero means unlimited.
    pub usage_limit: u32,
    /// Whether peers enrolled with this key are removed when offline.
    pub ephemeral: bool,
    pub updated_at: DateTime<Utc>,
}

/// Whether a key enrolls one peer or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupKeyType {
    #[serde(rename = "reusable")]
    Reusable,
    #[serde(rename = "one-off")]
    OneOff,
}

/// Creation payload for a setup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSetupKeyRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub key_type: SetupKeyType,
    /// Seconds until expiry; zero means the key never expires. Fixed at
    /// creation; the service has no way to change it afterwards.
    pub expires_in: i64,
    #[serde(default)]
    pub auto_groups: Vec<String>,
    #[serde(default)]
    pub usage_limit: u32,
    #[serde(default)]
    pub ephemeral: bool,
}

/// Update payload for a setup key. Only revocation and the auto-assigned
/// groups are mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSetupKeyRequest {
    pub revoked: bool,
    #[serde(default)]
    pub auto_groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&SetupKeyType::OneOff).unwrap(),
            "\"one-off\""
        );
        let parsed: SetupKeyType = serde_json::from_str("\"reusable\"").unwrap();
        assert_eq!(parsed, SetupKeyType::Reusable);
    }

    #[test]
    fn test_type_field_renamed() {
        let request = CreateSetupKeyRequest {
            name: "ci".to_string(),
            key_type: SetupKeyType::Reusable,
            expires_in: 86400,
            auto_groups: vec!["g1".to_string()],
            usage_limit: 0,
            ephemeral: true,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"type\":\"reusable\""));
        assert!(!json.contains("key_type"));
    }
}
