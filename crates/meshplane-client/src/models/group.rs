//! Group models.

use serde::{Deserialize, Serialize};

/// A peer group as held by the management service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Opaque group identifier.
    pub id: String,
    /// Display name, unique per account by convention but not enforced.
    pub name: String,
    /// Ids of member peers.
    #[serde(default)]
    pub peers: Vec<String>,
    /// How the group came to exist ("api", "jwt", "integration").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,
}

/// Create/update payload for a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRequest {
    pub name: String,
    #[serde(default)]
    pub peers: Vec<String>,
}

impl GroupRequest {
    /// Create a request with the given name and no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            peers: Vec::new(),
        }
    }

    /// Set the member peer ids.
    #[must_use]
    pub fn with_peers(mut self, peers: Vec<String>) -> Self {
        self.peers = peers;
        self
    }
}
