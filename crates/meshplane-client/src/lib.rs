//! # meshplane client
//!
//! Entity models and transport capability traits for the mesh-network
//! management API.
//!
//! This crate defines the boundary between meshplane and the remote
//! service: serde models for every managed entity kind, one capability
//! trait per entity kind exposing `list`/`get`/`create`/`update`/`delete`
//! over opaque string ids, and an error taxonomy with transient/permanent
//! classification. A concrete transport lives elsewhere and implements
//! the traits; the resource handlers in `meshplane-resources` stay
//! generic over them.
//!
//! ## Example
//!
//! ```ignore
//! use meshplane_client::prelude::*;
//!
//! async fn rename(api: &impl GroupApi, id: &str) -> ApiResult<Group> {
//!     let group = api.get_group(id).await?;
//!     let request = GroupRequest::new("renamed").with_peers(group.peers);
//!     api.update_group(id, request).await
//! }
//! ```
//!
//! ## Crate organization
//!
//! - [`models`] - Remote and request models per entity kind
//! - [`traits`] - Capability traits (`GroupApi`, `PolicyApi`, ...)
//! - [`error`] - [`ApiError`] with transient/permanent classification

pub mod error;
pub mod models;
pub mod traits;

pub use error::{ApiError, ApiResult};
pub use traits::{
    AccountApi, DnsApi, GroupApi, ManagementClient, NetworkApi, PeerApi, PolicyApi,
    PostureCheckApi, SetupKeyApi,
};

/// Prelude module for convenient imports.
///
/// ```
/// use meshplane_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ApiError, ApiResult};

    pub use crate::traits::{
        AccountApi, DnsApi, GroupApi, ManagementClient, NetworkApi, PeerApi, PolicyApi,
        PostureCheckApi, SetupKeyApi,
    };

    pub use crate::models::{
        Account, AccountExtraSettings, AccountRequest, AccountSettings, CheckAction,
        ChecksDefinition, CreateSetupKeyRequest, DnsSettings, DnsSettingsRequest, GeoLocationCheck,
        Group, GroupRequest, Location, MinKernelVersionCheck, MinVersionCheck, Nameserver,
        NameserverGroup, NameserverGroupRequest, NameserverType, Network, NetworkRequest,
        NetworkResource, NetworkResourceRequest, NetworkRouter, NetworkRouterRequest,
        OsVersionCheck, Peer, PeerNetworkRangeCheck, Policy, PolicyRequest, PolicyRule, PortRange,
        PostureCheck, PostureCheckRequest, Process, ProcessCheck, ResourceKind, ResourceRef,
        RuleAction, RuleProtocol, SetupKey, SetupKeyType, UpdateSetupKeyRequest,
    };
}

// Re-export async_trait for transport implementors
pub use async_trait::async_trait;
