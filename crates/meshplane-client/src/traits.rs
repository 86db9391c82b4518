//! Transport capability traits.
//!
//! One trait per entity kind, each covering the read and write operations
//! the management API exposes for it. A concrete transport (HTTP client,
//! recorded fixture, in-memory test double) implements the traits it
//! supports; handlers stay generic over them. Retries, timeouts, and
//! authentication are the implementation's concern — these traits only
//! shape the calls.
//!
//! All entity identifiers are opaque strings assigned by the service.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    Account, AccountRequest, CreateSetupKeyRequest, DnsSettings, DnsSettingsRequest, Group,
    GroupRequest, NameserverGroup, NameserverGroupRequest, Network, NetworkRequest,
    NetworkResource, NetworkResourceRequest, NetworkRouter, NetworkRouterRequest, Peer, Policy,
    PolicyRequest, PostureCheck, PostureCheckRequest, SetupKey, UpdateSetupKeyRequest,
};

/// Account operations. Accounts are never created or deleted through this
/// API; the token's account is the only one visible.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// List the accounts visible to the token (always a single element).
    async fn list_accounts(&self) -> ApiResult<Vec<Account>>;

    /// Replace the account's settings.
    async fn update_account(&self, id: &str, request: AccountRequest) -> ApiResult<Account>;
}

/// Group operations.
#[async_trait]
pub trait GroupApi: Send + Sync {
    async fn list_groups(&self) -> ApiResult<Vec<Group>>;
    async fn get_group(&self, id: &str) -> ApiResult<Group>;
    async fn create_group(&self, request: GroupRequest) -> ApiResult<Group>;
    async fn update_group(&self, id: &str, request: GroupRequest) -> ApiResult<Group>;
    async fn delete_group(&self, id: &str) -> ApiResult<()>;
}

/// Access policy operations.
#[async_trait]
pub trait PolicyApi: Send + Sync {
    async fn list_policies(&self) -> ApiResult<Vec<Policy>>;
    async fn get_policy(&self, id: &str) -> ApiResult<Policy>;
    async fn create_policy(&self, request: PolicyRequest) -> ApiResult<Policy>;
    async fn update_policy(&self, id: &str, request: PolicyRequest) -> ApiResult<Policy>;
    async fn delete_policy(&self, id: &str) -> ApiResult<()>;
}

/// Posture check operations.
#[async_trait]
pub trait PostureCheckApi: Send + Sync {
    async fn list_posture_checks(&self) -> ApiResult<Vec<PostureCheck>>;
    async fn get_posture_check(&self, id: &str) -> ApiResult<PostureCheck>;
    async fn create_posture_check(&self, request: PostureCheckRequest) -> ApiResult<PostureCheck>;
    async fn update_posture_check(
        &self,
        id: &str,
        request: PostureCheckRequest,
    ) -> ApiResult<PostureCheck>;
    async fn delete_posture_check(&self, id: &str) -> ApiResult<()>;
}

/// Setup key operations. Keys are revoked rather than deleted.
#[async_trait]
pub trait SetupKeyApi: Send + Sync {
    async fn list_setup_keys(&self) -> ApiResult<Vec<SetupKey>>;
    async fn get_setup_key(&self, id: &str) -> ApiResult<SetupKey>;
    async fn create_setup_key(&self, request: CreateSetupKeyRequest) -> ApiResult<SetupKey>;
    async fn update_setup_key(
        &self,
        id: &str,
        request: UpdateSetupKeyRequest,
    ) -> ApiResult<SetupKey>;
}

/// DNS settings and nameserver group operations.
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// Fetch the account-wide DNS settings singleton.
    async fn get_dns_settings(&self) -> ApiResult<DnsSettings>;

    /// Replace the account-wide DNS settings singleton.
    async fn update_dns_settings(&self, request: DnsSettingsRequest) -> ApiResult<DnsSettings>;

    async fn list_nameserver_groups(&self) -> ApiResult<Vec<NameserverGroup>>;
    async fn get_nameserver_group(&self, id: &str) -> ApiResult<NameserverGroup>;
    async fn create_nameserver_group(
        &self,
        request: NameserverGroupRequest,
    ) -> ApiResult<NameserverGroup>;
    async fn update_nameserver_group(
        &self,
        id: &str,
        request: NameserverGroupRequest,
    ) -> ApiResult<NameserverGroup>;
    async fn delete_nameserver_group(&self, id: &str) -> ApiResult<()>;
}

/// Network, router, and resource operations. Routers and resources are
/// addressed within their parent network.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    async fn list_networks(&self) -> ApiResult<Vec<Network>>;
    async fn get_network(&self, id: &str) -> ApiResult<Network>;
    async fn create_network(&self, request: NetworkRequest) -> ApiResult<Network>;
    async fn update_network(&self, id: &str, request: NetworkRequest) -> ApiResult<Network>;
    async fn delete_network(&self, id: &str) -> ApiResult<()>;

    async fn list_network_routers(&self, network_id: &str) -> ApiResult<Vec<NetworkRouter>>;
    async fn get_network_router(
        &self,
        network_id: &str,
        router_id: &str,
    ) -> ApiResult<NetworkRouter>;
    async fn create_network_router(
        &self,
        network_id: &str,
        request: NetworkRouterRequest,
    ) -> ApiResult<NetworkRouter>;
    async fn update_network_router(
        &self,
        network_id: &str,
        router_id: &str,
        request: NetworkRouterRequest,
    ) -> ApiResult<NetworkRouter>;
    async fn delete_network_router(&self, network_id: &str, router_id: &str) -> ApiResult<()>;

    async fn list_network_resources(&self, network_id: &str) -> ApiResult<Vec<NetworkResource>>;
    async fn get_network_resource(
        &self,
        network_id: &str,
        resource_id: &str,
    ) -> ApiResult<NetworkResource>;
    async fn create_network_resource(
        &self,
        network_id: &str,
        request: NetworkResourceRequest,
    ) -> ApiResult<NetworkResource>;
    async fn update_network_resource(
        &self,
        network_id: &str,
        resource_id: &str,
        request: NetworkResourceRequest,
    ) -> ApiResult<NetworkResource>;
    async fn delete_network_resource(&self, network_id: &str, resource_id: &str) -> ApiResult<()>;
}

/// Peer read operations. Peers enroll through the agent, not this API.
#[async_trait]
pub trait PeerApi: Send + Sync {
    async fn list_peers(&self) -> ApiResult<Vec<Peer>>;
    async fn get_peer(&self, id: &str) -> ApiResult<Peer>;
}

/// Marker trait for transports implementing the full management surface.
pub trait ManagementClient:
    AccountApi + GroupApi + PolicyApi + PostureCheckApi + SetupKeyApi + DnsApi + NetworkApi + PeerApi
{
}

// Blanket implementation for any transport covering every capability
impl<T> ManagementClient for T where
    T: AccountApi
        + GroupApi
        + PolicyApi
        + PostureCheckApi
        + SetupKeyApi
        + DnsApi
        + NetworkApi
        + PeerApi
{
}
