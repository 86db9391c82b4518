//! Entity models for the management API.
//!
//! Remote models are the authoritative state as last fetched; request
//! models are what create/update operations push back. Everything is
//! already deserialized into native scalar/collection/optional types —
//! the wire format lives in the concrete transport.

pub mod account;
pub mod dns;
pub mod group;
pub mod network;
pub mod peer;
pub mod policy;
pub mod posture;
pub mod setup_key;

pub use account::{Account, AccountExtraSettings, AccountRequest, AccountSettings};
pub use dns::{
    DnsSettings, DnsSettingsRequest, Nameserver, NameserverGroup, NameserverGroupRequest,
    NameserverType,
};
pub use group::{Group, GroupRequest};
pub use network::{
    Network, NetworkRequest, NetworkResource, NetworkResourceRequest, NetworkRouter,
    NetworkRouterRequest,
};
pub use peer::Peer;
pub use policy::{
    Policy, PolicyRequest, PolicyRule, PortRange, ResourceKind, ResourceRef, RuleAction,
    RuleProtocol,
};
pub use posture::{
    CheckAction, ChecksDefinition, GeoLocationCheck, Location, MinKernelVersionCheck,
    MinVersionCheck, OsVersionCheck, PeerNetworkRangeCheck, PostureCheck, PostureCheckRequest,
    Process, ProcessCheck,
};
pub use setup_key::{CreateSetupKeyRequest, SetupKey, SetupKeyType, UpdateSetupKeyRequest};
