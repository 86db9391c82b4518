//! # meshplane resources
//!
//! Per-entity specs, selectors, and handlers bridging declarative
//! configuration to the management API.
//!
//! Each module follows the same shape for its entity kind:
//!
//! - a **spec** struct with [`Desired`]-typed fields implementing
//!   [`Reconcile`] — the sparse desired configuration, deserializable so
//!   an omitted field stays unset,
//! - a **selector** struct implementing [`Selector`] — optional criteria
//!   for locating entities without an exact key,
//! - **handlers**: `create_*` (spec → create request, required fields
//!   checked), `apply_*` (fetch → merge → update), `delete_*`, and
//!   `find_*` (list → resolve), all generic over the capability traits
//!   from `meshplane-client`.
//!
//! Handlers do one fetch, one pure merge or resolution, and at most one
//! write; every failure propagates to the caller as a [`ResourceError`].
//!
//! [`Desired`]: meshplane_core::Desired
//! [`Reconcile`]: meshplane_core::Reconcile
//! [`Selector`]: meshplane_core::Selector

pub mod account;
pub mod dns;
pub mod error;
pub mod group;
pub mod network;
pub mod peer;
pub mod policy;
pub mod posture_check;
pub mod setup_key;

pub use error::{ResourceError, ResourceResult};

pub use account::{apply_account_settings, AccountSettingsSpec};
pub use dns::{
    apply_dns_settings, apply_nameserver_group, create_nameserver_group, delete_nameserver_group,
    find_nameserver_group, DnsSettingsSpec, NameserverGroupSelector, NameserverGroupSpec,
};
pub use group::{
    apply_group, create_group, delete_group, find_group, GroupSelector, GroupSpec,
};
pub use network::{
    apply_network, apply_network_resource, apply_network_router, create_network,
    create_network_resource, create_network_router, delete_network, delete_network_resource,
    delete_network_router, find_network, find_network_router, NetworkResourceSpec,
    NetworkRouterSelector, NetworkRouterSpec, NetworkSelector, NetworkSpec,
};
pub use peer::{find_peer, find_peers, PeerSelector};
pub use policy::{
    apply_policy, create_policy, delete_policy, find_policy, PolicySelector, PolicySpec,
};
pub use posture_check::{
    apply_posture_check, create_posture_check, delete_posture_check, find_posture_check,
    PostureCheckSelector, PostureCheckSpec,
};
pub use setup_key::{
    apply_setup_key, create_setup_key, find_setup_key, SetupKeySelector, SetupKeySpec,
};
