//! # meshplane core
//!
//! Merge and resolution primitives for declarative mesh-network
//! configuration.
//!
//! Two algorithms live here, shared by every resource handler:
//!
//! - **Partial-update merge**: a sparse desired object (fields as
//!   [`Desired`]) combines with the authoritative remote object so that
//!   unset fields are left untouched and set fields — including explicitly
//!   empty ones — overwrite the remote value. Entity specs implement
//!   [`Reconcile`] to produce the request pushed back to the service.
//! - **Criteria-based resolution**: a [`Selector`] scores candidates via
//!   [`MatchOutcome`]; [`resolve_one`] applies the exactly-one policy and
//!   [`resolve_all`] returns the order-preserving filtered subset.
//!
//! All operations are pure, synchronous computations over in-memory
//! collections: no I/O, no locks, no shared mutable state. Fetching remote
//! objects and candidate collections is the transport collaborator's job.
//!
//! ## Example
//!
//! ```
//! use meshplane_core::{resolve_one, Desired, MatchOutcome, Selector};
//!
//! struct Group { id: String, name: String }
//!
//! #[derive(Default)]
//! struct GroupSelector { id: Desired<String>, name: Desired<String> }
//!
//! impl Selector<Group> for GroupSelector {
//!     fn is_constrained(&self) -> bool {
//!         self.id.is_set() || self.name.is_set()
//!     }
//!     fn evaluate(&self, candidate: &Group) -> MatchOutcome {
//!         MatchOutcome::new()
//!             .scalar(&self.id, &candidate.id)
//!             .scalar(&self.name, &candidate.name)
//!     }
//! }
//!
//! let groups = vec![Group { id: "g1".into(), name: "office".into() }];
//! let selector = GroupSelector { name: Desired::Set("office".into()), ..Default::default() };
//! let found = resolve_one(&groups, &selector).unwrap();
//! assert_eq!(found.id, "g1");
//! ```
//!
//! ## Crate organization
//!
//! - [`value`] - The [`Desired`] field container and per-field merge rule
//! - [`merge`] - The [`Reconcile`] trait for whole-entity merges
//! - [`matcher`] - Criteria scoring ([`MatchOutcome`], [`Selector`])
//! - [`resolver`] - [`resolve_one`] / [`resolve_all`] disambiguation
//! - [`error`] - [`ResolveError`]

pub mod error;
pub mod matcher;
pub mod merge;
pub mod resolver;
pub mod value;

pub use error::ResolveError;
pub use matcher::{MatchOutcome, Selector};
pub use merge::Reconcile;
pub use resolver::{resolve_all, resolve_one};
pub use value::Desired;
