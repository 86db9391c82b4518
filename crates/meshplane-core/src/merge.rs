//! Merge of a sparse desired object against an authoritative remote object.

/// Merge a desired (possibly partial) configuration against the
/// authoritative remote state, producing the request to push back.
///
/// Every field merges independently via [`Desired::resolve`]: set fields
/// overwrite the remote value, unset fields carry the remote value through
/// unchanged. There is no cross-field validation at this layer; mutual
/// exclusivities between fields are the upstream schema layer's concern.
///
/// Nested composite fields (a posture check's OS-version sub-object, a
/// policy rule's resource reference) merge as opaque units: a set
/// sub-object replaces the remote sub-object wholesale, and its internal
/// fields are never reconciled individually. List-of-object fields (policy
/// rules, port ranges, nameservers) follow the same whole-collection
/// replacement rule as scalar collections, preserving the remote list
/// verbatim — ordering included — when unset.
///
/// `merge` is total and pure: it never fails, performs no I/O, and does not
/// mutate its inputs. The caller is responsible for passing the freshly
/// fetched current state of the entity the spec targets.
///
/// [`Desired::resolve`]: crate::Desired::resolve
pub trait Reconcile {
    /// The authoritative remote representation this spec merges against.
    type Remote;
    /// The request object produced by the merge.
    type Request;

    /// Produce the merged request for the remote service.
    fn merge(&self, remote: &Self::Remote) -> Self::Request;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Desired;

    #[derive(Debug, Clone, PartialEq)]
    struct Remote {
        name: String,
        enabled: bool,
        groups: Vec<String>,
        claim: Option<String>,
    }

    #[derive(Debug, Default)]
    struct Spec {
        name: Desired<String>,
        enabled: Desired<bool>,
        groups: Desired<Vec<String>>,
        claim: Desired<Option<String>>,
    }

    impl Reconcile for Spec {
        type Remote = Remote;
        type Request = Remote;

        fn merge(&self, remote: &Remote) -> Remote {
            Remote {
                name: self.name.resolve(&remote.name),
                enabled: self.enabled.resolve(&remote.enabled),
                groups: self.groups.resolve(&remote.groups),
                claim: self.claim.resolve(&remote.claim),
            }
        }
    }

    fn remote() -> Remote {
        Remote {
            name: "upstream".to_string(),
            enabled: true,
            groups: vec!["g1".to_string(), "g2".to_string()],
            claim: Some("roles".to_string()),
        }
    }

    #[test]
    fn test_all_unset_reproduces_remote() {
        let merged = Spec::default().merge(&remote());
        assert_eq!(merged, remote());
    }

    #[test]
    fn test_single_set_field_overrides_only_that_field() {
        let spec = Spec {
            enabled: Desired::Set(false),
            ..Spec::default()
        };
        let merged = spec.merge(&remote());

        assert!(!merged.enabled);
        assert_eq!(merged.name, remote().name);
        assert_eq!(merged.groups, remote().groups);
        assert_eq!(merged.claim, remote().claim);
    }

    #[test]
    fn test_set_empty_collection_replaces_remote_collection() {
        let spec = Spec {
            groups: Desired::Set(vec![]),
            ..Spec::default()
        };
        assert_eq!(spec.merge(&remote()).groups, Vec::<String>::new());
    }

    #[test]
    fn test_unset_collection_preserves_remote_order() {
        let merged = Spec::default().merge(&remote());
        assert_eq!(merged.groups, vec!["g1".to_string(), "g2".to_string()]);
    }

    #[test]
    fn test_set_none_clears_nullable_field() {
        let spec = Spec {
            claim: Desired::Set(None),
            ..Spec::default()
        };
        assert_eq!(spec.merge(&remote()).claim, None);
    }
}
