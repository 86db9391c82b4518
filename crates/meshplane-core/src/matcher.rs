//! Criteria scoring for entity resolution.
//!
//! A selector holds a set of optional criteria; each candidate entity is
//! scored by accumulating, per criterion, whether it matched, mismatched,
//! or was not constrained at all.

use crate::value::Desired;

/// Accumulated outcome of evaluating selector criteria against a single
/// candidate entity.
///
/// Tracks the number of matched criteria and whether any criterion
/// mismatched, explicitly, instead of folding both into one signed score
/// with a large negative penalty for mismatches. A candidate qualifies iff
/// no criterion mismatched and at least one matched — a single mismatch
/// disqualifies regardless of how many other criteria matched, while unset
/// criteria never penalize or reward.
///
/// Contribution methods are pure accumulators meant to be chained:
///
/// ```
/// use meshplane_core::{Desired, MatchOutcome};
///
/// let outcome = MatchOutcome::new()
///     .scalar(&Desired::Set("a".to_string()), &"a".to_string())
///     .superset(&Desired::Unset, &["g1".to_string()]);
/// assert!(outcome.is_match());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    matched: u32,
    mismatched: bool,
}

impl MatchOutcome {
    /// Start with no contributions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an equality criterion against a scalar attribute.
    ///
    /// An unset criterion contributes nothing.
    #[must_use]
    pub fn scalar<T: PartialEq>(mut self, criterion: &Desired<T>, actual: &T) -> Self {
        if let Desired::Set(expected) = criterion {
            if expected == actual {
                self.matched += 1;
            } else {
                self.mismatched = true;
            }
        }
        self
    }

    /// Apply an equality criterion against an attribute the remote API
    /// treats as optional.
    ///
    /// A set criterion against an absent attribute is a mismatch.
    #[must_use]
    pub fn scalar_opt<T: PartialEq>(mut self, criterion: &Desired<T>, actual: Option<&T>) -> Self {
        if let Desired::Set(expected) = criterion {
            match actual {
                Some(actual) if expected == actual => self.matched += 1,
                _ => self.mismatched = true,
            }
        }
        self
    }

    /// Apply a membership criterion against a multi-valued attribute.
    ///
    /// Matches when the candidate's values are a superset of the required
    /// values. The empty required set is a subset of every candidate set
    /// and therefore matches.
    #[must_use]
    pub fn superset<T: PartialEq>(mut self, criterion: &Desired<Vec<T>>, actual: &[T]) -> Self {
        if let Desired::Set(required) = criterion {
            if required.iter().all(|value| actual.contains(value)) {
                self.matched += 1;
            } else {
                self.mismatched = true;
            }
        }
        self
    }

    /// Whether this candidate satisfies the selector: at least one
    /// criterion matched and none mismatched.
    pub fn is_match(&self) -> bool {
        !self.mismatched && self.matched > 0
    }

    /// Number of criteria that matched.
    pub fn matched_count(&self) -> u32 {
        self.matched
    }

    /// Whether any criterion mismatched.
    pub fn is_mismatched(&self) -> bool {
        self.mismatched
    }
}

/// A set of optional criteria identifying entities of one kind.
///
/// Implementations pair each criterion with the corresponding candidate
/// attribute; candidate and selector must reference the same entity schema
/// (an inapplicable pairing is a data-modeling bug in the caller, not a
/// runtime condition).
pub trait Selector<C> {
    /// Whether at least one criterion is set.
    fn is_constrained(&self) -> bool;

    /// Evaluate every criterion against a candidate.
    fn evaluate(&self, candidate: &C) -> MatchOutcome;
}
