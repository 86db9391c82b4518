//! Entity resolution over remote collections.

use crate::error::ResolveError;
use crate::matcher::Selector;

/// Resolve exactly one entity from a candidate collection.
///
/// Requires at least one set criterion; an unconstrained selector is an
/// input error, not "match everything". Among candidates satisfying the
/// selector, exactly one must remain: zero is [`ResolveError::NotFound`],
/// more than one is [`ResolveError::Ambiguous`] — a distinct outcome
/// signaling that the selector under-specifies the target.
pub fn resolve_one<'a, C, S>(candidates: &'a [C], selector: &S) -> Result<&'a C, ResolveError>
where
    S: Selector<C>,
{
    if !selector.is_constrained() {
        return Err(ResolveError::EmptySelector);
    }

    let mut matches = candidates
        .iter()
        .filter(|candidate| selector.evaluate(candidate).is_match());

    match matches.next() {
        None => Err(ResolveError::NotFound),
        Some(first) => {
            let extra = matches.count();
            if extra == 0 {
                Ok(first)
            } else {
                Err(ResolveError::Ambiguous { count: extra + 1 })
            }
        }
    }
}

/// Return every candidate satisfying the selector, preserving the input
/// collection's relative order.
///
/// Zero and many matches are both valid outcomes here, not errors; this is
/// the mode for membership-style filtering ("all peers that belong to
/// group G"). An unconstrained selector yields the empty result, since no
/// criterion ever contributes a positive match.
pub fn resolve_all<'a, C, S>(candidates: &'a [C], selector: &S) -> Vec<&'a C>
where
    S: Selector<C>,
{
    candidates
        .iter()
        .filter(|candidate| selector.evaluate(candidate).is_match())
        .collect()
}
