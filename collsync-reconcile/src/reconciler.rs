//! Three-phase reconciliation: delete, update, add.
//!
//! Phases run in that order. The add set is computed against the target as
//! it was before any mutation, and every synchronize call sees the original
//! pairing. Equality must not change as a result of synchronization.

use collsync_types::{Error, MatchSide, MutableCollection, Result, Synchronize};
use tracing::{debug, trace, warn};

use crate::config::{MultiMatchPolicy, ReconcileConfig};

/// What a reconciliation pass did to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Included target elements with no submitted counterpart.
    pub removed: usize,
    /// Equal (submitted, persisted) pairs that were synchronized.
    pub synchronized: usize,
    /// Synchronize calls that reported a change.
    pub resynced: usize,
    /// Submitted elements appended to the target.
    pub added: usize,
}

impl ReconcileOutcome {
    /// Returns true if anything was added, removed, or changed by synchronization.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.removed > 0 || self.added > 0 || self.resynced > 0
    }
}

/// Reconciles persisted collections against submitted ones.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Makes the included part of `target` match the included part of `source`.
    ///
    /// - Included target elements with no equal included source element are removed.
    /// - Every equal pair is synchronized from source onto target; the target
    ///   element stays in place.
    /// - Included source elements with no equal element in the original target
    ///   are cloned and appended, then `on_added` is called with the stored element.
    ///   Equal source elements are added once.
    ///
    /// Elements rejected by `include_item` are neither added, removed nor
    /// synchronized. The predicate must be a pure function of the element.
    ///
    /// Only fails under [`MultiMatchPolicy::Reject`], and then before the
    /// target is touched.
    pub fn reconcile<E, C>(
        &self,
        source: &[E],
        target: &mut C,
        mut on_added: Option<&mut dyn FnMut(&mut E)>,
        include_item: Option<&dyn Fn(&E) -> bool>,
    ) -> Result<ReconcileOutcome>
    where
        E: Synchronize + Clone,
        C: MutableCollection<E> + ?Sized,
    {
        let included = |item: &E| include_item.is_none_or(|include| include(item));

        if self.config.multi_match == MultiMatchPolicy::Reject {
            check_singleton_matches(source, &*target, &included)?;
        }

        // Computed before any mutation so additions are relative to the original target.
        let to_add = pending_additions(source, &*target, &included);

        let mut outcome = ReconcileOutcome::default();

        // Delete
        let before = target.len();
        target.retain_items(&mut |persisted: &E| {
            if !included(persisted) {
                return true;
            }
            let keep = source.iter().any(|s| included(s) && s == persisted);
            if !keep {
                trace!("Removing element with no submitted counterpart");
            }
            keep
        });
        outcome.removed = before - target.len();

        // Update
        for index in 0..target.len() {
            let matches: Vec<usize> = match target.get(index) {
                Some(persisted) if included(persisted) => source
                    .iter()
                    .enumerate()
                    .filter(|&(_, s)| included(s) && s == persisted)
                    .map(|(i, _)| i)
                    .collect(),
                _ => continue,
            };

            if matches.len() > 1 {
                warn!(
                    "Target element at index {} is equal to {} submitted elements; synchronizing each",
                    index,
                    matches.len()
                );
            }

            for source_index in matches {
                let Some(persisted) = target.get_mut(index) else {
                    break;
                };
                outcome.synchronized += 1;
                if source[source_index].synchronize_to(persisted) {
                    trace!("Synchronized target element {} from source {}", index, source_index);
                    outcome.resynced += 1;
                }
            }
        }

        // Add
        for source_index in to_add {
            target.push_item(source[source_index].clone());
            outcome.added += 1;

            if let Some(callback) = on_added.as_deref_mut() {
                let last = target.len() - 1;
                if let Some(added) = target.get_mut(last) {
                    callback(added);
                }
            }
        }

        debug!(
            "Reconciled collection: removed={} synchronized={} resynced={} added={}",
            outcome.removed, outcome.synchronized, outcome.resynced, outcome.added
        );
        Ok(outcome)
    }
}

/// Indices of included source elements with no equal included element in
/// `target`, keeping only the first of several equal source elements.
fn pending_additions<E, C>(source: &[E], target: &C, included: &dyn Fn(&E) -> bool) -> Vec<usize>
where
    E: Synchronize,
    C: MutableCollection<E> + ?Sized,
{
    let mut pending: Vec<usize> = Vec::new();
    for (index, submitted) in source.iter().enumerate() {
        if !included(submitted) {
            continue;
        }
        let persisted = (0..target.len())
            .filter_map(|i| target.get(i))
            .any(|p| included(p) && p == submitted);
        let duplicate = pending.iter().any(|&i| source[i] == *submitted);
        if !persisted && !duplicate {
            pending.push(index);
        }
    }
    pending
}

/// Fails if any included element on either side equals more than one
/// included element on the other side.
fn check_singleton_matches<E, C>(
    source: &[E],
    target: &C,
    included: &dyn Fn(&E) -> bool,
) -> Result<()>
where
    E: Synchronize,
    C: MutableCollection<E> + ?Sized,
{
    let persisted: Vec<&E> = (0..target.len())
        .filter_map(|i| target.get(i))
        .collect();

    for (index, &p) in persisted.iter().enumerate() {
        if !included(p) {
            continue;
        }
        let matches = source.iter().filter(|&s| included(s) && s == p).count();
        if matches > 1 {
            return Err(Error::AmbiguousMatch {
                side: MatchSide::Target,
                index,
                matches,
            });
        }
    }

    for (index, s) in source.iter().enumerate() {
        if !included(s) {
            continue;
        }
        let matches = persisted
            .iter()
            .filter(|&&p| included(p) && p == s)
            .count();
        if matches > 1 {
            return Err(Error::AmbiguousMatch {
                side: MatchSide::Source,
                index,
                matches,
            });
        }
    }

    Ok(())
}
