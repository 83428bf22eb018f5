//! Collection reconciliation for collsync.
//!
//! Given a submitted collection and a persisted one, [`Reconciler`] removes
//! persisted elements that were not resubmitted, synchronizes the ones that
//! were, and appends the new ones. Matching is by element equality
//! ([`Synchronize`] requires `PartialEq`); matched persisted elements keep
//! their slot and are never replaced.
//!
//! ```
//! use collsync_reconcile::{Synchronize, reconcile};
//!
//! #[derive(Debug, Clone)]
//! struct Tag { name: String, color: u8 }
//!
//! impl PartialEq for Tag {
//!     fn eq(&self, other: &Self) -> bool { self.name == other.name }
//! }
//!
//! impl Synchronize for Tag {
//!     fn synchronize_to(&self, persisted: &mut Self) -> bool {
//!         let changed = persisted.color != self.color;
//!         persisted.color = self.color;
//!         changed
//!     }
//! }
//!
//! let submitted = vec![Tag { name: "red".into(), color: 1 }];
//! let mut persisted = vec![Tag { name: "red".into(), color: 0 }];
//! assert!(reconcile(&submitted, &mut persisted, None, None));
//! assert_eq!(persisted[0].color, 1);
//! assert!(!reconcile(&submitted, &mut persisted, None, None));
//! ```

mod config;
mod reconciler;

pub use collsync_types::{Error, MatchSide, MutableCollection, Result, Synchronize};
pub use config::{MultiMatchPolicy, ReconcileConfig};
pub use reconciler::{ReconcileOutcome, Reconciler};

/// Reconciles `target` to match `source` with the default configuration.
///
/// Returns true if any element was added, removed, or changed by
/// synchronization. See [`Reconciler::reconcile`] for the full contract.
pub fn reconcile<E, C>(
    source: &[E],
    target: &mut C,
    on_added: Option<&mut dyn FnMut(&mut E)>,
    include_item: Option<&dyn Fn(&E) -> bool>,
) -> bool
where
    E: Synchronize + Clone,
    C: MutableCollection<E> + ?Sized,
{
    // The default policy processes every match and cannot fail.
    Reconciler::default()
        .reconcile(source, target, on_added, include_item)
        .map(|outcome| outcome.changed())
        .unwrap_or(false)
}
