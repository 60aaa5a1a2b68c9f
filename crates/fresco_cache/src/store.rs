//! In-memory reference store.

use fresco_core::{FileLocation, FileReference, UpdatedReferences};
use std::collections::BTreeMap;

/// Latest known download token for every file seen so far.
///
/// The newest reference for a location always wins; there is no TTL and
/// no eviction, because only the server knows when a token dies. Staleness
/// surfaces as a rejected download, which the refresh coordinator recovers
/// from.
///
/// # Example
///
/// ```
/// use fresco_cache::ReferenceStore;
/// use fresco_core::{DocumentId, FileLocation, FileReference, UpdatedReferences};
///
/// let mut store = ReferenceStore::new();
/// let location = FileLocation::Document(DocumentId(7));
///
/// let mut batch = UpdatedReferences::new();
/// batch.insert(location, FileReference::new(vec![1, 2]));
/// store.apply(&batch);
///
/// assert_eq!(store.lookup(&location), Some(&FileReference::new(vec![1, 2])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    entries: BTreeMap<FileLocation, FileReference>,
}

impl ReferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a batch of fresh references into the store.
    ///
    /// Every entry in the batch replaces whatever the store held for its
    /// location. Returns the number of entries written.
    #[tracing::instrument(skip(self, updated), fields(batch = updated.len(), store_size = self.entries.len()))]
    pub fn apply(&mut self, updated: &UpdatedReferences) -> usize {
        for (location, reference) in updated {
            self.entries.insert(*location, reference.clone());
        }
        let written = updated.len();
        if written > 0 {
            tracing::debug!(
                written,
                store_size = self.entries.len(),
                "Applied reference batch"
            );
        }
        written
    }

    /// Current reference for a location, if one was ever recorded.
    pub fn lookup(&self, location: &FileLocation) -> Option<&FileReference> {
        self.entries.get(location)
    }

    /// Check whether the store holds a reference for a location.
    pub fn contains(&self, location: &FileLocation) -> bool {
        self.entries.contains_key(location)
    }

    /// Number of stored references.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stored reference.
    ///
    /// For embedding applications that clear their caches wholesale; the
    /// refresh machinery never calls this itself.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!(cleared = count, "Cleared reference store");
    }
}
