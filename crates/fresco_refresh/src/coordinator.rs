//! Refresh coordination for stale download tokens.

use crate::RefreshConfig;
use fresco_cache::{ReferenceStore, from_response};
use fresco_core::{FileLocation, FileOrigin, FileReference, RefreshOutcome, UpdatedReferences};
use fresco_error::TransportError;
use fresco_interface::{ReplayRequest, ReplayResponse, RequestSender};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;
use tokio::sync::{Mutex, oneshot};
use tracing::{debug, instrument, trace, warn};

/// Key for in-flight replays: one replay per location and origin pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PendingKey {
    location: FileLocation,
    origin: FileOrigin,
}

/// Book-keeping for one in-flight replay.
#[derive(Debug, Default)]
struct PendingRefresh {
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// State guarded by the coordinator mutex.
///
/// The store and the pending map change together when a replay resolves,
/// so they share one lock.
#[derive(Debug, Default)]
struct CoordinatorState {
    store: ReferenceStore,
    pending: BTreeMap<PendingKey, PendingRefresh>,
}

fn outcome_for(updated: &UpdatedReferences, location: &FileLocation) -> RefreshOutcome {
    match updated.get(location) {
        Some(reference) => RefreshOutcome::Refreshed(reference.clone()),
        None => RefreshOutcome::NotFound,
    }
}

/// Coordinates origin replays that renew stale download tokens.
///
/// Concurrent refresh requests for the same file and origin share a single
/// replay. The replay itself runs on a detached task, so a caller that
/// stops waiting never cancels a request that already went out, and the
/// response still lands in the store.
///
/// # Example
///
/// ```no_run
/// use fresco_core::{ConversationId, DocumentId, FileLocation, FileOrigin, MessageId};
/// use fresco_error::TransportResult;
/// use fresco_interface::{ReplayRequest, ReplayResponse, RequestSender};
/// use fresco_refresh::{RefreshConfig, RefreshCoordinator};
/// use std::sync::Arc;
///
/// struct ClientSender;
///
/// #[async_trait::async_trait]
/// impl RequestSender for ClientSender {
///     async fn send(&self, request: ReplayRequest) -> TransportResult<ReplayResponse> {
///         todo!("issue the replay over the real transport")
///     }
/// }
///
/// # async fn run() {
/// let coordinator = RefreshCoordinator::new(Arc::new(ClientSender), RefreshConfig::default());
///
/// let location = FileLocation::Document(DocumentId(7));
/// let origin = FileOrigin::Message {
///     conversation: ConversationId(1),
///     message: MessageId(2),
/// };
///
/// let outcome = coordinator.request(location, origin).await;
/// if let Some(reference) = outcome.reference() {
///     // retry the download with the fresh reference
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct RefreshCoordinator {
    sender: Arc<dyn RequestSender>,
    config: RefreshConfig,
    state: Arc<Mutex<CoordinatorState>>,
}

impl RefreshCoordinator {
    /// Create a coordinator that replays requests through `sender`.
    pub fn new(sender: Arc<dyn RequestSender>, config: RefreshConfig) -> Self {
        debug!(
            cross_key_fanout = *config.cross_key_fanout(),
            "Creating refresh coordinator"
        );
        Self {
            sender,
            config,
            state: Arc::new(Mutex::new(CoordinatorState::default())),
        }
    }

    /// Refresh the reference for one file by replaying its origin.
    ///
    /// Joins the in-flight replay when one exists for this location and
    /// origin pair; otherwise issues a new one. The returned future
    /// resolves when the replay does. Dropping it abandons the wait but
    /// not the replay.
    #[instrument(skip(self), fields(location = %location, origin = %origin))]
    pub async fn request(&self, location: FileLocation, origin: FileOrigin) -> RefreshOutcome {
        let Some(replay) = ReplayRequest::for_origin(origin) else {
            warn!("Refresh requested for a file without provenance");
            return RefreshOutcome::OriginInvalid;
        };

        let key = PendingKey { location, origin };
        let (resolver, waiter) = oneshot::channel();

        let first = {
            let mut state = self.state.lock().await;
            match state.pending.entry(key) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().waiters.push(resolver);
                    trace!(
                        waiters = entry.get().waiters.len(),
                        "Joined in-flight replay"
                    );
                    false
                }
                Entry::Vacant(entry) => {
                    entry.insert(PendingRefresh {
                        waiters: vec![resolver],
                    });
                    true
                }
            }
        };

        if first {
            debug!(method = replay.method(), "Issuing replay");
            let task = self.clone();
            tokio::spawn(async move { task.run_replay(key, replay).await });
        }

        match waiter.await {
            Ok(outcome) => outcome,
            // The replay task resolves every waiter before dropping its
            // record; a closed channel means the task was torn down.
            Err(_) => RefreshOutcome::RequestFailed,
        }
    }

    /// Current reference for a location, if one was ever recorded.
    pub async fn lookup(&self, location: &FileLocation) -> Option<FileReference> {
        self.state.lock().await.store.lookup(location).cloned()
    }

    /// Feed externally extracted references into the store.
    ///
    /// For references the embedding client found in responses it was
    /// making anyway. Entries land in the store only; in-flight replays
    /// resolve from their own responses.
    pub async fn apply(&self, updated: &UpdatedReferences) -> usize {
        self.state.lock().await.store.apply(updated)
    }

    /// Number of replays currently in flight.
    pub async fn pending_len(&self) -> usize {
        self.state.lock().await.pending.len()
    }

    /// Number of references currently stored.
    pub async fn store_len(&self) -> usize {
        self.state.lock().await.store.len()
    }

    #[instrument(
        skip(self, key, replay),
        fields(location = %key.location, origin = %key.origin, method = replay.method())
    )]
    async fn run_replay(&self, key: PendingKey, replay: ReplayRequest) {
        match self.sender.send(replay).await {
            Ok(response) => self.resolve_success(key, &response).await,
            Err(error) => self.resolve_failure(key, error).await,
        }
    }

    /// Apply the response and resolve every waiter it settles.
    ///
    /// Records are removed before their waiters are resolved, so a waiter
    /// that immediately re-requests starts a fresh replay instead of
    /// joining a finished one.
    async fn resolve_success(&self, key: PendingKey, response: &ReplayResponse) {
        let updated = from_response(response);
        let mut resolutions: Vec<(oneshot::Sender<RefreshOutcome>, RefreshOutcome)> = Vec::new();

        {
            let mut state = self.state.lock().await;
            state.store.apply(&updated);

            if let Some(record) = state.pending.remove(&key) {
                let outcome = outcome_for(&updated, &key.location);
                debug!(
                    outcome = %outcome,
                    waiters = record.waiters.len(),
                    "Replay resolved"
                );
                if *self.config.log_references()
                    && let Some(reference) = outcome.reference()
                {
                    trace!(reference = ?reference, "Fresh reference");
                }
                for waiter in record.waiters {
                    resolutions.push((waiter, outcome.clone()));
                }
            }

            if *self.config.cross_key_fanout() {
                let covered: Vec<PendingKey> = state
                    .pending
                    .keys()
                    .filter(|candidate| {
                        candidate.origin == key.origin && updated.contains(&candidate.location)
                    })
                    .copied()
                    .collect();
                for candidate in covered {
                    if let Some(record) = state.pending.remove(&candidate) {
                        let outcome = outcome_for(&updated, &candidate.location);
                        debug!(
                            location = %candidate.location,
                            waiters = record.waiters.len(),
                            "Replay covered another pending refresh"
                        );
                        for waiter in record.waiters {
                            resolutions.push((waiter, outcome.clone()));
                        }
                    }
                }
            }
        }

        // Waiters resolve after the lock is released.
        for (waiter, outcome) in resolutions {
            // A closed channel means the waiter stopped listening.
            let _ = waiter.send(outcome);
        }
    }

    async fn resolve_failure(&self, key: PendingKey, error: TransportError) {
        warn!(error = %error, "Replay failed");

        let record = {
            let mut state = self.state.lock().await;
            state.pending.remove(&key)
        };

        if let Some(record) = record {
            for waiter in record.waiters {
                let _ = waiter.send(RefreshOutcome::RequestFailed);
            }
        }
    }
}
