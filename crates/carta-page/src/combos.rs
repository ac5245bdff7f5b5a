//! # Combo Store and Loader
//!
//! Combos are the only catalog data this layer owns: created empty,
//! populated once by a one-shot fetch, never refreshed.
//!
//! ## Loader Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Combo Loader Lifecycle                            │
//! │                                                                         │
//! │   page opens ──► ComboLoader::spawn ──► GET /api/public/combos          │
//! │                        │                       │                        │
//! │                        │              ┌────────┴────────┐               │
//! │                        │              ▼                 ▼               │
//! │                        │          Ok(combos)        Err(fetch)          │
//! │                        │              │                 │               │
//! │                        │      store replaced     LoadErrorPolicy::      │
//! │                        │      wholesale, once    Ignore (debug log,     │
//! │                        │      status = Loaded    store untouched,       │
//! │                        │                         status = Failed)       │
//! │                        │                                                │
//! │   page torn down ──► handle dropped ──► task aborted                    │
//! │                        │                                                │
//! │   response races teardown? the task holds only a Weak store ref,        │
//! │   so a late response is discarded silently - no mutation after          │
//! │   teardown, no error.                                                   │
//! │                                                                         │
//! │   NEVER: retries, re-fetches on catalog change, user-visible errors.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Combos are a promotional, non-essential feature; a menu without them is
//! a complete menu. That is why the failure mode is "pretend none are
//! configured" rather than any surfaced error.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use carta_core::Combo;

use crate::api::{ComboApi, COMBOS_PATH};
use crate::error::FetchError;

// =============================================================================
// Load Status
// =============================================================================

/// Where the one-shot fetch currently stands.
///
/// Internal observability only: the user-facing rendering of `Failed` is
/// identical to "no combos configured", by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboLoadStatus {
    /// Fetch not yet resolved.
    Pending,

    /// Fetch succeeded; the store was replaced wholesale.
    Loaded {
        /// Number of combos received.
        count: usize,
        /// When the response was applied.
        loaded_at: DateTime<Utc>,
    },

    /// Fetch failed and was swallowed per policy. Never retried.
    Failed,
}

// =============================================================================
// Error Policy
// =============================================================================

/// What to do when the combo fetch fails.
///
/// The original page swallowed the error as an incidental omission; here
/// the same behavior is a named, tested policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadErrorPolicy {
    /// Log at debug level and fall back to "no combos". The combos section
    /// simply does not render; nothing reaches the user.
    #[default]
    Ignore,
}

// =============================================================================
// Combo Store
// =============================================================================

#[derive(Debug)]
struct StoreInner {
    combos: Vec<Combo>,
    status: ComboLoadStatus,
}

/// Shared holder for the fetched combos.
///
/// ## Thread Safety
/// The loader task writes once; the page reads on every composition. A
/// plain `Mutex` is enough - the write happens exactly once per page.
#[derive(Debug, Clone)]
pub struct ComboStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ComboStore {
    /// Creates an empty store in the `Pending` state.
    pub fn new() -> Self {
        ComboStore {
            inner: Arc::new(Mutex::new(StoreInner {
                combos: Vec::new(),
                status: ComboLoadStatus::Pending,
            })),
        }
    }

    /// Returns the combos fetched so far, in server response order.
    /// Empty until the fetch lands, and forever after a failed fetch.
    pub fn combos(&self) -> Vec<Combo> {
        self.lock().combos.clone()
    }

    /// Returns the current load status.
    pub fn status(&self) -> ComboLoadStatus {
        self.lock().status.clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("combo store mutex poisoned")
    }
}

impl Default for ComboStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Combo Loader
// =============================================================================

/// Spawns and runs the one-shot combo fetch.
pub struct ComboLoader;

impl ComboLoader {
    /// Issues exactly one fetch against [`COMBOS_PATH`] on a background
    /// task and returns a handle that aborts the task when dropped.
    ///
    /// The task holds only a [`Weak`] reference to the store: if the page
    /// is torn down mid-fetch, the eventual response is discarded without
    /// touching anything.
    pub fn spawn(
        api: Arc<dyn ComboApi>,
        store: &ComboStore,
        policy: LoadErrorPolicy,
    ) -> ComboLoaderHandle {
        let store = Arc::downgrade(&store.inner);
        let task = tokio::spawn(Self::load_once(api, store, policy));
        ComboLoaderHandle { task, done: false }
    }

    async fn load_once(
        api: Arc<dyn ComboApi>,
        store: Weak<Mutex<StoreInner>>,
        policy: LoadErrorPolicy,
    ) {
        trace!(path = COMBOS_PATH, "fetching combos");

        match api.fetch_combos(COMBOS_PATH).await {
            Ok(combos) => {
                let Some(store) = store.upgrade() else {
                    debug!("combo response arrived after teardown, discarded");
                    return;
                };

                let mut inner = store.lock().expect("combo store mutex poisoned");
                debug!(count = combos.len(), "combos loaded");
                inner.status = ComboLoadStatus::Loaded {
                    count: combos.len(),
                    loaded_at: Utc::now(),
                };
                inner.combos = combos;
            }
            Err(err) => Self::on_fetch_error(err, store, policy),
        }
    }

    fn on_fetch_error(err: FetchError, store: Weak<Mutex<StoreInner>>, policy: LoadErrorPolicy) {
        match policy {
            LoadErrorPolicy::Ignore => {
                debug!(error = %err, "combo fetch failed, rendering without combos");
                if let Some(store) = store.upgrade() {
                    store.lock().expect("combo store mutex poisoned").status =
                        ComboLoadStatus::Failed;
                }
            }
        }
    }
}

/// Handle to the in-flight combo fetch.
///
/// Dropping the handle aborts the fetch; this is the teardown path for the
/// page that owns it.
#[derive(Debug)]
pub struct ComboLoaderHandle {
    task: JoinHandle<()>,
    done: bool,
}

impl ComboLoaderHandle {
    /// Waits until the one-shot fetch has resolved (successfully or not).
    /// Safe to call more than once.
    pub async fn finished(&mut self) {
        if self.done {
            return;
        }
        // JoinError from an abort is irrelevant here: either way the task
        // will never run again.
        let _ = (&mut self.task).await;
        self.done = true;
    }

    /// Whether the fetch task has already resolved.
    pub fn is_finished(&self) -> bool {
        self.done || self.task.is_finished()
    }
}

impl Drop for ComboLoaderHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use carta_core::ComboItem;

    use crate::error::FetchResult;

    fn combo(id: &str) -> Combo {
        Combo {
            id: id.to_string(),
            name: format!("Combo {}", id),
            price_cents: 150_000,
            items: vec![ComboItem {
                qty: 1,
                product_name: "Hamburguesa".to_string(),
            }],
        }
    }

    /// Fake network client returning a fixed payload, counting calls.
    struct FixedApi {
        combos: Vec<Combo>,
        calls: AtomicUsize,
    }

    impl FixedApi {
        fn new(combos: Vec<Combo>) -> Arc<Self> {
            Arc::new(FixedApi {
                combos,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ComboApi for FixedApi {
        async fn fetch_combos(&self, path: &str) -> FetchResult<Vec<Combo>> {
            assert_eq!(path, COMBOS_PATH);
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.combos.clone())
        }
    }

    /// Fake network client that always fails at the transport level.
    struct FailingApi;

    #[async_trait]
    impl ComboApi for FailingApi {
        async fn fetch_combos(&self, _path: &str) -> FetchResult<Vec<Combo>> {
            Err(FetchError::Transport("connection refused".to_string()))
        }
    }

    /// Fake network client that blocks until released, then succeeds.
    struct GatedApi {
        gate: Notify,
        delivered: AtomicUsize,
    }

    #[async_trait]
    impl ComboApi for GatedApi {
        async fn fetch_combos(&self, _path: &str) -> FetchResult<Vec<Combo>> {
            self.gate.notified().await;
            self.delivered.fetch_add(1, Ordering::SeqCst);
            Ok(vec![combo("late")])
        }
    }

    /// Fake network client that never resolves.
    struct PendingApi;

    #[async_trait]
    impl ComboApi for PendingApi {
        async fn fetch_combos(&self, _path: &str) -> FetchResult<Vec<Combo>> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_success_replaces_store_in_response_order() {
        let api = FixedApi::new(vec![combo("z"), combo("a")]);
        let store = ComboStore::new();

        let mut handle = ComboLoader::spawn(api.clone(), &store, LoadErrorPolicy::Ignore);
        handle.finished().await;

        let ids: Vec<String> = store.combos().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["z", "a"]);
        assert!(matches!(
            store.status(),
            ComboLoadStatus::Loaded { count: 2, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetches_exactly_once() {
        let api = FixedApi::new(vec![combo("a")]);
        let store = ComboStore::new();

        let mut handle = ComboLoader::spawn(api.clone(), &store, LoadErrorPolicy::Ignore);
        handle.finished().await;
        handle.finished().await; // safe to await again

        // Reading the store never triggers network activity.
        let _ = store.combos();
        let _ = store.combos();

        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let store = ComboStore::new();

        let mut handle = ComboLoader::spawn(Arc::new(FailingApi), &store, LoadErrorPolicy::Ignore);
        handle.finished().await;

        // Store untouched, status marks the failure, nothing else happened -
        // the page renders exactly as if no combos were configured.
        assert!(store.combos().is_empty());
        assert_eq!(store.status(), ComboLoadStatus::Failed);
    }

    #[tokio::test]
    async fn test_late_response_after_teardown_is_discarded() {
        let api = Arc::new(GatedApi {
            gate: Notify::new(),
            delivered: AtomicUsize::new(0),
        });
        let store = ComboStore::new();
        let mut handle = ComboLoader::spawn(api.clone(), &store, LoadErrorPolicy::Ignore);

        // Page torn down while the fetch is still in flight.
        drop(store);

        api.gate.notify_one();
        handle.finished().await;

        // The response was produced but had nowhere to go; the task exits
        // cleanly instead of writing into freed state.
        assert_eq!(api.delivered.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dropping_handle_aborts_fetch() {
        let store = ComboStore::new();
        let handle = ComboLoader::spawn(Arc::new(PendingApi), &store, LoadErrorPolicy::Ignore);

        drop(handle);

        // The aborted task was parked inside the fetch and can never reach
        // the store write.
        assert!(store.combos().is_empty());
        assert_eq!(store.status(), ComboLoadStatus::Pending);
    }
}
