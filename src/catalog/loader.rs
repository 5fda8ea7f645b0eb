use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::fetch_catalog;
use crate::models::CatalogState;

/// One-shot catalog fetch bound to the lifetime of the catalog view.
///
/// The view mounts once; mounting spawns the only fetch this loader will
/// ever make. Renders read [`CatalogLoader::snapshot`] and never trigger
/// I/O. Unmounting cancels an outstanding fetch and its result is dropped.
pub struct CatalogLoader {
    client: reqwest::Client,
    endpoint: String,
    state: watch::Sender<CatalogState>,
    mounted: AtomicBool,
    cancel: CancellationToken,
}

/// Moves the state out of Loading however the fetch task ends.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<CatalogState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|s| s.abandon());
    }
}

impl CatalogLoader {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            client,
            endpoint: endpoint.into(),
            state,
            mounted: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Start the fetch. Only the first call does anything; later calls
    /// (re-renders, a second mount) return `None`.
    pub fn mount(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!(endpoint = %self.endpoint, "catalog view already mounted");
            return None;
        }
        if self.cancel.is_cancelled() {
            debug!(endpoint = %self.endpoint, "catalog view unmounted before mount; not fetching");
            return None;
        }
        self.state.send_modify(|s| {
            s.begin_loading();
        });
        info!(endpoint = %self.endpoint, "catalog view mounted; fetching products");

        let loader = Arc::clone(self);
        Some(tokio::spawn(async move { loader.run().await }))
    }

    async fn run(&self) {
        let _guard = LoadingGuard { state: &self.state };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                debug!(endpoint = %self.endpoint, "catalog view unmounted; discarding in-flight fetch");
            }
            outcome = fetch_catalog(&self.client, &self.endpoint) => {
                match &outcome {
                    Ok(products) => info!(count = products.len(), "catalog loaded"),
                    Err(e) => warn!(error = %e, endpoint = %self.endpoint, "catalog fetch failed"),
                }
                self.state.send_modify(|s| {
                    s.settle(outcome);
                });
            }
        }
    }

    /// Detach the view. An in-flight fetch is cancelled and never applied.
    pub fn unmount(&self) {
        if !self.cancel.is_cancelled() {
            info!(endpoint = %self.endpoint, "catalog view unmounted");
        }
        self.cancel.cancel();
    }

    pub fn is_unmounted(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Current state for a render pass.
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn watch(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Wait until the fetch has settled. Does not start one: call
    /// [`CatalogLoader::mount`] first or this waits forever.
    pub async fn wait_settled(&self) -> CatalogState {
        let mut rx = self.state.subscribe();
        let settled = match rx.wait_for(CatalogState::is_settled).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.snapshot(),
        };
        settled
    }
}

impl Drop for CatalogLoader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
