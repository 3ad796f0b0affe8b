use serde_json::Value;
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use crate::debounce::Debouncer;
use crate::github_client::UserFetcher;

/// Shared state container read by the presentation layer.
///
/// `results` and `repos` hold the raw decoded bodies of the two lookups;
/// both start as `Null`. They correspond to the same completed search text
/// except in the window between the two sequential fetches, and except when
/// overlapping searches race (last write to each field wins).
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current search text, updated on every input event.
    pub text: String,
    /// Raw user-lookup body; may be an error body without `login`.
    pub results: Value,
    /// Raw repository-listing body; normally a JSON array.
    pub repos: Value,
    /// True from search start until the settle delay elapses.
    pub loading: bool,
    /// Terminal failure payload for the most recent search, if any.
    pub error: Option<String>,
}

/// Timing knobs for the orchestrator.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Quiescence window before a debounced query fires.
    pub debounce: Duration,
    /// Minimum time the loading indicator stays up after data arrives.
    pub settle_delay: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            debounce: Duration::from_millis(500),
            settle_delay: Duration::from_millis(1500),
        }
    }
}

/// The part of the orchestrator a running search needs: fetcher, state and
/// the settle delay. Cloned into spawned tasks.
#[derive(Clone)]
struct SearchCore {
    fetcher: Arc<dyn UserFetcher>,
    state: Arc<Mutex<SearchState>>,
    settle_delay: Duration,
}

impl SearchCore {
    /// Execute one search to completion. Failures end the search in a
    /// terminal error state instead of leaving the loading flag stuck.
    async fn search(&self, text: &str) {
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.error = None;
        }
        info!("Starting lookup for '{}'", text);

        if let Err(e) = self.run_search(text).await {
            warn!("Lookup for '{}' failed: {}", text, e);
            let mut state = self.state.lock().unwrap();
            state.error = Some(e.to_string());
            state.loading = false;
        }
    }

    async fn run_search(&self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        // Strictly sequential: the repository fetch is not issued until the
        // profile fetch has resolved and been stored.
        let user = self.fetcher.fetch_user(text).await?;
        self.state.lock().unwrap().results = user;

        let repos = self.fetcher.fetch_user_repos(text).await?;
        self.state.lock().unwrap().repos = repos;

        debug!("Lookup for '{}' complete, settling", text);

        // Minimum display time for the loading indicator, decoupled from
        // fetch latency. Overlapping searches each arm their own timer.
        let state = Arc::clone(&self.state);
        let settle_delay = self.settle_delay;
        tokio::spawn(async move {
            sleep(settle_delay).await;
            state.lock().unwrap().loading = false;
        });

        Ok(())
    }
}

/// Orchestrates debounced user lookups against a [`UserFetcher`].
///
/// Owns the state container exclusively; the presentation layer reads it
/// through [`snapshot`](UserSearcher::snapshot) and mutates it only through
/// the operations here. In-flight searches are never cancelled: a superseded
/// search still writes its results into shared state when it resolves.
pub struct UserSearcher {
    core: SearchCore,
    debouncer: Debouncer,
    cleared: AtomicBool,
}

impl UserSearcher {
    /// Create the orchestrator and start its query drain task. Must be
    /// called from within a tokio runtime.
    pub fn new(fetcher: Arc<dyn UserFetcher>, options: SearchOptions) -> Self {
        let state = Arc::new(Mutex::new(SearchState::default()));
        let core = SearchCore {
            fetcher,
            state,
            settle_delay: options.settle_delay,
        };

        // The debounced pathway is built once, here. Fired queries reach the
        // current search logic through this channel, so the wrapper keeps a
        // stable identity without timer churn per input event.
        let (query_tx, mut query_rx) = mpsc::unbounded_channel::<String>();
        let drain = core.clone();
        tokio::spawn(async move {
            while let Some(text) = query_rx.recv().await {
                // Spawned, not awaited: an overlapping search must race the
                // previous one rather than queue behind it.
                let core = drain.clone();
                tokio::spawn(async move {
                    core.search(&text).await;
                });
            }
        });

        UserSearcher {
            core,
            debouncer: Debouncer::new(options.debounce, query_tx),
            cleared: AtomicBool::new(false),
        }
    }

    /// Set the current search text. No network effect, no validation; an
    /// empty string is permitted and will be searched if the trigger fires.
    pub fn update_text(&self, text: &str) {
        self.core.state.lock().unwrap().text = text.to_string();
    }

    /// Reset `results` and `repos` to empty. Leaves `text` and `loading`
    /// untouched and does not cancel any in-flight search.
    pub fn clear_results(&self) {
        {
            let mut state = self.core.state.lock().unwrap();
            state.results = Value::Null;
            state.repos = Value::Null;
        }
        self.cleared.store(true, Ordering::Relaxed);
        // The flag has no functional consumer; the trace is its only output.
        debug!("clear flag set: {}", self.cleared.load(Ordering::Relaxed));
    }

    /// Schedule a search for `text` behind the quiescence window. Repeated
    /// calls within the window restart the timer; only the last fires.
    pub fn debounced_search(&self, text: &str) {
        self.debouncer.schedule(text.to_string());
    }

    /// Run a search immediately, bypassing the debouncer. Normally queries
    /// arrive through [`debounced_search`](UserSearcher::debounced_search).
    pub async fn search(&self, text: &str) {
        self.core.search(text).await;
    }

    /// Cheap clone of the current state for rendering.
    pub fn snapshot(&self) -> SearchState {
        self.core.state.lock().unwrap().clone()
    }
}
