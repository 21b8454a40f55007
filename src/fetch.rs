//! Fetch dispatcher
//!
//! Runs [`FetchRequest`]s against OMDb on tokio tasks and hands the results
//! back to the event loop over an mpsc channel. A new request aborts the
//! in-flight task of the same kind; the controller's generation check is
//! what actually keeps stale replies out of state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::OmdbClient;
use crate::controller::{FetchKind, FetchOutcome, FetchRequest};

/// Channel pair carrying outcomes back to the event loop
pub fn channel() -> (UnboundedSender<FetchOutcome>, UnboundedReceiver<FetchOutcome>) {
    mpsc::unbounded_channel()
}

/// Perform one request and tag the result with its generation
pub async fn execute(client: &OmdbClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Search { generation, query } => FetchOutcome::Search {
            generation,
            result: client.search_by_title(&query).await,
        },
        FetchRequest::Detail {
            generation,
            imdb_id,
        } => FetchOutcome::Detail {
            generation,
            result: client.fetch_by_id(&imdb_id).await,
        },
    }
}

pub struct Fetcher {
    client: Arc<OmdbClient>,
    outcomes: UnboundedSender<FetchOutcome>,
    in_flight: HashMap<FetchKind, JoinHandle<()>>,
}

impl Fetcher {
    pub fn new(client: OmdbClient, outcomes: UnboundedSender<FetchOutcome>) -> Self {
        Self {
            client: Arc::new(client),
            outcomes,
            in_flight: HashMap::new(),
        }
    }

    /// Spawn the request. Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, request: FetchRequest) {
        let kind = request.kind();
        self.cancel(kind);

        debug!(?kind, generation = request.generation(), "dispatching fetch");
        let client = Arc::clone(&self.client);
        let outcomes = self.outcomes.clone();
        let handle = tokio::spawn(async move {
            let outcome = execute(&client, request).await;
            if outcomes.send(outcome).is_err() {
                debug!("outcome receiver dropped");
            }
        });

        self.in_flight.insert(kind, handle);
    }

    /// Abort the in-flight task of this kind, if any
    pub fn cancel(&mut self, kind: FetchKind) {
        if let Some(handle) = self.in_flight.remove(&kind) {
            if !handle.is_finished() {
                debug!(?kind, "aborting superseded fetch");
                handle.abort();
            }
        }
    }

    pub fn is_in_flight(&self, kind: FetchKind) -> bool {
        self.in_flight
            .get(&kind)
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }
}
