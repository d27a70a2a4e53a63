//! Background vocabulary load with a one-shot handoff to the UI loop.

use drill_core::{Deck, LoadError};
use std::path::{Path, PathBuf};
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// State of a background load as seen by the consumer.
#[derive(Debug)]
pub enum LoadStatus {
    Pending,
    Ready(Deck),
    Failed(LoadError),
}

/// Receiving end of a load started by [`spawn`].
#[derive(Debug)]
pub struct PendingDeck {
    path: PathBuf,
    rx: oneshot::Receiver<Result<Deck, LoadError>>,
}

/// Read and shuffle the vocabulary on the runtime's blocking pool.
pub fn spawn(runtime: &Handle, path: PathBuf) -> PendingDeck {
    let (tx, rx) = oneshot::channel();
    let worker_path = path.clone();

    runtime.spawn_blocking(move || {
        tracing::info!(path = %worker_path.display(), "loading vocabulary");
        let result = Deck::open(&worker_path);
        match &result {
            Ok(deck) => tracing::info!(entries = deck.len(), "vocabulary loaded"),
            Err(e) => tracing::error!(error = %e, "vocabulary load failed"),
        }
        // The receiver may already be gone if the UI quit while loading.
        let _ = tx.send(result);
    });

    PendingDeck { path, rx }
}

impl PendingDeck {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check for a result without blocking.
    pub fn poll(&mut self) -> LoadStatus {
        match self.rx.try_recv() {
            Ok(Ok(deck)) => LoadStatus::Ready(deck),
            Ok(Err(e)) => LoadStatus::Failed(e),
            Err(TryRecvError::Empty) => LoadStatus::Pending,
            Err(TryRecvError::Closed) => LoadStatus::Failed(LoadError::Interrupted),
        }
    }

    /// Wait for the load to finish.
    pub async fn wait(self) -> Result<Deck, LoadError> {
        self.rx.await.unwrap_or(Err(LoadError::Interrupted))
    }
}
