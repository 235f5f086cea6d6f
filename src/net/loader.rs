//! Background record loading for one presentation surface.
//!
//! Each surface (the dialog, the full page) owns its own loader, so two
//! surfaces open at once fetch twice. Requests run on spawned threads and
//! report through a channel the UI drains every frame. Responses are
//! applied in arrival order: whichever lands last is what is shown.

use std::sync::mpsc;
use std::sync::Arc;

use super::fetch::{FetchError, RecordSource};
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// Localized message for the error panel.
    Failed(String),
    Ready(Vec<Record>),
}

type Outcome = Result<Vec<Record>, FetchError>;

pub struct RecordLoader {
    source: Arc<dyn RecordSource>,
    tx: mpsc::Sender<Outcome>,
    rx: mpsc::Receiver<Outcome>,
    state: LoadState,
    issued: u64,
}

impl RecordLoader {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            state: LoadState::Idle,
            issued: 0,
        }
    }

    /// Issue a fetch. `notify` runs on the worker once the result is queued,
    /// typically to request a repaint.
    pub fn start<N>(&mut self, notify: N)
    where
        N: FnOnce() + Send + 'static,
    {
        self.state = LoadState::Loading;
        self.issued += 1;

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        log::info!("Loading human books from {}", source.describe());

        std::thread::spawn(move || {
            let result = source.fetch_records();
            let _ = tx.send(result);
            notify();
        });
    }

    /// Re-issue the identical request after a failure.
    pub fn retry<N>(&mut self, notify: N)
    where
        N: FnOnce() + Send + 'static,
    {
        self.start(notify);
    }

    /// Apply every finished request. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            self.state = match outcome {
                Ok(records) => {
                    log::info!("Loaded {} human books", records.len());
                    LoadState::Ready(records)
                }
                Err(e) => {
                    log::error!("Human book fetch failed: {}", e);
                    LoadState::Failed(e.user_message().to_string())
                }
            };
            changed = true;
        }
        changed
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Loaded records, empty unless the last response succeeded.
    pub fn records(&self) -> &[Record] {
        match &self.state {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Number of requests issued over this loader's lifetime.
    pub fn requests_issued(&self) -> u64 {
        self.issued
    }
}
