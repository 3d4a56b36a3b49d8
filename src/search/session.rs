use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::commands::{SearchCommand, SearchReply};
use super::worker;
use crate::request::SearchRequest;
use crate::service::{ScholarshipClient, SearchError};
use crate::types::Scholarship;

/// Lifecycle of the current search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search has been submitted yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request completed and its results are current.
    Succeeded,
    /// The latest request failed; see [`SearchSession::error`].
    Failed,
}

/// Owns the search lifecycle on the UI side.
///
/// Each submit allocates a monotonically increasing query id and publishes it
/// as the latest before the command leaves for the worker. Replies carry
/// their originating id, and [`apply`](Self::apply) discards any reply that
/// is not the latest, so resubmitting while a search is in flight is safe:
/// the last submitted search determines the final state, regardless of which
/// response lands last.
pub struct SearchSession {
    tx: Sender<SearchCommand>,
    rx: Receiver<SearchReply>,
    latest_query_id: Arc<AtomicU64>,
    next_query_id: u64,
    current_query_id: Option<u64>,
    status: SearchStatus,
    scholarships: Vec<Scholarship>,
    error: Option<SearchError>,
}

impl SearchSession {
    /// Spawn the background worker and wrap its channels in a session.
    #[must_use]
    pub fn new(client: ScholarshipClient) -> Self {
        let (tx, rx, latest_query_id) = worker::spawn(client);
        Self {
            tx,
            rx,
            latest_query_id,
            next_query_id: 0,
            current_query_id: None,
            status: SearchStatus::Idle,
            scholarships: Vec::new(),
            error: None,
        }
    }

    /// Submit a search, superseding any request still in flight.
    pub fn submit(&mut self, request: SearchRequest) {
        self.next_query_id = self.next_query_id.saturating_add(1);
        let id = self.next_query_id;
        self.current_query_id = Some(id);
        self.status = SearchStatus::Loading;
        self.error = None;
        self.latest_query_id.store(id, Ordering::Release);
        let _ = self.tx.send(SearchCommand::Submit { id, request });
    }

    /// Drain pending replies, returning whether any was applied.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        loop {
            match self.rx.try_recv() {
                Ok(reply) => applied |= self.apply(reply),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    /// Apply one reply if it corresponds to the most recent submit.
    ///
    /// A failed reply keeps the previous collection in memory; whether it is
    /// shown is the presenter's decision, gated on the status.
    pub(crate) fn apply(&mut self, reply: SearchReply) -> bool {
        if Some(reply.id) != self.current_query_id {
            return false;
        }

        match reply.outcome {
            Ok(scholarships) => {
                self.scholarships = scholarships;
                self.status = SearchStatus::Succeeded;
                self.error = None;
            }
            Err(err) => {
                self.status = SearchStatus::Failed;
                self.error = Some(err);
            }
        }
        true
    }

    /// Current request lifecycle state.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Results of the last completed search.
    #[must_use]
    pub fn scholarships(&self) -> &[Scholarship] {
        &self.scholarships
    }

    /// The failure recorded for the latest request, if any.
    #[must_use]
    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    /// Ask the background worker to exit.
    pub fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }

    #[cfg(test)]
    pub(crate) fn current_id(&self) -> Option<u64> {
        self.current_query_id
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
