use crate::request::SearchRequest;
use crate::service::SearchError;
use crate::types::Scholarship;

/// Commands understood by the background search dispatcher.
#[derive(Debug)]
pub(crate) enum SearchCommand {
    /// Run one search against the service.
    Submit {
        /// Identifier correlating the reply with the originating submit.
        id: u64,
        /// Snapshot of the filters to search with.
        request: SearchRequest,
    },
    /// Stop the dispatcher thread.
    Shutdown,
}

/// Reply produced by a request thread once its call finishes.
#[derive(Debug)]
pub(crate) struct SearchReply {
    pub(crate) id: u64,
    pub(crate) outcome: Result<Vec<Scholarship>, SearchError>,
}
