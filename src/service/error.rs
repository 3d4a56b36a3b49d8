use thiserror::Error;

/// Failure modes of a single search call.
///
/// The variants separate "the service could not be reached" from "the service
/// answered with something we did not expect", so the UI can tell the user
/// which of the two happened instead of collapsing every failure into one
/// silent log line.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a response: DNS, connect, TLS or timeout.
    #[error("search service unreachable: {0}")]
    Transport(String),
    /// The service answered with a non-success HTTP status.
    #[error("search service returned HTTP {code}")]
    Status { code: u16 },
    /// The response body could not be read to completion.
    #[error("failed to read search response body: {0}")]
    Body(String),
    /// The body was not the expected `results.data.scholarships` envelope.
    #[error("unexpected search response shape: {0}")]
    Decode(String),
}

impl SearchError {
    /// Short label for the user-facing error line.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Transport(_) => "Search service unreachable",
            Self::Status { .. } => "Search service rejected the request",
            Self::Body(_) | Self::Decode(_) => "Search service sent an unexpected response",
        }
    }
}
