use std::time::Duration;

use log::debug;

use super::SearchError;
use super::response::SearchEnvelope;
use crate::request::SearchRequest;
use crate::types::Scholarship;

/// HTTP client for the scholarship search service.
///
/// The endpoint is injected at construction rather than read from a global,
/// so tests can point the client at a local double. One instance is shared
/// across submits; `ureq::Agent` is cheaply cloneable.
#[derive(Debug, Clone)]
pub struct ScholarshipClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl ScholarshipClient {
    /// Create a client for `endpoint`, applying `timeout` to every call.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let endpoint = endpoint.into();
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { endpoint, agent }
    }

    /// The endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET to `<endpoint>/search` and decode the scholarship list.
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Scholarship>, SearchError> {
        let url = format!("{}/search", self.endpoint.trim_end_matches('/'));
        debug!("searching {url} with query term '{}'", request.query());

        let mut call = self.agent.get(&url);
        for (key, value) in request.params() {
            call = call.query(key, value);
        }

        let response = match call.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(SearchError::Status { code }),
            Err(ureq::Error::Transport(transport)) => {
                return Err(SearchError::Transport(transport.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|err| SearchError::Body(err.to_string()))?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|err| SearchError::Decode(err.to_string()))?;

        let scholarships = envelope.into_scholarships();
        debug!("search returned {} scholarships", scholarships.len());
        Ok(scholarships)
    }
}
