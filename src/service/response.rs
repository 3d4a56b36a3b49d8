//! Typed mirror of the search service response body.
//!
//! The service wraps its payload in a fixed nesting: the scholarship list
//! lives at `results.data.scholarships`. Decoding through these structs makes
//! a missing level a distinguishable decode error rather than a crash on
//! dynamic field access.

use serde::Deserialize;

use crate::types::Scholarship;

#[derive(Debug, Deserialize)]
pub(super) struct SearchEnvelope {
    results: ResultsSection,
}

#[derive(Debug, Deserialize)]
struct ResultsSection {
    data: ResultsData,
}

#[derive(Debug, Deserialize)]
struct ResultsData {
    scholarships: Vec<Scholarship>,
}

impl SearchEnvelope {
    /// Unwrap the nested payload into the scholarship list.
    pub(super) fn into_scholarships(self) -> Vec<Scholarship> {
        self.results.data.scholarships
    }
}
