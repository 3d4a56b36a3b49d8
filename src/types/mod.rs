//! Records exchanged with the scholarship search service and the final
//! outcome of an interactive session.

use serde::{Deserialize, Serialize};

/// One scholarship returned by the search service.
///
/// The collection order is preserved exactly as the service returned it; no
/// deduplication or sorting is applied. Deadline and link are optional on the
/// wire and some records carry them as empty strings, which the accessors
/// treat the same as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scholarship {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub application_link: Option<String>,
}

impl Scholarship {
    /// Deadline text, if the record carries a non-empty one.
    #[must_use]
    pub fn deadline(&self) -> Option<&str> {
        non_empty(self.application_deadline.as_deref())
    }

    /// Application URL, if the record carries a non-empty one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        non_empty(self.application_link.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

/// Result of running the interactive search session to completion.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Whether the user accepted a scholarship rather than cancelling.
    pub accepted: bool,
    /// The base query term the session searched with.
    pub query: String,
    /// The scholarship the user accepted, if any.
    pub selection: Option<Scholarship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_deadline_counts_as_absent() {
        let scholarship = Scholarship {
            name: "STEM Grant".into(),
            description: "A grant".into(),
            application_deadline: Some("  ".into()),
            application_link: None,
        };

        assert_eq!(scholarship.deadline(), None);
        assert_eq!(scholarship.link(), None);
    }

    #[test]
    fn present_fields_are_exposed() {
        let scholarship = Scholarship {
            name: "STEM Grant".into(),
            description: "A grant".into(),
            application_deadline: Some("2025-06-01".into()),
            application_link: Some("https://example.com/apply".into()),
        };

        assert_eq!(scholarship.deadline(), Some("2025-06-01"));
        assert_eq!(scholarship.link(), Some("https://example.com/apply"));
    }

    #[test]
    fn optional_fields_default_when_missing_from_json() {
        let scholarship: Scholarship =
            serde_json::from_str(r#"{"name": "Grant", "description": "Text"}"#).unwrap();

        assert_eq!(scholarship.application_deadline, None);
        assert_eq!(scholarship.application_link, None);
    }
}
