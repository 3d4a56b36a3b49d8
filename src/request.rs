//! The outbound query derived from the current filter values.

use crate::filters::FilterState;

/// Read-only projection of a [`FilterState`] snapshot into the query
/// parameters the search service expects.
///
/// Built fresh on every submit and never persisted. The fixed base query term
/// always leads, followed by the non-empty filter entries in form order;
/// unset filters never appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    params: Vec<(&'static str, String)>,
}

impl SearchRequest {
    /// Project `filters` onto the wire, prefixed with the base query term.
    #[must_use]
    pub fn new(query: impl Into<String>, filters: &FilterState) -> Self {
        Self {
            query: query.into(),
            params: filters.entries(),
        }
    }

    /// The base query term.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Every `(key, value)` pair to serialize, including the query term.
    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> {
        std::iter::once(("query", self.query.as_str()))
            .chain(self.params.iter().map(|(key, value)| (*key, value.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterField, Gender};

    #[test]
    fn query_term_always_leads_the_parameters() {
        let request = SearchRequest::new("scholarships", &FilterState::new());
        let params: Vec<_> = request.params().collect();

        assert_eq!(params, vec![("query", "scholarships")]);
    }

    #[test]
    fn parameters_are_exactly_the_non_empty_filters() {
        let mut filters = FilterState::new();
        filters.gpa = "3.8".into();
        filters.gender = Some(Gender::Other);
        filters.financial_need = true;

        let request = SearchRequest::new("scholarships", &filters);
        let params: Vec<_> = request.params().collect();

        assert_eq!(
            params,
            vec![
                ("query", "scholarships"),
                ("gpa", "3.8"),
                ("gender", "other"),
                ("financialNeed", "true"),
            ]
        );
    }

    #[test]
    fn request_is_a_snapshot_of_the_filters() {
        let mut filters = FilterState::new();
        filters.location = "Ohio".into();

        let request = SearchRequest::new("scholarships", &filters);
        filters.clear(FilterField::Location);

        assert!(request.params().any(|(key, value)| key == "location" && value == "Ohio"));
    }
}
