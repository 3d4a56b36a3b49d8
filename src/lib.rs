//! Scholarship search: a typed client for the scholarship search service
//! plus an interactive terminal UI around it.

pub mod app_dirs;
pub mod filters;
pub mod progress;
pub mod request;
pub mod search;
pub mod service;
pub mod types;
pub mod ui;

pub use filters::{FilterField, FilterState};
pub use progress::SearchProgress;
pub use request::SearchRequest;
pub use service::{ScholarshipClient, SearchError};
pub use types::{Scholarship, SearchOutcome};
pub use ui::SearchUi;
