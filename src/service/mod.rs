//! HTTP access to the external scholarship search service.

mod client;
#[cfg(test)]
pub(crate) mod doubles;
mod error;
mod response;

pub use client::ScholarshipClient;
pub use error::SearchError;
