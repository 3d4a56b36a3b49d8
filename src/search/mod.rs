//! Background search execution and request lifecycle tracking.

mod commands;
mod session;
mod worker;

pub(crate) use commands::SearchReply;
pub use session::{SearchSession, SearchStatus};
