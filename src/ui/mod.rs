//! Interactive terminal front end: filter form, staged loading view and
//! results list.

mod actions;
mod components;
mod render;
mod runtime;
mod search;
mod state;
pub mod theme;

pub use runtime::SearchUi;
pub use state::App;
pub use theme::Theme;
