//! Reusable rendering pieces for the search view.

mod form;
mod loading;
mod results;

pub(crate) use form::{FormContext, render_form};
pub(crate) use loading::{LoadingContext, render_loading};
pub(crate) use results::{card_items, chips_line};
