//! u601 — natural-language SQL assistant page
//!
//! - state.rs: view state and its transitions
//! - api.rs: HTTP calls to the assistant service
//! - view_model.rs: signal owner and commands (connect, run query)
//! - render.rs: result payload to table/text/placeholder
//! - view.rs: Leptos components

mod api;
pub mod render;
pub mod state;
mod view;
mod view_model;

pub use view::SqlAssistantPage;
pub use view_model::SqlAssistantViewModel;
