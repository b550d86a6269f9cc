//! Web layer for the dashboard.
//!
//! Serves the computed dashboard snapshot as JSON and hosts the static
//! display shell. Rendering is entirely the shell's job; the snapshot is a
//! plain data structure with named slots.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
