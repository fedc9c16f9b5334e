//! Reactive application state observed by the UI layer.
//!
//! Each field of [`AppState`] is an independent [`StateCell`]. Cells do not
//! coordinate with each other: keeping `is_authenticated` in step with
//! `current_user`, for example, is the writer's job.

mod app_state;
mod cell;

pub use app_state::AppState;
pub use cell::StateCell;
