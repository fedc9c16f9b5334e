//! Errors raised by the demo facade.

use crate::domain::ports::define_port_error;

define_port_error! {
    /// Lookup misses in demo mode.
    pub enum DemoApiError {
        /// No fixture user has the requested id.
        UserNotFound { id: String } => "User not found: {id}",
        /// No fixture post has the requested id.
        PostNotFound { id: String } => "Post not found: {id}",
        /// The dataset has no user to act as the signed-in account.
        NoCurrentUser => "demo dataset has no users",
    }
}
