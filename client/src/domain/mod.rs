//! Domain model and ports for the ReaVise client.
//!
//! Purpose: declare the live data shapes exchanged with the backend and the
//! ports (transport, storage, latency) that facades depend on. Types here are
//! plain data; none of them enforces cross-record invariants such as id
//! uniqueness or post/user referential integrity.
//!
//! Public surface:
//! - User, Post, MediaItem, Category: feed and profile records.
//! - Comment, Message, Transaction, NftListing, CartItem: secondary records.
//! - LoginCredentials, Registration, AuthSession: authentication payloads.
//! - Notification, FeedMode, Envelope, Acknowledgement: UI-facing helpers.

pub mod auth;
pub mod commerce;
pub mod envelope;
pub mod feed;
pub mod notification;
pub mod ports;
pub mod post;
pub mod social;
pub mod user;

pub use self::auth::{AuthSession, AuthValidationError, LoginCredentials, Registration};
pub use self::commerce::{
    CartItem, ListingStatus, NftListing, PaymentMethod, Transaction, TransactionStatus,
};
pub use self::envelope::{Acknowledgement, Envelope};
pub use self::feed::FeedMode;
pub use self::notification::Notification;
pub use self::post::{Category, MediaItem, MediaType, NewPost, Post, PostQuery};
pub use self::social::{Comment, Message};
pub use self::user::User;
