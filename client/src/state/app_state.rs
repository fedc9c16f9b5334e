//! Application-wide state passed explicitly to consumers.

use std::future::Future;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::StateCell;
use crate::domain::ports::{AUTH_TOKEN_KEY, KeyValueStore};
use crate::domain::{AuthSession, CartItem, FeedMode, Notification, Post, User};

/// Everything the UI observes, one cell per concern.
#[derive(Debug, Default)]
pub struct AppState {
    /// Signed-in user, if any.
    pub current_user: StateCell<Option<User>>,
    /// Whether a session is active.
    pub is_authenticated: StateCell<bool>,
    /// Bearer token of the active session.
    pub auth_token: StateCell<Option<String>>,
    /// Home feed selection.
    pub feed_mode: StateCell<FeedMode>,
    /// Cart lines in insertion order.
    pub cart: StateCell<Vec<CartItem>>,
    /// Posts currently shown.
    pub posts: StateCell<Vec<Post>>,
    /// Activity tray, oldest first.
    pub notifications: StateCell<Vec<Notification>>,
    /// Whether a load is in flight.
    pub is_loading: StateCell<bool>,
}

impl AppState {
    /// Fresh state: signed out, `ForYou` feed, everything empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful login or registration and persist its token.
    pub fn apply_session(&self, session: AuthSession, store: &dyn KeyValueStore) {
        store.set(AUTH_TOKEN_KEY, &session.token);
        self.auth_token.set(Some(session.token));
        self.current_user.set(Some(session.user));
        self.is_authenticated.set(true);
    }

    /// Forget the signed-in user. The stored token is left to the caller.
    pub fn clear_session(&self) {
        self.current_user.set(None);
        self.auth_token.set(None);
        self.is_authenticated.set(false);
    }

    /// Snapshot `post` into the cart.
    pub fn add_to_cart(&self, post: &Post, added_at: DateTime<Utc>) {
        let item = CartItem::snapshot(post, added_at);
        debug!(post_id = %item.post_id, "adding post to cart");
        self.cart.update(|cart| cart.push(item));
    }

    /// Drop every cart line for `post_id`.
    pub fn remove_from_cart(&self, post_id: &str) {
        self.cart.update(|cart| cart.retain(|item| item.post_id != post_id));
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.cart.set(Vec::new());
    }

    /// Append a notification to the tray.
    pub fn push_notification(&self, notification: Notification) {
        self.notifications
            .update(|notifications| notifications.push(notification));
    }

    /// Run `load` with `is_loading` raised, lowering it afterwards.
    ///
    /// The flag is also lowered when the returned future is dropped before
    /// completion, e.g. by a timeout or `select!`.
    pub async fn while_loading<F: Future>(&self, load: F) -> F::Output {
        self.is_loading.set(true);
        let _lowered = LoadingGuard(&self.is_loading);
        load.await
    }
}

/// Lowers the loading flag when dropped.
struct LoadingGuard<'a>(&'a StateCell<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::time::Duration;

    use super::*;
    use crate::domain::ports::MemoryKeyValueStore;
    use crate::domain::{Category, User};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn post() -> Post {
        Post {
            id: "p1".to_owned(),
            user_id: "u1".to_owned(),
            username: "maker".to_owned(),
            user_avatar: None,
            user_location: None,
            media: Vec::new(),
            description: "Pine chest".to_owned(),
            category: Category::Lot,
            hashtags: Vec::new(),
            likes_count: 0,
            comments_count: 0,
            is_liked: false,
            created_at: at(),
        }
    }

    fn user() -> User {
        User {
            id: "u1".to_owned(),
            username: "maker".to_owned(),
            email: "maker@reavise.test".to_owned(),
            profile_photo: None,
            bio: None,
            website: None,
            location: None,
            followers_count: 0,
            following_count: 0,
            is_business_account: false,
            is_verified: false,
            created_at: at(),
        }
    }

    #[test]
    fn starts_signed_out_on_the_for_you_feed() {
        let state = AppState::new();
        assert_eq!(state.feed_mode.get(), FeedMode::ForYou);
        assert!(!state.is_authenticated.get());
        assert!(state.current_user.get().is_none());
        assert!(state.cart.get().is_empty());
        assert!(!state.is_loading.get());
    }

    #[rstest]
    fn cart_holds_snapshots_not_live_posts(mut post: Post) {
        let state = AppState::new();
        state.add_to_cart(&post, at());
        post.description = "Edited later".to_owned();

        let cart = state.cart.get();
        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.first().map(|item| item.post.description.as_str()),
            Some("Pine chest")
        );
    }

    #[rstest]
    fn remove_and_clear_cart(post: Post) {
        let state = AppState::new();
        state.add_to_cart(&post, at());
        state.add_to_cart(&post, at());
        state.remove_from_cart("other");
        assert_eq!(state.cart.get().len(), 2);

        state.remove_from_cart("p1");
        assert!(state.cart.get().is_empty());

        state.add_to_cart(&post, at());
        state.clear_cart();
        assert!(state.cart.get().is_empty());
    }

    #[test]
    fn session_round_trip_updates_cells_and_store() {
        let state = AppState::new();
        let store = MemoryKeyValueStore::default();
        state.apply_session(
            AuthSession {
                user: user(),
                token: "jwt".to_owned(),
            },
            &store,
        );

        assert!(state.is_authenticated.get());
        assert_eq!(state.auth_token.get().as_deref(), Some("jwt"));
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("jwt"));

        state.clear_session();
        assert!(!state.is_authenticated.get());
        assert!(state.current_user.get().is_none());
    }

    #[test]
    fn notifications_append_in_order() {
        let state = AppState::new();
        state.push_notification(Notification::Follow {
            from_user_id: "u2".to_owned(),
            at: at(),
        });
        state.push_notification(Notification::Like {
            post_id: "p1".to_owned(),
            from_user_id: "u3".to_owned(),
            at: at(),
        });
        let tray = state.notifications.get();
        assert!(matches!(tray.as_slice(), [Notification::Follow { .. }, Notification::Like { .. }]));
    }

    #[tokio::test]
    async fn loading_flag_brackets_the_load() {
        let state = AppState::new();
        let seen = state
            .while_loading(async { state.is_loading.get() })
            .await;
        assert!(seen);
        assert!(!state.is_loading.get());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_load_lowers_the_flag() {
        let state = AppState::new();
        let outcome = tokio::time::timeout(
            Duration::from_millis(10),
            state.while_loading(tokio::time::sleep(Duration::from_secs(5))),
        )
        .await;
        assert!(outcome.is_err(), "load should time out");
        assert!(!state.is_loading.get());
    }

    #[tokio::test]
    async fn load_losing_a_select_lowers_the_flag() {
        let state = AppState::new();
        tokio::select! {
            biased;
            () = state.while_loading(std::future::pending::<()>()) => {
                panic!("pending load cannot complete");
            }
            () = tokio::task::yield_now() => {}
        }
        assert!(!state.is_loading.get());
    }
}
