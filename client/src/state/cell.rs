//! Single-value reactive cell.

use std::fmt;

use tokio::sync::watch;

/// Holds one current value and notifies subscribers when it is written.
///
/// Writes succeed with or without subscribers. Every write notifies, even
/// when the new value equals the old one.
///
/// # Examples
/// ```
/// use reavise_client::state::StateCell;
///
/// let cell = StateCell::new(1);
/// let receiver = cell.subscribe();
/// cell.update(|value| *value += 1);
/// assert_eq!(cell.get(), 2);
/// assert!(receiver.has_changed().unwrap());
/// ```
pub struct StateCell<T> {
    sender: watch::Sender<T>,
}

impl<T> StateCell<T> {
    /// Cell starting at `initial`.
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        self.sender.send_modify(mutate);
    }

    /// Read the value without cloning it.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.sender.borrow())
    }

    /// A receiver that observes every later write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }
}

impl<T: Clone> StateCell<T> {
    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateCell").field(&*self.sender.borrow()).finish()
    }
}
