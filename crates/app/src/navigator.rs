//! Navigation signal shared by every view and the API gateway.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use brewpos::{
    navigation::{Gate, View, gate},
    session::Session,
};

/// Publishes the view the client should be showing.
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: Arc<watch::Sender<View>>,
}

impl Navigator {
    /// Create a navigator starting at `initial`.
    #[must_use]
    pub fn new(initial: View) -> Self {
        let (sender, _receiver) = watch::channel(initial);

        Self {
            sender: Arc::new(sender),
        }
    }

    /// Move to `view` unconditionally.
    pub fn navigate(&self, view: View) {
        debug!(%view, "navigating");

        self.sender.send_replace(view);
    }

    /// Move to `view` if the session allows it, otherwise to the gate's redirect.
    /// Returns the view actually shown.
    pub fn open(&self, view: View, session: Option<&Session>) -> View {
        let target = match gate(view, session) {
            Gate::Allow => view,
            Gate::Redirect(redirect) => redirect,
        };

        self.navigate(target);

        target
    }

    /// Currently published view.
    #[must_use]
    pub fn current(&self) -> View {
        *self.sender.borrow()
    }

    /// Watch for view changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.sender.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(View::Login)
    }
}
