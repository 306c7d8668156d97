use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use uuid::Uuid;

use crate::domain::models::{ToastQueue, ToastSeverity, TOAST_LIFETIME_MS};
use crate::shared::utils::sleep_ms;

/// Handle for pushing toasts onto the shared queue.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    /// Show a toast; it is dismissed automatically after the toast lifetime.
    ///
    /// The expiry runs in the root scope, so it survives the caller being
    /// unmounted by a navigation.
    pub fn show(&self, text: impl Into<String>, severity: ToastSeverity) -> Uuid {
        let mut queue = self.queue;
        let id = queue.write().push(text, severity);
        spawn_forever(async move {
            sleep_ms(TOAST_LIFETIME_MS).await;
            queue.write().dismiss(id);
        });
        id
    }

    pub fn success(&self, text: impl Into<String>) -> Uuid {
        self.show(text, ToastSeverity::Success)
    }

    pub fn error(&self, text: impl Into<String>) -> Uuid {
        self.show(text, ToastSeverity::Error)
    }

    pub fn dismiss(&self, id: Uuid) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn queue(&self) -> Signal<ToastQueue> {
        self.queue
    }
}

/// Install the toast queue. Call once, in the root layout.
pub fn use_toast_provider() -> Toaster {
    let queue = use_context_provider(|| Signal::new(ToastQueue::new()));
    Toaster { queue }
}

pub fn use_toast() -> Toaster {
    Toaster {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}
