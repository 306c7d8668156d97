use dioxus::prelude::*;

use crate::domain::models::{OperationRegistry, OperationStatus, OperationStore};

impl OperationStore for Signal<OperationRegistry> {
    fn try_begin(&mut self, key: &str, status: OperationStatus) -> bool {
        self.write().try_begin(key, status)
    }

    fn finish(&mut self, key: &str) {
        self.write().finish(key)
    }
}

/// View-local registry of per-item operations.
pub fn use_operations() -> Signal<OperationRegistry> {
    use_signal(OperationRegistry::new)
}
