use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Adding,
    Removing,
}

/// Per-item in-flight operations, keyed by product key or wishlist id.
/// At most one operation per key runs at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationRegistry {
    active: HashMap<String, OperationStatus>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key` for `status`. Returns false if anything is already running on it.
    pub fn try_begin(&mut self, key: &str, status: OperationStatus) -> bool {
        if self.active.contains_key(key) {
            return false;
        }
        self.active.insert(key.to_string(), status);
        true
    }

    pub fn finish(&mut self, key: &str) {
        self.active.remove(key);
    }

    pub fn status(&self, key: &str) -> Option<OperationStatus> {
        self.active.get(key).copied()
    }

    pub fn is_active(&self, key: &str, status: OperationStatus) -> bool {
        self.status(key) == Some(status)
    }
}

/// Anything that can hold the registry across awaits: a Dioxus signal in
/// views, a plain shared cell in tests.
pub trait OperationStore {
    fn try_begin(&mut self, key: &str, status: OperationStatus) -> bool;
    fn finish(&mut self, key: &str);
}

impl OperationStore for Rc<RefCell<OperationRegistry>> {
    fn try_begin(&mut self, key: &str, status: OperationStatus) -> bool {
        self.borrow_mut().try_begin(key, status)
    }

    fn finish(&mut self, key: &str) {
        self.borrow_mut().finish(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused() {
        let mut registry = OperationRegistry::new();
        assert!(registry.try_begin("p-1", OperationStatus::Adding));
        assert!(!registry.try_begin("p-1", OperationStatus::Adding));
        assert!(!registry.try_begin("p-1", OperationStatus::Removing));
        assert!(registry.try_begin("p-2", OperationStatus::Adding));
    }

    #[test]
    fn test_finish_releases_key() {
        let mut registry = OperationRegistry::new();
        registry.try_begin("7", OperationStatus::Removing);
        assert!(registry.is_active("7", OperationStatus::Removing));
        registry.finish("7");
        assert_eq!(registry.status("7"), None);
        assert!(registry.try_begin("7", OperationStatus::Removing));
    }
}
