use uuid::Uuid;

/// Toasts disappear on their own after this long.
pub const TOAST_LIFETIME_MS: u64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

impl ToastSeverity {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "c-toast--success",
            ToastSeverity::Error => "c-toast--error",
            ToastSeverity::Info => "c-toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: Uuid,
    pub text: String,
    pub severity: ToastSeverity,
}

/// Stack of visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<ToastMessage>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, severity: ToastSeverity) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(ToastMessage {
            id,
            text: text.into(),
            severity,
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored, since a manual close may race the timer.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToastMessage> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.push("Lamp added to wishlist!", ToastSeverity::Success);
        let second = queue.push("Unable to add duplicate item to wishlist", ToastSeverity::Error);
        assert_eq!(queue.len(), 2);
        assert_ne!(first, second);

        queue.dismiss(first);
        let texts: Vec<&str> = queue.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Unable to add duplicate item to wishlist"]);
    }

    #[test]
    fn test_dismiss_twice_is_harmless() {
        let mut queue = ToastQueue::new();
        let id = queue.push("hello", ToastSeverity::Info);
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
