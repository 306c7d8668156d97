use serde::{Deserialize, Serialize};

fn authenticated_by_default() -> bool {
    true
}

/// Answer of `GET /api/check-auth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Older backends omit the flag and signal anonymity with a non-200 instead.
    #[serde(default = "authenticated_by_default")]
    pub authenticated: bool,
    #[serde(default)]
    pub username: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl Session {
    /// Name shown in greetings: the display name when set, else the username.
    pub fn shown_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// How a view reacts to a failed session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
    /// Send the visitor to `/login`.
    RequireLogin,
    /// Render anonymous content.
    Optional,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_name_prefers_display_name() {
        let session: Session =
            serde_json::from_str(r#"{"authenticated":true,"username":"ana","displayName":"Ana P."}"#)
                .unwrap();
        assert_eq!(session.shown_name(), "Ana P.");
    }

    #[test]
    fn test_shown_name_falls_back_to_username() {
        let session: Session =
            serde_json::from_str(r#"{"username":"ana","displayName":""}"#).unwrap();
        assert!(session.authenticated);
        assert_eq!(session.shown_name(), "ana");

        let session: Session = serde_json::from_str(r#"{"username":"bo"}"#).unwrap();
        assert_eq!(session.shown_name(), "bo");
    }

    #[test]
    fn test_explicit_anonymous_flag() {
        let session: Session = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
        assert!(!session.authenticated);
    }
}
