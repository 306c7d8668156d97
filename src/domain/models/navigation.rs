/// Where a view should send the user next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// In-app path, handled by the client router.
    Route(String),
    /// Absolute URL, loaded as a full page.
    External(String),
}

impl Destination {
    pub fn route(path: impl Into<String>) -> Self {
        Destination::Route(path.into())
    }

    pub fn external(url: impl Into<String>) -> Self {
        Destination::External(url.into())
    }

    pub fn target(&self) -> &str {
        match self {
            Destination::Route(path) | Destination::External(path) => path,
        }
    }
}
