//! Recording transport for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::shared::errors::TransportError;

#[derive(Debug, Clone)]
enum Scripted {
    Respond(ApiResponse),
    Fail(TransportError),
}

/// Answers requests by path from a script and records everything it sees.
///
/// Scripted answers for a path are consumed in order; the last one sticks.
/// Unscripted paths answer 404.
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<HashMap<String, VecDeque<Scripted>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    requests: RefCell<Vec<ApiRequest>>,
    forms: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, response: ApiResponse) {
        self.push(path, Scripted::Respond(response));
    }

    pub fn fail(&self, path: &str, message: &str) {
        self.push(path, Scripted::Fail(TransportError::Network(message.to_string())));
    }

    /// Hold the next request to `path` until the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.path() == path)
            .cloned()
            .collect()
    }

    /// Form-fallback submissions as `(action, fields)`.
    pub fn forms(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.forms.borrow().clone()
    }

    fn push(&self, path: &str, entry: Scripted) {
        self.script
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(entry);
    }

    fn next(&self, path: &str) -> Option<Scripted> {
        let mut script = self.script.borrow_mut();
        let queue = script.get_mut(path)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let path = request.path().to_string();
        self.requests.borrow_mut().push(request);

        let gate = self.gates.borrow_mut().remove(&path);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match self.next(&path) {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(err)) => Err(err),
            None => Ok(ApiResponse::new(404, "Not Found")),
        }
    }

    async fn submit_form(
        &self,
        action: &str,
        fields: &[(String, String)],
    ) -> Result<(), TransportError> {
        self.forms
            .borrow_mut()
            .push((action.to_string(), fields.to_vec()));
        Ok(())
    }
}
