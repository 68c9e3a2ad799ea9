use std::fmt::Debug;
use std::sync::Arc;

use ehttp::{Request, Response, Result};
use postview_states::{State, state_assign_impl};

/// Transport seam for the one network call this app makes.
///
/// Production uses [`EhttpFetcher`]; tests inject [`MockFetcher`] so no
/// socket is needed.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done)
    }
}

/// The fetch service as a registry state, so commands can reach the
/// transport through the [`StateCtx`](postview_states::StateCtx).
#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl Default for FetchState {
    fn default() -> Self {
        Self {
            inner: Arc::new(EhttpFetcher),
        }
    }
}

impl State for FetchState {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn std::any::Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Replays a canned response synchronously. Without one set, every request
/// fails, which is also useful for transport-error tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    pub response: Option<Result<Response>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    /// A mock that answers `status` with `body` for any request.
    pub fn with_response(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Some(Ok(Response {
                url: String::new(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                bytes: body.into(),
                headers: ehttp::Headers::default(),
            })),
        }
    }

    /// A mock whose requests fail with a transport error.
    pub fn with_transport_error(message: impl Into<String>) -> Self {
        Self {
            response: Some(Err(message.into())),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(
        &self,
        _request: Request,
        on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>,
    ) {
        if let Some(response) = &self.response {
            on_done(response.clone());
        } else {
            on_done(Err("MockFetcher: no response set".to_owned()));
        }
    }
}
