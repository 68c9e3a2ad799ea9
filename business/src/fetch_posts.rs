//! Fetch-posts command + result cache.
//!
//! Fetching the post list is a side effect (network IO), so it lives in an
//! explicitly dispatched command rather than in any implicitly recomputed
//! view code. The command stamps its dispatch with a task generation from the
//! [`StateCtx`]; a completion arriving after a newer dispatch (or after the
//! owning view is gone) is discarded by `sync_updates` instead of being
//! committed.

use std::any::Any;

use log::{error, info};
use postview_states::{State, StateCtx, state_assign_impl};

use crate::{BusinessConfig, FetchState, Post};

/// Error message for a response with a non-success status.
pub const NETWORK_NOT_OK: &str = "Network response was not ok";

/// Result of the one-shot post list fetch.
///
/// Transitions: `Idle → Pending → Success | Error`. There is no way back to
/// `Pending`; the list is fetched exactly once per app lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchPostsResult {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// Fetch in progress.
    Pending,
    /// Posts fetched successfully.
    Success(Vec<Post>),
    /// Fetch failed with an error message.
    Error(String),
}

/// Registry state holding the latest fetch outcome.
#[derive(Debug, Clone, Default)]
pub struct FetchPosts {
    pub result: FetchPostsResult,
}

impl FetchPosts {
    pub fn is_idle(&self) -> bool {
        matches!(self.result, FetchPostsResult::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.result, FetchPostsResult::Pending)
    }

    /// The fetched posts, if the fetch succeeded.
    pub fn posts(&self) -> Option<&[Post]> {
        if let FetchPostsResult::Success(ref posts) = self.result {
            Some(posts)
        } else {
            None
        }
    }

    /// The error message, if the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        if let FetchPostsResult::Error(ref message) = self.result {
            Some(message)
        } else {
            None
        }
    }
}

impl State for FetchPosts {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Manual-only command that fetches the post list.
#[derive(Debug, Default)]
pub struct FetchPostsCommand;

impl FetchPostsCommand {
    /// Issue the GET for the post list and commit the outcome through the
    /// context's updater channel.
    ///
    /// `request_repaint` is invoked from the transport callback so the UI
    /// wakes up and applies the result.
    pub fn dispatch(ctx: &mut StateCtx, request_repaint: impl Fn() + Send + 'static) {
        let url = ctx.state::<BusinessConfig>().posts_url();
        let fetcher = ctx.state::<FetchState>().inner.clone();

        info!("FetchPostsCommand: fetching posts from {url}");
        ctx.update::<FetchPosts>(|fetch| fetch.result = FetchPostsResult::Pending);

        let updater = ctx.begin_task::<FetchPosts>();
        let request = ehttp::Request::get(url.as_str());

        fetcher.fetch(
            request,
            Box::new(move |result| {
                let outcome = match result {
                    Ok(response) if response.ok => {
                        match serde_json::from_slice::<Vec<Post>>(&response.bytes) {
                            Ok(posts) => {
                                info!("FetchPostsCommand: fetched {} posts", posts.len());
                                FetchPostsResult::Success(posts)
                            }
                            Err(e) => {
                                error!("FetchPostsCommand: failed to parse post list: {e}");
                                FetchPostsResult::Error(e.to_string())
                            }
                        }
                    }
                    Ok(response) => {
                        error!("FetchPostsCommand: server answered status {}", response.status);
                        FetchPostsResult::Error(NETWORK_NOT_OK.to_owned())
                    }
                    Err(err) => {
                        error!("FetchPostsCommand: request failed: {err}");
                        FetchPostsResult::Error(err)
                    }
                };
                updater.set(FetchPosts { result: outcome });
                request_repaint();
            }),
        );
    }
}
