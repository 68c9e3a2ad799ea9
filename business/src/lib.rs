//! Domain logic for the posts table viewer.
//!
//! Everything here is UI-toolkit free: the [`Post`] record model, the
//! filter → sort → paginate view pipeline, configuration, and the fetch
//! command that loads the post list over HTTP.

mod config;
mod fetch_posts;
mod fetch_service;
mod post;
mod view;

pub use config::BusinessConfig;
pub use fetch_posts::{FetchPosts, FetchPostsCommand, FetchPostsResult, NETWORK_NOT_OK};
pub use fetch_service::{EhttpFetcher, FetchService, FetchState};
pub use post::{Post, PostTitle};
pub use view::{
    ColumnKey, PAGE_SIZE, PostsViewState, SortDirection, SortSpec, filter_posts, page_slice,
    sort_posts, total_pages,
};

#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
