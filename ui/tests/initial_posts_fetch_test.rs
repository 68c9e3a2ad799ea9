//! Integration tests for the initial posts fetch on app load.
//!
//! A wiremock server stands in for the posts endpoint; the app is driven
//! frame by frame with egui_kittest.

mod common;

use kittest::Queryable;
use postview_business::FetchPosts;

use common::TestCtx;

#[tokio::test]
async fn test_initial_fetch_displays_posts() {
    let mut ctx = TestCtx::with_posts(common::sample_posts()).await;
    let harness = ctx.harness_mut();

    // First frame dispatches the fetch.
    harness.step();

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness.query_by_label_contains("qui est esse").is_some(),
        "first post title should be displayed after the fetch completes"
    );
    assert!(
        harness
            .query_by_label_contains("sunt aut facere repellat")
            .is_some(),
        "second post title should be displayed after the fetch completes"
    );
    assert!(
        harness.query_by_label("Page 1 of 1").is_some(),
        "two posts fit on a single page"
    );
}

#[tokio::test]
async fn test_loading_state_while_fetch_is_in_flight() {
    let mut ctx = TestCtx::with_delayed_posts(
        common::sample_posts(),
        std::time::Duration::from_secs(1),
    )
    .await;
    let harness = ctx.harness_mut();

    harness.step();

    // The delayed response cannot have arrived yet.
    let is_pending = harness
        .state_mut()
        .state
        .ctx
        .state::<FetchPosts>()
        .is_pending();
    if is_pending {
        assert!(
            harness.query_by_label_contains("Loading").is_some(),
            "loading indicator should be shown while the fetch is in flight"
        );
        assert!(
            harness.query_by_label_contains("Title").is_none(),
            "table should not render before the fetch completes"
        );
    }
}

#[tokio::test]
async fn test_fetch_happens_only_once() {
    let mut ctx = TestCtx::with_posts(common::sample_posts()).await;
    let harness = ctx.harness_mut();

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    // After the fetch settled, further frames must leave the result alone.
    let posts_len = harness
        .state_mut()
        .state
        .ctx
        .state::<FetchPosts>()
        .posts()
        .map(<[_]>::len);
    assert_eq!(posts_len, Some(2));

    for _ in 0..5 {
        harness.step();
    }
    assert!(
        !harness
            .state_mut()
            .state
            .ctx
            .state::<FetchPosts>()
            .is_pending(),
        "a finished fetch should never go back to pending"
    );
}
