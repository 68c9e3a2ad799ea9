//! Integration tests for failed posts fetches.

mod common;

use kittest::Queryable;

use common::TestCtx;

#[tokio::test]
async fn test_server_error_shows_fixed_message() {
    let mut ctx = TestCtx::with_status(500).await;
    let harness = ctx.harness_mut();

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("Error: Network response was not ok")
            .is_some(),
        "non-2xx responses should surface the fixed error message"
    );
    assert!(
        harness.query_by_label_contains("Title").is_none(),
        "table should not render after a failed fetch"
    );
}

#[tokio::test]
async fn test_not_found_shows_fixed_message() {
    let mut ctx = TestCtx::with_status(404).await;
    let harness = ctx.harness_mut();

    harness.step();
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..10 {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("Error: Network response was not ok")
            .is_some(),
        "the message does not distinguish status codes"
    );
}
