use egui_kittest::Harness;
use postview_ui::PostviewApp;
use postview_ui::state::State;
use wiremock::Mock;
use wiremock::matchers::{method, path};
use wiremock::{MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    /// Kept alive so the mocked endpoint stays up for the whole test.
    _mock_server: MockServer,
    harness: Harness<'a, PostviewApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, PostviewApp> {
        &mut self.harness
    }

    /// App whose posts endpoint answers 200 with `posts` as the JSON body.
    #[allow(unused)]
    pub async fn with_posts(posts: serde_json::Value) -> Self {
        Self::new(ResponseTemplate::new(200).set_body_json(posts)).await
    }

    /// App whose posts endpoint answers with a bare status code.
    #[allow(unused)]
    pub async fn with_status(status_code: u16) -> Self {
        Self::new(ResponseTemplate::new(status_code)).await
    }

    /// App whose posts endpoint answers `posts` after `delay`.
    #[allow(unused)]
    pub async fn with_delayed_posts(posts: serde_json::Value, delay: std::time::Duration) -> Self {
        Self::new(
            ResponseTemplate::new(200)
                .set_body_json(posts)
                .set_delay(delay),
        )
        .await
    }

    async fn new(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = PostviewApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }
}

/// A small fixed post list in the shape the endpoint serves.
#[allow(unused)]
pub fn sample_posts() -> serde_json::Value {
    serde_json::json!([
        {
            "userId": 1,
            "id": 1,
            "title": "qui est esse",
            "body": "est rerum tempore vitae sequi sint"
        },
        {
            "userId": 1,
            "id": 2,
            "title": "sunt aut facere repellat",
            "body": "quia et suscipit recusandae consequuntur"
        }
    ])
}
