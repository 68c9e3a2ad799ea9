use postview_business::{BusinessConfig, FetchPosts, FetchState, PostsViewState};
use postview_states::StateCtx;

/// All application state lives here, behind the type-keyed [`StateCtx`].
pub struct State {
    pub ctx: StateCtx,
}

fn base_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(config);
    ctx.add_state(FetchState::default());
    ctx.add_state(FetchPosts::default());
    ctx.add_state(PostsViewState::default());
    ctx
}

impl Default for State {
    fn default() -> Self {
        Self {
            ctx: base_ctx(BusinessConfig::default()),
        }
    }
}

impl State {
    /// State pointed at a test server instead of the public endpoint.
    pub fn test(base_url: String) -> Self {
        Self {
            ctx: base_ctx(BusinessConfig::new(base_url)),
        }
    }
}
