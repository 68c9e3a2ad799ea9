use postview_business::{FetchPosts, FetchPostsCommand};

use crate::state::State;
use crate::widgets::{post_detail_modal, posts_panel};

/// Top level eframe application.
pub struct PostviewApp {
    pub state: State,
}

impl PostviewApp {
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for PostviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.sync_updates();

        // The post list is fetched once, on first display. There is no
        // refresh action, so a finished fetch never goes back to pending.
        if self.state.ctx.state::<FetchPosts>().is_idle() {
            let egui_ctx = ctx.clone();
            FetchPostsCommand::dispatch(&mut self.state.ctx, move || egui_ctx.request_repaint());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            posts_panel(&mut self.state.ctx, ui);
        });

        post_detail_modal(&mut self.state.ctx, ctx);
    }
}
