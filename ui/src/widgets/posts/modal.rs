use egui::{Context, Id, Modal};
use postview_business::PostsViewState;
use postview_states::StateCtx;

/// Detail overlay for the selected post. Dismissed by the Close button,
/// clicking the backdrop or pressing Escape.
pub fn post_detail_modal(state_ctx: &mut StateCtx, ctx: &Context) {
    let Some(post) = state_ctx.state::<PostsViewState>().selected().cloned() else {
        return;
    };

    let modal = Modal::new(Id::new("post_detail_modal")).show(ctx, |ui| {
        ui.set_max_width(420.0);

        ui.strong(post.title.raw());
        ui.separator();
        ui.label(&post.body);
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            if ui.button("Close").clicked() {
                ui.close();
            }
        });
    });

    if modal.should_close() {
        state_ctx.update::<PostsViewState>(|view| view.clear_selection());
    }
}
