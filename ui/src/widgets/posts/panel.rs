use egui::{Button, Color32, TextEdit, Ui};
use postview_business::{FetchPosts, PostsViewState, page_slice, total_pages};
use postview_states::StateCtx;

use super::table::{self, RowEvent, columns::post_columns};

enum PageNav {
    Prev,
    Next,
}

/// The posts view: heading, search box, table and pagination controls.
///
/// Rendering borrows the states immutably and collects what the user did
/// into locals; mutations are applied afterwards, avoiding borrow issues.
pub fn posts_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    {
        let fetch = state_ctx.state::<FetchPosts>();

        if fetch.is_idle() || fetch.is_pending() {
            ui.heading("Posts");
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
            return;
        }

        if let Some(error) = fetch.error_message() {
            ui.heading("Posts");
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
            });
            return;
        }
    }

    let mut search_edit = None;
    let mut toggle_sort = None;
    let mut open_post = None;
    let mut nav = None;
    let pages;

    {
        let fetch = state_ctx.state::<FetchPosts>();
        let view = state_ctx.state::<PostsViewState>();
        let posts = fetch.posts().unwrap_or(&[]);

        ui.horizontal(|ui| {
            ui.heading("Posts");
            let mut search_text = view.search_text().to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut search_text)
                    .hint_text("Search...")
                    .desired_width(220.0),
            );
            if response.changed() {
                search_edit = Some(search_text);
            }
        });
        ui.add_space(8.0);

        let rows = view.derive_rows(posts);
        pages = total_pages(rows.len());
        let page = view.page().min(pages);
        let visible = page_slice(&rows, page);

        let events = table::posts_table(ui, visible, &post_columns(), view.sort());
        toggle_sort = events.toggle_sort;
        if let Some(RowEvent::Open(post)) = events.row {
            open_post = Some(post);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(page > 1, Button::new("Previous")).clicked() {
                nav = Some(PageNav::Prev);
            }
            ui.label(format!("Page {page} of {pages}"));
            if ui.add_enabled(page < pages, Button::new("Next")).clicked() {
                nav = Some(PageNav::Next);
            }
        });

        // Echo of the selection under the table, alongside the modal.
        if let Some(selected) = view.selected() {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.strong("Selected Post Details");
                ui.label(&selected.body);
            });
        }
    }

    let view = state_ctx.state_mut::<PostsViewState>();
    // The filtered set may have shrunk since the page was last set.
    view.clamp_page(pages);
    if let Some(search_text) = search_edit {
        view.set_search_text(search_text);
    }
    if let Some(key) = toggle_sort {
        view.toggle_sort(key);
    }
    if let Some(post) = open_post {
        view.select(post);
    }
    match nav {
        Some(PageNav::Prev) => view.prev_page(),
        Some(PageNav::Next) => view.next_page(pages),
        None => {}
    }
}
