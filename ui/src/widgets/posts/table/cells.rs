//! Cell renderers.

use egui::Ui;
use postview_business::{ColumnKey, Post};

use super::RowEvent;

/// Titles are cut to this many characters in the table.
pub const TITLE_MAX_CHARS: usize = 30;
/// The preview column shows this many characters of the body.
pub const PREVIEW_MAX_CHARS: usize = 20;

/// Cut `text` to `max_chars` characters, appending `...` when it was longer.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push_str("...");
    short
}

/// Truncated title as a link; clicking it opens the detail view.
pub fn title_cell(post: &Post, ui: &mut Ui) -> Option<RowEvent> {
    let label = match post.title.plain_text() {
        Some(text) => truncate(text, TITLE_MAX_CHARS),
        // Markup titles are shown verbatim, untruncated.
        None => post.title.raw().to_owned(),
    };
    if ui.link(label).clicked() {
        return Some(RowEvent::Open(post.clone()));
    }
    None
}

/// Start of the body, as a glance value next to the full text.
pub fn preview_cell(post: &Post, ui: &mut Ui) -> Option<RowEvent> {
    ui.label(truncate(&post.body, PREVIEW_MAX_CHARS));
    None
}

/// Fallback for columns without a dedicated renderer.
pub fn raw_value(post: &Post, key: ColumnKey, ui: &mut Ui) {
    match key {
        ColumnKey::Id => {
            ui.monospace(post.id.to_string());
        }
        ColumnKey::Title => {
            ui.label(post.title.raw());
        }
        ColumnKey::Body | ColumnKey::Preview => {
            ui.label(&post.body);
        }
    }
}
