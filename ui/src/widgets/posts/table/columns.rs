//! Column descriptors for the posts table.
//!
//! A column is a key, a header title, layout hints and an optional cell
//! renderer. Columns without a renderer fall back to the raw field value, so
//! adding a plain column is a one-liner here.

use egui::Ui;
use postview_business::{ColumnKey, Post};

use super::RowEvent;
use super::cells;

pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 26.0;

const ID_WIDTH: f32 = 48.0;
const TITLE_WIDTH: f32 = 240.0;
const PREVIEW_WIDTH: f32 = 180.0;

/// Draws one cell for a post. May report a row event for the panel to apply.
pub type CellRenderer = fn(&Post, &mut Ui) -> Option<RowEvent>;

pub struct ColumnSpec {
    pub key: ColumnKey,
    pub title: &'static str,
    /// Fixed width; `None` takes the remaining space.
    pub width: Option<f32>,
    pub sortable: bool,
    pub render: Option<CellRenderer>,
}

pub fn post_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec {
            key: ColumnKey::Id,
            title: "ID",
            width: Some(ID_WIDTH),
            sortable: false,
            render: None,
        },
        ColumnSpec {
            key: ColumnKey::Title,
            title: "Title",
            width: Some(TITLE_WIDTH),
            sortable: true,
            render: Some(cells::title_cell),
        },
        ColumnSpec {
            key: ColumnKey::Body,
            title: "Body",
            width: None,
            sortable: false,
            render: None,
        },
        ColumnSpec {
            key: ColumnKey::Preview,
            title: "Preview",
            width: Some(PREVIEW_WIDTH),
            sortable: false,
            render: Some(cells::preview_cell),
        },
    ]
}
