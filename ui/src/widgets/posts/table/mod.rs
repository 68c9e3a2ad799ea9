//! Generic table renderer.
//!
//! Given rows and a list of [`columns::ColumnSpec`]s this draws the grid and
//! reports what the user did. Filtering, sorting and pagination happen in the
//! panel; nothing here mutates state.

pub mod cells;
pub mod columns;
mod header;
mod row;

use egui::Ui;
use egui_extras::{Column, TableBuilder};
use postview_business::{ColumnKey, Post, SortSpec};

use self::columns::{ColumnSpec, HEADER_HEIGHT, ROW_HEIGHT};

/// Something the user did inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    /// A title was clicked; open the detail view for this post.
    Open(Post),
}

/// Everything the user did inside the table this frame.
#[derive(Debug, Default)]
pub struct TableEvents {
    pub toggle_sort: Option<ColumnKey>,
    pub row: Option<RowEvent>,
}

pub fn posts_table(
    ui: &mut Ui,
    rows: &[&Post],
    columns: &[ColumnSpec],
    sort: Option<SortSpec>,
) -> TableEvents {
    let mut toggle_sort = None;
    let mut row_event = None;

    let mut builder = TableBuilder::new(ui).striped(true);
    for column in columns {
        builder = builder.column(match column.width {
            Some(width) => Column::exact(width),
            None => Column::remainder().at_least(120.0).clip(true),
        });
    }

    let table = builder.header(HEADER_HEIGHT, |mut header_row| {
        toggle_sort = header::render_header(&mut header_row, columns, sort);
    });

    table.body(|mut body| {
        for post in rows {
            body.row(ROW_HEIGHT, |mut table_row| {
                if let Some(event) = row::render_row(&mut table_row, post, columns) {
                    row_event = Some(event);
                }
            });
        }
    });

    TableEvents {
        toggle_sort,
        row: row_event,
    }
}
