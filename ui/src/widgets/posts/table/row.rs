use egui_extras::TableRow;
use postview_business::Post;

use super::RowEvent;
use super::cells;
use super::columns::ColumnSpec;

/// One post across all columns. Returns the last event a cell reported.
pub fn render_row(
    table_row: &mut TableRow<'_, '_>,
    post: &Post,
    columns: &[ColumnSpec],
) -> Option<RowEvent> {
    let mut event = None;

    for column in columns {
        table_row.col(|ui| {
            let cell_event = match column.render {
                Some(render) => render(post, ui),
                None => {
                    cells::raw_value(post, column.key, ui);
                    None
                }
            };
            if cell_event.is_some() {
                event = cell_event;
            }
        });
    }

    event
}
