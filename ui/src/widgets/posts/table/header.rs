use egui_extras::TableRow;
use postview_business::{ColumnKey, SortSpec};

use super::columns::ColumnSpec;

/// Glyph on a sortable header that is not the active sort column.
const SORTABLE_IDLE: &str = "⇅";

/// Header row: column titles plus a sort toggle on sortable columns.
///
/// Returns the column whose toggle was clicked this frame, if any.
pub fn render_header(
    header_row: &mut TableRow<'_, '_>,
    columns: &[ColumnSpec],
    sort: Option<SortSpec>,
) -> Option<ColumnKey> {
    let mut toggled = None;

    for column in columns {
        header_row.col(|ui| {
            ui.horizontal(|ui| {
                ui.strong(column.title);
                if column.sortable {
                    let glyph = match sort {
                        Some(spec) if spec.key == column.key => spec.direction.indicator(),
                        _ => SORTABLE_IDLE,
                    };
                    if ui.small_button(glyph).clicked() {
                        toggled = Some(column.key);
                    }
                }
            });
        });
    }

    toggled
}
