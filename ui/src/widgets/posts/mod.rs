//! The posts view: search box, paginated table and the detail modal.

mod modal;
mod panel;
mod table;

pub use modal::post_detail_modal;
pub use panel::posts_panel;
