mod posts;

pub use posts::{post_detail_modal, posts_panel};
