//! The filter → sort → paginate view pipeline.
//!
//! The derived view is recomputed from scratch from the full fetched set on
//! every relevant state change. At tens of records that is cheaper than any
//! incremental scheme would be to maintain.

use std::any::Any;
use std::cmp::Ordering;

use postview_states::{State, state_assign_impl};

use crate::Post;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// Identifies which record field (or derived value) a column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Id,
    Title,
    Body,
    /// First 20 characters of the body.
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header glyph for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Which column to sort by, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: ColumnKey,
    pub direction: SortDirection,
}

/// A post field value as seen by the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortValue<'a> {
    Int(i64),
    Text(&'a str),
}

/// The sortable value a key selects from a post.
///
/// `None` means the value is absent for sorting purposes (a markup title),
/// and absent values order before everything else ascending.
fn sort_value(post: &Post, key: ColumnKey) -> Option<SortValue<'_>> {
    match key {
        ColumnKey::Id => Some(SortValue::Int(post.id)),
        ColumnKey::Title => post.title.plain_text().map(SortValue::Text),
        ColumnKey::Body | ColumnKey::Preview => Some(SortValue::Text(&post.body)),
    }
}

fn compare_values(a: Option<SortValue<'_>>, b: Option<SortValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(SortValue::Int(a)), Some(SortValue::Int(b))) => a.cmp(&b),
        (Some(SortValue::Text(a)), Some(SortValue::Text(b))) => a.cmp(b),
        // A key never yields both kinds; give the pairing a stable order anyway.
        (Some(SortValue::Int(_)), Some(SortValue::Text(_))) => Ordering::Less,
        (Some(SortValue::Text(_)), Some(SortValue::Int(_))) => Ordering::Greater,
    }
}

/// Keep posts whose title (when plain text) or body contains `search`
/// case-insensitively. An empty search keeps everything.
pub fn filter_posts<'a>(posts: &'a [Post], search: &str) -> Vec<&'a Post> {
    if search.is_empty() {
        return posts.iter().collect();
    }

    let needle = search.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let title_matches = post
                .title
                .plain_text()
                .is_some_and(|title| title.to_lowercase().contains(&needle));
            title_matches || post.body.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort of `rows` by `sort`; `None` leaves the order unchanged.
///
/// Descending is the exact reverse of ascending, including the placement of
/// absent values.
pub fn sort_posts(rows: &mut [&Post], sort: Option<SortSpec>) {
    let Some(spec) = sort else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = compare_values(sort_value(a, spec.key), sort_value(b, spec.key));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages for `len` filtered rows; never less than one.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// The contiguous window of `rows` shown on 1-based `page`.
pub fn page_slice<'rows, 'post>(rows: &'rows [&'post Post], page: usize) -> &'rows [&'post Post] {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

/// UI state driving the derived view: search text, sort spec, current page
/// and the selected record.
///
/// Invariants are kept by the mutators: changing the search text resets the
/// page to 1, and the page is re-clamped whenever the filtered set changes.
#[derive(Debug, Clone)]
pub struct PostsViewState {
    search_text: String,
    sort: Option<SortSpec>,
    page: usize,
    selected: Option<Post>,
}

impl Default for PostsViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort: None,
            page: 1,
            selected: None,
        }
    }
}

impl PostsViewState {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replace the search text. Any actual change snaps back to page 1.
    pub fn set_search_text(&mut self, search_text: String) {
        if self.search_text != search_text {
            self.search_text = search_text;
            self.page = 1;
        }
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Toggling the active key flips direction; any other key starts
    /// ascending on that key.
    pub fn toggle_sort(&mut self, key: ColumnKey) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.key == key => SortSpec {
                key,
                direction: spec.direction.flipped(),
            },
            _ => SortSpec {
                key,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Clamp the page into `[1, total_pages]`. Call after the filtered set
    /// may have changed.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn selected(&self) -> Option<&Post> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, post: Post) {
        self.selected = Some(post);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Filtered and sorted rows, before pagination.
    pub fn derive_rows<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        let mut rows = filter_posts(posts, &self.search_text);
        sort_posts(&mut rows, self.sort);
        rows
    }
}

impl State for PostsViewState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
