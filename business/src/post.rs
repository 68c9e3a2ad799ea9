use serde::{Deserialize, Serialize};

/// A post's title.
///
/// Titles coming off the wire are always plain text, but the record model
/// also admits titles that are pre-rendered markup. Markup titles are shown
/// verbatim, are never matched by the search filter, and compare as absent
/// when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostTitle {
    Text(String),
    Markup(String),
}

impl PostTitle {
    /// The title as searchable text; `None` for markup titles.
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Markup(_) => None,
        }
    }

    /// The raw title string, whatever its kind.
    pub fn raw(&self) -> &str {
        match self {
            Self::Text(text) | Self::Markup(text) => text,
        }
    }
}

impl From<String> for PostTitle {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<PostTitle> for String {
    fn from(title: PostTitle) -> Self {
        match title {
            PostTitle::Text(text) | PostTitle::Markup(text) => text,
        }
    }
}

impl std::fmt::Display for PostTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw())
    }
}

/// One record shown as a table row. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: PostTitle,
    pub body: String,
}
