use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

/// Filter keys always sent by note search, in wire order.
///
/// Every key is emitted even when the search leaves it unset; unset keys
/// carry an empty value (`limit=`).
pub const NOTE_SEARCH_KEYS: [&str; 8] = [
    "limit",
    "closed",
    "display_name",
    "user",
    "from",
    "to",
    "sort",
    "order",
];

const NOTE_SEARCH_TEXT_KEY: &str = "q";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteSort {
    CreatedAt,
    UpdatedAt,
}

impl Display for NoteSort {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            NoteSort::CreatedAt => formatter.write_str("created_at"),
            NoteSort::UpdatedAt => formatter.write_str("updated_at"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoteOrder {
    Oldest,
    Newest,
}

impl Display for NoteOrder {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            NoteOrder::Oldest => formatter.write_str("oldest"),
            NoteOrder::Newest => formatter.write_str("newest"),
        }
    }
}

/// Search terms for `GET /api/0.6/notes/search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteSearch {
    /// Free-text match against note comments.
    pub q: Option<String>,
    /// 1..=10000 on the server side.
    pub limit: Option<u32>,
    /// Days a note may have been closed and still match; `-1` for all.
    pub closed: Option<i32>,
    pub display_name: Option<String>,
    pub user: Option<u64>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: Option<NoteSort>,
    pub order: Option<NoteOrder>,
}

impl NoteSearch {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.q = Some(text.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_closed(mut self, days: i32) -> Self {
        self.closed = Some(days);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user = Some(user_id);
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn with_sort(mut self, sort: NoteSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_order(mut self, order: NoteOrder) -> Self {
        self.order = Some(order);
        self
    }

    fn allow_listed_values(&self) -> [Option<String>; 8] {
        [
            self.limit.map(|v| v.to_string()),
            self.closed.map(|v| v.to_string()),
            self.display_name.clone(),
            self.user.map(|v| v.to_string()),
            self.from.clone(),
            self.to.clone(),
            self.sort.map(|v| v.to_string()),
            self.order.map(|v| v.to_string()),
        ]
    }

    /// Ordered query pairs: `q` when set, then all of [`NOTE_SEARCH_KEYS`].
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(NOTE_SEARCH_KEYS.len() + 1);

        if let Some(text) = &self.q {
            pairs.push((NOTE_SEARCH_TEXT_KEY, text.clone()));
        }

        pairs.extend(
            NOTE_SEARCH_KEYS
                .into_iter()
                .zip(self.allow_listed_values())
                .map(|(key, value)| (key, value.unwrap_or_default())),
        );

        pairs
    }
}

/// Body for JSON note creation (`POST /api/0.6/notes.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub lat: f64,
    pub lon: f64,
    pub text: String,
}

impl NewNote {
    pub fn new(lat: f64, lon: f64, text: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            text: text.into(),
        }
    }
}
