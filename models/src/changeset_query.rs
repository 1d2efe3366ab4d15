//! Changeset listing filters (`GET /api/0.6/changesets`).
//!
//! A [`ChangesetQuery`] can hold several populated fields, but only one filter
//! clause is ever sent. [`ChangesetQuery::filter`] walks a fixed precedence
//! table and returns the first field that is set:
//!
//! 1. bounding box
//! 2. user id
//! 3. display name
//! 4. time (instant or range)
//! 5. open flag
//! 6. closed flag
//! 7. changeset id list
//! 8. limit
//!
//! Conflicting combinations (e.g. user id and display name) are not rejected
//! here; the lower-precedence field is silently dropped.

use crate::element::join_ids;
use crate::error::model_error::ModelError;
use crate::{BoundingBox, ErrorLocation};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Time filter for changeset listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangesetTime {
    /// Changesets closed after this instant.
    Since(String),
    /// Changesets closed after `closed_after` and created before `created_before`.
    Range {
        closed_after: String,
        created_before: String,
    },
}

impl ChangesetTime {
    /// The form actually sent, or `None` when there is nothing to send.
    ///
    /// A range needs both instants; one with only `closed_after` degrades to
    /// [`ChangesetTime::Since`], one with only `created_before` is dropped.
    fn normalized(&self) -> Option<ChangesetTime> {
        match self {
            ChangesetTime::Since(instant) if instant.is_empty() => None,
            ChangesetTime::Since(_) => Some(self.clone()),
            ChangesetTime::Range {
                closed_after,
                created_before,
            } => match (closed_after.is_empty(), created_before.is_empty()) {
                (false, false) => Some(self.clone()),
                (false, true) => Some(ChangesetTime::Since(closed_after.clone())),
                (true, _) => None,
            },
        }
    }
}

/// The single clause selected from a [`ChangesetQuery`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChangesetFilter {
    BoundingBox(BoundingBox),
    User(u64),
    DisplayName(String),
    Time(ChangesetTime),
    Open,
    Closed,
    Changesets(Vec<u64>),
    Limit(u32),
}

impl ChangesetFilter {
    pub fn key(&self) -> &'static str {
        match self {
            ChangesetFilter::BoundingBox(_) => "bbox",
            ChangesetFilter::User(_) => "user",
            ChangesetFilter::DisplayName(_) => "display_name",
            ChangesetFilter::Time(_) => "time",
            ChangesetFilter::Open => "open",
            ChangesetFilter::Closed => "closed",
            ChangesetFilter::Changesets(_) => "changesets",
            ChangesetFilter::Limit(_) => "limit",
        }
    }

    /// Unencoded query value; list values are comma-joined.
    pub fn value(&self) -> String {
        match self {
            ChangesetFilter::BoundingBox(bbox) => bbox.to_string(),
            ChangesetFilter::User(id) => id.to_string(),
            ChangesetFilter::DisplayName(name) => name.clone(),
            ChangesetFilter::Time(ChangesetTime::Since(instant)) => instant.clone(),
            ChangesetFilter::Time(ChangesetTime::Range {
                closed_after,
                created_before,
            }) => format!("{closed_after},{created_before}"),
            ChangesetFilter::Open | ChangesetFilter::Closed => String::from("true"),
            ChangesetFilter::Changesets(ids) => join_ids(ids),
            ChangesetFilter::Limit(limit) => limit.to_string(),
        }
    }

    pub fn query_pair(&self) -> (&'static str, String) {
        (self.key(), self.value())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangesetQuery {
    pub bbox: Option<BoundingBox>,
    pub user: Option<u64>,
    pub display_name: Option<String>,
    pub time: Option<ChangesetTime>,
    pub open: Option<bool>,
    pub closed: Option<bool>,
    pub changesets: Vec<u64>,
    pub limit: Option<u32>,
}

type FilterRule = fn(&ChangesetQuery) -> Option<ChangesetFilter>;

const FILTER_PRECEDENCE: [FilterRule; 8] = [
    bbox_filter,
    user_filter,
    display_name_filter,
    time_filter,
    open_filter,
    closed_filter,
    changesets_filter,
    limit_filter,
];

fn bbox_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    query.bbox.map(ChangesetFilter::BoundingBox)
}

fn user_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    query.user.map(ChangesetFilter::User)
}

fn display_name_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    query
        .display_name
        .as_ref()
        .filter(|name| !name.is_empty())
        .map(|name| ChangesetFilter::DisplayName(name.clone()))
}

fn time_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    query
        .time
        .as_ref()
        .and_then(ChangesetTime::normalized)
        .map(ChangesetFilter::Time)
}

fn open_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    (query.open == Some(true)).then_some(ChangesetFilter::Open)
}

fn closed_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    (query.closed == Some(true)).then_some(ChangesetFilter::Closed)
}

fn changesets_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    (!query.changesets.is_empty()).then(|| ChangesetFilter::Changesets(query.changesets.clone()))
}

fn limit_filter(query: &ChangesetQuery) -> Option<ChangesetFilter> {
    query.limit.map(ChangesetFilter::Limit)
}

impl ChangesetQuery {
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user = Some(user_id);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_time(mut self, time: ChangesetTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = Some(closed);
        self
    }

    pub fn with_changesets(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.changesets = ids.into_iter().collect();
        self
    }

    /// Accept an already comma-joined id list such as `"10,20,30"`.
    ///
    /// Blank entries are skipped; anything else must be an id.
    #[track_caller]
    pub fn with_changeset_list(mut self, list: &str) -> Result<Self, ModelError> {
        let mut ids = Vec::new();
        for entry in list.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let id = entry.parse().map_err(|_| ModelError::Validation {
                message: format!("Changeset id is not a number: {entry:?}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
            ids.push(id);
        }

        self.changesets = ids;
        Ok(self)
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// First populated field in precedence order, or `None` for an empty query.
    pub fn filter(&self) -> Option<ChangesetFilter> {
        FILTER_PRECEDENCE.iter().find_map(|rule| rule(self))
    }
}
