use serde::{Deserialize, Serialize};

use super::entry::{Direction, Entry, Link};

/// Sort order for stream contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ranked {
    Newest,
    Oldest,
    Engagement,
}

/// Request for the stream contents and ids endpoints.
///
/// `continuation` is pure pass-through pagination: feed it back from the
/// previous response to fetch the next page; the client never loops itself.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRequest {
    /// Stream id: a feed, category, tag or global resource id.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked: Option<Ranked>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
    /// Unix millisecond timestamp lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<bool>,
}

/// A page of entry content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
    /// Absent when the end of the stream has been reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
    #[serde(default, rename = "self", skip_serializing_if = "Vec::is_empty")]
    pub self_links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate: Vec<Link>,
    #[serde(default)]
    pub items: Vec<Entry>,
}

/// A page of entry ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreamIds {
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
}
