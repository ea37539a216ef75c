use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request for `GET /markers/counts`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerCountsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorefresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
}

/// Unread count for a single feed or category.
///
/// Counts are capped at 1,000 per feed; the account total appears under the
/// `global.all` category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub id: String,
    pub count: u32,
    pub updated: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerCounts {
    pub unread_counts: Vec<UnreadCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}

/// Entry-level marker mutation (`POST /markers`); the action and type are
/// seeded by the endpoint template.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerEntriesRequest {
    pub entry_ids: Vec<String>,
}

/// Feed-level read marker (`POST /markers`, `type=feeds`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerFeedsRequest {
    pub feed_ids: Vec<String>,
    /// Entries newer than this one stay unread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_entry_id: Option<String>,
    /// Unix millisecond timestamp alternative to `last_read_entry_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<i64>,
}

/// Category-level read marker (`POST /markers`, `type=categories`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerCategoriesRequest {
    pub category_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_entry_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<i64>,
}

/// Tag-level read marker (`POST /markers`, `type=tags`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerTagsRequest {
    pub tag_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_entry_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<i64>,
}

/// One-time undo of the previous mark-as-read for feeds.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerUndoFeedsRequest {
    pub feed_ids: Vec<String>,
}

/// One-time undo of the previous mark-as-read for categories.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerUndoCategoriesRequest {
    pub category_ids: Vec<String>,
}

/// Request for the latest-read / latest-tagged endpoints.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLatestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newer_than: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMarker {
    pub id: String,
    pub as_of: i64,
}

/// Response of `GET /markers/reads`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatestRead {
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default)]
    pub unread: Vec<String>,
    #[serde(default)]
    pub feeds: Vec<FeedMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}

/// Response of `GET /markers/tags`: entry ids grouped by tag id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestTagged {
    #[serde(default)]
    pub tagged_entries: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}
