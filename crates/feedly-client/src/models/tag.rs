use serde::{Deserialize, Serialize};

/// A personal or team tag (`user/:userId/tag/:label`).
///
/// The label cannot contain any of: `"` `<` `>` `?` `&` `/` `\` `^`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Tag a single entry with one or more tags (`PUT /tags/:ids`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagEntryRequest {
    /// Tag ids, comma-joined into the path at call time.
    pub ids: Vec<String>,
    pub entry_id: String,
}

/// Tag multiple entries at once (`PUT /tags/:ids`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagEntriesRequest {
    pub ids: Vec<String>,
    pub entry_ids: Vec<String>,
}

/// Rename a tag (`POST /tags/:id`).
#[derive(Clone, Debug, Serialize)]
pub struct TagLabelRequest {
    pub id: String,
    pub label: String,
}

/// Delete tags (`DELETE /tags/:ids`).
#[derive(Clone, Debug, Serialize)]
pub struct TagDeleteRequest {
    pub ids: Vec<String>,
}

/// Untag entries (`DELETE /tags/:ids/:entryIds`).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDeleteEntriesRequest {
    pub ids: Vec<String>,
    pub entry_ids: Vec<String>,
}
