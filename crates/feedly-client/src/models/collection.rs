use serde::{Deserialize, Serialize};

use super::subscription::Subscription;

/// A personal collection of feed subscriptions, aka a category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection id (`user/:userId/category/:uuid` or `.../:label`).
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default)]
    pub feeds: Vec<Subscription>,
}

/// A feed reference passed when creating or updating a collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionFeed {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Request for `GET /collections`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_stats: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_enterprise: Option<bool>,
}

/// Request for `POST /collections`. The server auto-generates an id when
/// none is provided.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub feeds: Vec<CollectionFeed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_cover: Option<bool>,
}

/// Request for `GET /collections/:id`.
#[derive(Clone, Debug, Serialize)]
pub struct CollectionRequest {
    pub id: String,
}

/// Request for `POST /collections/:id`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionUpdateRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub feeds: Vec<CollectionFeed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_cover: Option<bool>,
}

/// Request for `PUT /collections/:collectionId/feeds`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionAddFeedRequest {
    pub collection_id: String,
    /// Feed id to add (`feed/:url`).
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Request for `DELETE /collections/:collectionId/feeds/:id`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRemoveFeedRequest {
    pub collection_id: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_orphan_feeds: Option<bool>,
}
