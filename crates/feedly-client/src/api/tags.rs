use feedly_core::{Endpoint, endpoint::join_csv, required};

use crate::models::{
    Tag, TagDeleteEntriesRequest, TagDeleteRequest, TagEntriesRequest, TagEntryRequest,
    TagLabelRequest,
};

/// Tag management. Id lists are comma-joined into the `:ids` path segment
/// (and the entry id list for bulk tagging) before validation.
#[derive(Debug)]
pub struct TagsApi {
    pub get: Endpoint<(), Vec<Tag>>,
    pub entry: Endpoint<TagEntryRequest>,
    pub entries: Endpoint<TagEntriesRequest>,
    pub label: Endpoint<TagLabelRequest>,
    pub delete: Endpoint<TagDeleteRequest>,
    pub delete_entries: Endpoint<TagDeleteEntriesRequest>,
}

impl TagsApi {
    pub const fn new() -> Self {
        Self {
            get: Endpoint::get("/tags").auth().cached(),
            entry: Endpoint::put("/tags/:ids")
                .auth()
                .path_params(const { &[required("ids")] })
                .body_params(const { &[required("entryId")] })
                .transform(|params| join_csv(params, "ids")),
            entries: Endpoint::put("/tags/:ids")
                .auth()
                .path_params(const { &[required("ids")] })
                .body_params(const { &[required("entryIds")] })
                .transform(|params| {
                    join_csv(params, "ids");
                    join_csv(params, "entryIds");
                }),
            label: Endpoint::post("/tags/:id")
                .auth()
                .path_params(const { &[required("id")] })
                .body_params(const { &[required("label")] }),
            delete: Endpoint::delete("/tags/:ids")
                .auth()
                .path_params(const { &[required("ids")] })
                .transform(|params| join_csv(params, "ids")),
            delete_entries: Endpoint::delete("/tags/:ids/:entryIds")
                .auth()
                .path_params(const { &[required("ids"), required("entryIds")] })
                .transform(|params| {
                    join_csv(params, "ids");
                    join_csv(params, "entryIds");
                }),
        }
    }
}

impl Default for TagsApi {
    fn default() -> Self {
        Self::new()
    }
}
