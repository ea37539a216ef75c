use feedly_core::{Endpoint, optional, required};

use crate::models::{
    LatestRead, LatestTagged, MarkerCategoriesRequest, MarkerCounts, MarkerCountsRequest,
    MarkerEntriesRequest, MarkerFeedsRequest, MarkerLatestRequest, MarkerTagsRequest,
    MarkerUndoCategoriesRequest, MarkerUndoFeedsRequest,
};

/// Read and save tracking at entry, feed, category and tag granularity.
/// All mutations share `POST /markers`; the seeded `action` and `type`
/// fields select the operation.
#[derive(Debug)]
pub struct MarkersApi {
    pub counts: Endpoint<MarkerCountsRequest, MarkerCounts>,
    pub entries: MarkerEntriesApi,
    pub feeds: MarkerFeedsApi,
    pub categories: MarkerCategoriesApi,
    pub tags: MarkerTagsApi,
    pub latest: MarkerLatestApi,
}

#[derive(Debug)]
pub struct MarkerEntriesApi {
    pub read: Endpoint<MarkerEntriesRequest>,
    pub unread: Endpoint<MarkerEntriesRequest>,
    pub save: Endpoint<MarkerEntriesRequest>,
    pub unsave: Endpoint<MarkerEntriesRequest>,
}

#[derive(Debug)]
pub struct MarkerFeedsApi {
    pub read: Endpoint<MarkerFeedsRequest>,
    /// One-time undo of the previous mark-as-read marker.
    pub undo: Endpoint<MarkerUndoFeedsRequest>,
}

#[derive(Debug)]
pub struct MarkerCategoriesApi {
    pub read: Endpoint<MarkerCategoriesRequest>,
    /// One-time undo of the previous mark-as-read marker.
    pub undo: Endpoint<MarkerUndoCategoriesRequest>,
}

#[derive(Debug)]
pub struct MarkerTagsApi {
    pub read: Endpoint<MarkerTagsRequest>,
}

#[derive(Debug)]
pub struct MarkerLatestApi {
    pub reads: Endpoint<MarkerLatestRequest, LatestRead>,
    pub tags: Endpoint<MarkerLatestRequest, LatestTagged>,
}

const fn entry_action(
    seed: &'static [(&'static str, &'static str)],
) -> Endpoint<MarkerEntriesRequest> {
    Endpoint::post("/markers")
        .auth()
        .body_params(const { &[required("action"), required("type"), required("entryIds")] })
        .seeds(seed)
}

impl MarkersApi {
    pub const fn new() -> Self {
        Self {
            counts: Endpoint::get("/markers/counts")
                .auth()
                .cached()
                .query_params(const {
                    &[
                        optional("autorefresh"),
                        optional("newerThan"),
                        optional("streamId"),
                    ]
                }),
            entries: MarkerEntriesApi {
                read: entry_action(&[("action", "markAsRead"), ("type", "entries")]),
                unread: entry_action(&[("action", "keepUnread"), ("type", "entries")]),
                save: entry_action(&[("action", "markAsSaved"), ("type", "entries")]),
                unsave: entry_action(&[("action", "markAsUnsaved"), ("type", "entries")]),
            },
            feeds: MarkerFeedsApi {
                read: Endpoint::post("/markers")
                    .auth()
                    .body_params(const {
                        &[
                            required("action"),
                            required("type"),
                            required("feedIds"),
                            optional("lastReadEntryId"),
                            optional("asOf"),
                        ]
                    })
                    .seeds(&[("action", "markAsRead"), ("type", "feeds")]),
                undo: Endpoint::post("/markers")
                    .auth()
                    .body_params(const {
                        &[required("action"), required("type"), required("feedIds")]
                    })
                    .seeds(&[("action", "undoMarkAsRead"), ("type", "feeds")]),
            },
            categories: MarkerCategoriesApi {
                read: Endpoint::post("/markers")
                    .auth()
                    .body_params(const {
                        &[
                            required("action"),
                            required("type"),
                            required("categoryIds"),
                            optional("lastReadEntryId"),
                            optional("asOf"),
                        ]
                    })
                    .seeds(&[("action", "markAsRead"), ("type", "categories")]),
                undo: Endpoint::post("/markers")
                    .auth()
                    .body_params(const {
                        &[required("action"), required("type"), required("categoryIds")]
                    })
                    .seeds(&[("action", "undoMarkAsRead"), ("type", "categories")]),
            },
            tags: MarkerTagsApi {
                read: Endpoint::post("/markers")
                    .auth()
                    .body_params(const {
                        &[
                            required("action"),
                            required("type"),
                            required("tagIds"),
                            optional("lastReadEntryId"),
                            optional("asOf"),
                        ]
                    })
                    .seeds(&[("action", "markAsRead"), ("type", "tags")]),
            },
            latest: MarkerLatestApi {
                reads: Endpoint::get("/markers/reads")
                    .auth()
                    .cached()
                    .query_params(const { &[optional("newerThan")] }),
                tags: Endpoint::get("/markers/tags")
                    .auth()
                    .cached()
                    .query_params(const { &[optional("newerThan")] }),
            },
        }
    }
}

impl Default for MarkersApi {
    fn default() -> Self {
        Self::new()
    }
}
