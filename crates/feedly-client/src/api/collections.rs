use feedly_core::{Endpoint, optional, required};

use crate::models::{
    Collection, CollectionAddFeedRequest, CollectionCreateRequest, CollectionRemoveFeedRequest,
    CollectionRequest, CollectionUpdateRequest, CollectionsRequest,
};

/// Category-centric view of feed subscriptions. Single-collection reads and
/// updates return a one-element array on the wire.
#[derive(Debug)]
pub struct CollectionsApi {
    pub get: Endpoint<CollectionsRequest, Vec<Collection>>,
    pub create: Endpoint<CollectionCreateRequest, Vec<Collection>>,
    pub collection: CollectionApi,
}

#[derive(Debug)]
pub struct CollectionApi {
    pub get: Endpoint<CollectionRequest, Vec<Collection>>,
    pub update: Endpoint<CollectionUpdateRequest, Vec<Collection>>,
    pub add_feed: Endpoint<CollectionAddFeedRequest>,
    pub remove_feed: Endpoint<CollectionRemoveFeedRequest>,
}

impl CollectionsApi {
    pub const fn new() -> Self {
        Self {
            get: Endpoint::get("/collections")
                .auth()
                .cached()
                .query_params(const { &[optional("withStats"), optional("withEnterprise")] }),
            create: Endpoint::post("/collections").auth().body_params(const {
                &[
                    optional("id"),
                    optional("label"),
                    optional("description"),
                    optional("feeds"),
                    optional("deleteCover"),
                ]
            }),
            collection: CollectionApi {
                get: Endpoint::get("/collections/:id")
                    .auth()
                    .cached()
                    .path_params(const { &[required("id")] }),
                update: Endpoint::post("/collections/:id")
                    .auth()
                    .path_params(const { &[required("id")] })
                    .body_params(const {
                        &[
                            optional("label"),
                            optional("description"),
                            optional("feeds"),
                            optional("deleteCover"),
                        ]
                    }),
                add_feed: Endpoint::put("/collections/:collectionId/feeds")
                    .auth()
                    .path_params(const { &[required("collectionId")] })
                    .body_params(const { &[required("id"), optional("title")] }),
                remove_feed: Endpoint::delete("/collections/:collectionId/feeds/:id")
                    .auth()
                    .path_params(const { &[required("collectionId"), required("id")] })
                    .query_params(const { &[optional("keepOrphanFeeds")] }),
            },
        }
    }
}

impl Default for CollectionsApi {
    fn default() -> Self {
        Self::new()
    }
}
