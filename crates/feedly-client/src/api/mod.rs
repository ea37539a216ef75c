//! Declarative endpoint tables for every cloud API surface.
//!
//! Each table is a tree of [`feedly_core::Endpoint`] templates built by
//! `const fn` constructors. The templates carry no runtime state; the client
//! combines them with its settings and session when dispatching a call.

pub mod authentication;
pub mod boards;
pub mod collections;
pub mod entries;
pub mod markers;
pub mod profile;
pub mod streams;
pub mod subscriptions;
pub mod tags;

pub use authentication::AuthenticationApi;
pub use boards::BoardsApi;
pub use collections::{CollectionApi, CollectionsApi};
pub use entries::EntriesApi;
pub use markers::MarkersApi;
pub use profile::ProfileApi;
pub use streams::StreamsApi;
pub use subscriptions::SubscriptionsApi;
pub use tags::TagsApi;

/// The full endpoint tree, one field per API surface.
#[derive(Debug, Default)]
pub struct FeedlyApi {
    pub authentication: AuthenticationApi,
    pub boards: BoardsApi,
    pub collections: CollectionsApi,
    pub entries: EntriesApi,
    pub markers: MarkersApi,
    pub profile: ProfileApi,
    pub streams: StreamsApi,
    pub subscriptions: SubscriptionsApi,
    pub tags: TagsApi,
}

impl FeedlyApi {
    pub const fn new() -> Self {
        Self {
            authentication: AuthenticationApi::new(),
            boards: BoardsApi::new(),
            collections: CollectionsApi::new(),
            entries: EntriesApi::new(),
            markers: MarkersApi::new(),
            profile: ProfileApi::new(),
            streams: StreamsApi::new(),
            subscriptions: SubscriptionsApi::new(),
            tags: TagsApi::new(),
        }
    }
}
