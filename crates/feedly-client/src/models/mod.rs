//! Typed request and response shapes for the cloud API.
//!
//! Request structs serialize to the wire names (camelCase for API calls,
//! snake_case for the OAuth endpoints); the endpoint contracts decide which
//! fields land in the path, query, or body.

pub mod authentication;
pub mod board;
pub mod collection;
pub mod entry;
pub mod marker;
pub mod profile;
pub mod stream;
pub mod subscription;
pub mod tag;

pub use authentication::{
    AuthorizeParams, AuthorizeRequest, RefreshTokenRequest, TokenExchangeRequest, TokenParams,
};
pub use board::{Board, BoardUpdateRequest, BoardsRequest};
pub use collection::{
    Collection, CollectionAddFeedRequest, CollectionCreateRequest, CollectionFeed,
    CollectionRemoveFeedRequest, CollectionRequest, CollectionUpdateRequest, CollectionsRequest,
};
pub use entry::{
    Category, Content, Direction, Entry, EntryCreateRequest, EntryRequest, Link, Origin, Visual,
};
pub use marker::{
    FeedMarker, LatestRead, LatestTagged, MarkerCategoriesRequest, MarkerCounts,
    MarkerCountsRequest, MarkerEntriesRequest, MarkerFeedsRequest, MarkerLatestRequest,
    MarkerTagsRequest, MarkerUndoCategoriesRequest, MarkerUndoFeedsRequest, UnreadCount,
};
pub use profile::{ExternalLogin, Profile, ProfileUpdateRequest};
pub use stream::{Ranked, Stream, StreamIds, StreamRequest};
pub use subscription::{Subscription, SubscriptionCreateRequest, SubscriptionDeleteRequest};
pub use tag::{
    Tag, TagDeleteEntriesRequest, TagDeleteRequest, TagEntriesRequest, TagEntryRequest,
    TagLabelRequest,
};
