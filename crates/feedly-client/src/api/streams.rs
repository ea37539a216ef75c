use feedly_core::{Endpoint, optional, required};

use crate::models::{Stream, StreamIds, StreamRequest};

/// Stream reads: entry content or bare ids for a feed, category, tag or
/// global resource. Both endpoints page through a `continuation` token.
#[derive(Debug)]
pub struct StreamsApi {
    pub contents: Endpoint<StreamRequest, Stream>,
    pub ids: Endpoint<StreamRequest, StreamIds>,
}

impl StreamsApi {
    pub const fn new() -> Self {
        Self {
            contents: Endpoint::get("/streams/:id/contents")
                .auth()
                .cached()
                .paginated()
                .path_params(const { &[required("id")] })
                .query_params(const {
                    &[
                        optional("count"),
                        optional("ranked"),
                        optional("unreadOnly"),
                        optional("newerThan"),
                        optional("continuation"),
                        optional("showMuted"),
                        optional("importantOnly"),
                        optional("similar"),
                    ]
                }),
            ids: Endpoint::get("/streams/:id/ids")
                .auth()
                .cached()
                .paginated()
                .path_params(const { &[required("id")] })
                .query_params(const {
                    &[
                        optional("count"),
                        optional("ranked"),
                        optional("unreadOnly"),
                        optional("newerThan"),
                        optional("continuation"),
                    ]
                }),
        }
    }
}

impl Default for StreamsApi {
    fn default() -> Self {
        Self::new()
    }
}
