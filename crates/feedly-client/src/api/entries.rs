use feedly_core::{Endpoint, optional, required};

use crate::models::{Entry, EntryCreateRequest, EntryRequest};

#[derive(Debug)]
pub struct EntriesApi {
    pub get: Endpoint<EntryRequest, Entry>,
    /// Injects an entry that does not come from a feed; it is only reachable
    /// through the tag streams of the tags passed along with it.
    pub create: Endpoint<EntryCreateRequest, Entry>,
}

impl EntriesApi {
    pub const fn new() -> Self {
        Self {
            get: Endpoint::get("/entries/:id")
                .auth()
                .cached()
                .path_params(const { &[required("id")] }),
            create: Endpoint::post("/entries").auth().body_params(const {
                &[
                    required("title"),
                    required("origin"),
                    required("alternate"),
                    required("published"),
                    optional("content"),
                    optional("summary"),
                    optional("author"),
                    optional("keywords"),
                    optional("unread"),
                    optional("tags"),
                    optional("categories"),
                ]
            }),
        }
    }
}

impl Default for EntriesApi {
    fn default() -> Self {
        Self::new()
    }
}
