use feedly_core::{Endpoint, optional, required};

use crate::models::{Board, BoardUpdateRequest, BoardsRequest};

/// Personal boards, aka tags with sharing and presentation extras.
#[derive(Debug)]
pub struct BoardsApi {
    pub get: Endpoint<BoardsRequest, Vec<Board>>,
    pub update: Endpoint<BoardUpdateRequest>,
}

impl BoardsApi {
    pub const fn new() -> Self {
        Self {
            get: Endpoint::get("/boards")
                .auth()
                .cached()
                .query_params(const { &[optional("withEnterprise")] }),
            update: Endpoint::post("/boards").auth().body_params(const {
                &[
                    required("id"),
                    optional("label"),
                    optional("description"),
                    optional("isPublic"),
                    optional("showNotes"),
                    optional("showHighlights"),
                ]
            }),
        }
    }
}

impl Default for BoardsApi {
    fn default() -> Self {
        Self::new()
    }
}
