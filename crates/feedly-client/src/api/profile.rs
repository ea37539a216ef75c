use feedly_core::{Endpoint, optional};

use crate::models::{Profile, ProfileUpdateRequest};

/// Profile read and partial update. Updated fields are merged with the
/// existing profile server-side.
#[derive(Debug)]
pub struct ProfileApi {
    pub get: Endpoint<(), Profile>,
    pub update: Endpoint<ProfileUpdateRequest, Profile>,
}

impl ProfileApi {
    pub const fn new() -> Self {
        Self {
            get: Endpoint::get("/profile").auth().cached(),
            update: Endpoint::post("/profile").auth().body_params(const {
                &[
                    optional("email"),
                    optional("givenName"),
                    optional("familyName"),
                    optional("picture"),
                    optional("gender"),
                    optional("locale"),
                    optional("twitter"),
                    optional("facebook"),
                ]
            }),
        }
    }
}

impl Default for ProfileApi {
    fn default() -> Self {
        Self::new()
    }
}
