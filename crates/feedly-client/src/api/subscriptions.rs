use feedly_core::{Endpoint, optional, required};

use crate::models::{Subscription, SubscriptionCreateRequest, SubscriptionDeleteRequest};

/// Feed subscription management. Obsolete upstream in favor of collections,
/// but still served.
#[derive(Debug)]
pub struct SubscriptionsApi {
    pub get: Endpoint<(), Vec<Subscription>>,
    pub create: Endpoint<SubscriptionCreateRequest>,
    pub delete: Endpoint<SubscriptionDeleteRequest>,
}

impl SubscriptionsApi {
    pub const fn new() -> Self {
        Self {
            get: Endpoint::get("/subscriptions").auth().cached(),
            create: Endpoint::post("/subscriptions").auth().body_params(const {
                &[
                    required("id"),
                    optional("title"),
                    optional("categories"),
                    optional("sortid"),
                    optional("added"),
                    optional("updated"),
                    optional("website"),
                    optional("visualUrl"),
                ]
            }),
            delete: Endpoint::delete("/subscriptions/:id")
                .auth()
                .path_params(const { &[required("id")] }),
        }
    }
}

impl Default for SubscriptionsApi {
    fn default() -> Self {
        Self::new()
    }
}
