//! Typed client for the Feedly cloud API.
//!
//! The API surface is described once as a tree of declarative endpoint
//! templates (see [`api`]); [`client::FeedlyClient`] combines that tree with
//! application settings, an OAuth session and a pluggable transport.
//!
//! ```no_run
//! use feedly_client::{FeedlyClient, Settings, models::StreamRequest};
//!
//! # async fn run() -> Result<(), feedly_client::Error> {
//! let client = FeedlyClient::new(
//!     Settings::builder()
//!         .client_id("my-app")
//!         .client_secret("my-secret")
//!         .redirect_uri("https://app.example.com/callback")
//!         .user_agent("my-app/1.0")
//!         .build()?,
//! )?;
//!
//! let params = StreamRequest {
//!     id: "feed/https://example.com/rss".into(),
//!     count: Some(20),
//!     ..Default::default()
//! };
//! let stream = client.request(&client.api().streams.contents, &params).await?.parse()?;
//! println!("{} entries", stream.items.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod models;
pub mod transport;

pub use feedly_core::{
    ApiResponse, Auth, Endpoint, Error, Plan, RedirectMode, RequestInit, TokenResponse,
};

pub use api::FeedlyApi;
pub use client::{FeedlyClient, FeedlyClientBuilder};
pub use config::{FEEDLY_API_VERSION, FEEDLY_ENDPOINT, FEEDLY_WEBSITE, Settings, SettingsBuilder};
pub use transport::{CacheBackend, HttpTransport, Transport};
