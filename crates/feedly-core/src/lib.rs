//! Transport-agnostic primitives for the Feedly cloud API client.
//!
//! Endpoint templates describe each API call declaratively (method, URL
//! pattern, parameter contract, seeds, flags); [`endpoint::Endpoint::build`]
//! turns a template plus a runtime parameter object into a validated request
//! for the transport collaborator. [`auth::Auth`] carries the OAuth session
//! state the client layers on top.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod nonce;
pub mod request;

pub use auth::{Auth, Plan, TokenResponse};
pub use endpoint::{Endpoint, EndpointOptions, Param, ParameterContract, optional, required};
pub use error::Error;
pub use request::{ApiRequest, ApiResponse, RawResponse, RedirectMode, RequestInit, check_status};
