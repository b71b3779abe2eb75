//! REST layer
//!
//! One [`ApiClient`] is built at start-up with the configuration and a token
//! provider, provided through context, and cloned into [`RestResource`]s.

pub mod client;
pub mod error;
pub mod resource;
pub mod resources;

pub use client::{ApiClient, StaticToken, TokenProvider};
pub use error::ApiError;
pub use resource::RestResource;

use leptos::prelude::*;

/// Client provided by the app root
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in context")
}
