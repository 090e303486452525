//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, feed parameters, and
//! path ids.

mod auth;
mod feed;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use feed::FeedParams;
pub use path::{PostingIdPath, ProfileIdPath};
pub use validated::ValidatedJson;
