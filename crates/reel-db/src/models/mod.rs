//! Database models - SQLx-compatible structs for PostgreSQL tables

mod count;
mod posting;
mod profile;

pub use count::PostingCountModel;
pub use posting::{PostingModel, PostingWithCreatorModel};
pub use profile::ProfileModel;
