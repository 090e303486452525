//! Domain entities - core business objects

mod comment;
mod follow;
mod like;
mod posting;
mod profile;
mod watch_event;

pub use comment::Comment;
pub use follow::Follow;
pub use like::Like;
pub use posting::{CreatorSummary, Posting, PostingWithCreator};
pub use profile::Profile;
pub use watch_event::WatchEvent;
