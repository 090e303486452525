//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in reel-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod follow;
mod like;
mod posting;
mod profile;
mod watch_event;

pub use comment::PgCommentRepository;
pub use follow::PgFollowRepository;
pub use like::PgLikeRepository;
pub use posting::PgPostingRepository;
pub use profile::PgProfileRepository;
pub use watch_event::PgWatchEventRepository;
