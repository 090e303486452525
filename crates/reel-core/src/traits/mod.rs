//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, FollowRepository, LikeRepository, PostingRepository, ProfileRepository,
    RepoResult, WatchEventRepository,
};
