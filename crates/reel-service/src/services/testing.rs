//! In-memory repositories for service tests
//!
//! One store implements every repository trait over shared state and counts
//! the read queries the feed pipeline issues.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reel_common::auth::JwtService;
use reel_core::entities::{
    Comment, CreatorSummary, Follow, Like, Posting, PostingWithCreator, Profile, WatchEvent,
};
use reel_core::traits::{
    CommentRepository, FollowRepository, LikeRepository, PostingRepository, ProfileRepository,
    RepoResult, WatchEventRepository,
};
use reel_core::{DomainError, FeedPosition, Snowflake};
use sqlx::postgres::PgPoolOptions;

use super::context::ServiceContext;

/// Read-query counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub pages: usize,
    pub like_counts: usize,
    pub comment_counts: usize,
    pub liked_among: usize,
    pub followed_among: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.pages + self.like_counts + self.comment_counts + self.liked_among + self.followed_among
    }
}

#[derive(Default)]
struct State {
    next_id: i64,
    profiles: HashMap<Snowflake, Profile>,
    postings: Vec<Posting>,
    likes: Vec<Like>,
    comments: Vec<Comment>,
    follows: Vec<Follow>,
    watch_events: Vec<WatchEvent>,
    calls: CallCounts,
    fail_comment_counts: bool,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn next_id(state: &mut State) -> Snowflake {
        state.next_id += 1;
        Snowflake::new(state.next_id)
    }

    /// Base instant of the fake posting log; `add_posting` offsets are seconds from it
    pub fn epoch() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    pub fn add_profile(&self, name: &str) -> Snowflake {
        let mut state = self.lock();
        let id = Self::next_id(&mut state);
        state
            .profiles
            .insert(id, Profile::new(id, Snowflake::new(id.into_inner() + 1_000_000), name.to_string()));
        id
    }

    /// Add a posting created `seconds` after [`InMemoryStore::epoch`]; ids are increasing
    pub fn add_posting(&self, creator: Snowflake, seconds: i64) -> Snowflake {
        let mut state = self.lock();
        let id = Self::next_id(&mut state);
        let mut posting = Posting::new(id, creator);
        posting.created_at = Self::epoch() + Duration::seconds(seconds);
        state.postings.push(posting);
        id
    }

    pub fn add_like(&self, profile: Snowflake, posting: Snowflake) {
        self.lock().likes.push(Like::new(profile, posting));
    }

    pub fn add_comment(&self, profile: Snowflake, posting: Snowflake) {
        let mut state = self.lock();
        let id = Self::next_id(&mut state);
        let comment = Comment::new(id, profile, posting, "nice").unwrap();
        state.comments.push(comment);
    }

    pub fn add_follow(&self, follower: Snowflake, following: Snowflake) {
        let follow = Follow::new(follower, following).unwrap();
        self.lock().follows.push(follow);
    }

    pub fn fail_comment_counts(&self) {
        self.lock().fail_comment_counts = true;
    }

    pub fn calls(&self) -> CallCounts {
        self.lock().calls
    }

    pub fn reset_calls(&self) {
        self.lock().calls = CallCounts::default();
    }

    pub fn watch_events(&self) -> Vec<WatchEvent> {
        self.lock().watch_events.clone()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.lock().comments.clone()
    }

    /// Every posting id in `(created_at DESC, id DESC)` order
    pub fn feed_order(&self) -> Vec<String> {
        let mut postings = self.lock().postings.clone();
        postings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        postings.iter().map(|p| p.id.to_string()).collect()
    }

    /// Service context backed by this store; the pool is never connected
    pub async fn context(&self) -> ServiceContext {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        ServiceContext::builder()
            .pool(pool)
            .posting_repo(Arc::new(self.clone()))
            .profile_repo(Arc::new(self.clone()))
            .like_repo(Arc::new(self.clone()))
            .comment_repo(Arc::new(self.clone()))
            .follow_repo(Arc::new(self.clone()))
            .watch_event_repo(Arc::new(self.clone()))
            .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
            .build()
            .unwrap()
    }

    fn with_creator(state: &State, posting: &Posting) -> PostingWithCreator {
        let creator = state
            .profiles
            .get(&posting.creator_id)
            .map_or_else(
                || CreatorSummary {
                    id: posting.creator_id,
                    name: String::new(),
                    photo: None,
                },
                Profile::summary,
            );
        PostingWithCreator {
            posting: posting.clone(),
            creator,
        }
    }

    fn counts<'a>(
        ids: &[Snowflake],
        posting_ids: impl Iterator<Item = &'a Snowflake>,
    ) -> HashMap<Snowflake, i64> {
        let wanted: HashSet<_> = ids.iter().collect();
        let mut counts = HashMap::new();
        for id in posting_ids.filter(|id| wanted.contains(id)) {
            *counts.entry(*id).or_insert(0) += 1;
        }
        counts
    }
}

#[async_trait]
impl PostingRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PostingWithCreator>> {
        let state = self.lock();
        Ok(state
            .postings
            .iter()
            .find(|p| p.id == id)
            .map(|p| Self::with_creator(&state, p)))
    }

    async fn find_page(
        &self,
        seek: Option<FeedPosition>,
        limit: i64,
    ) -> RepoResult<Vec<PostingWithCreator>> {
        let mut state = self.lock();
        state.calls.pages += 1;

        let mut postings: Vec<&Posting> = state
            .postings
            .iter()
            .filter(|p| seek.map_or(true, |s| s.precedes(p.created_at, p.id)))
            .collect();
        postings.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(postings
            .into_iter()
            .take(limit as usize)
            .map(|p| Self::with_creator(&state, p))
            .collect())
    }

    async fn create(&self, posting: &Posting) -> RepoResult<()> {
        let mut state = self.lock();
        if !state.profiles.contains_key(&posting.creator_id) {
            return Err(DomainError::ProfileNotFound(posting.creator_id));
        }
        state.postings.push(posting.clone());
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>> {
        Ok(self.lock().profiles.get(&id).cloned())
    }

    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        self.lock().profiles.insert(profile.id, profile.clone());
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn create(&self, like: &Like) -> RepoResult<()> {
        let mut state = self.lock();
        if state
            .likes
            .iter()
            .any(|l| l.profile_id == like.profile_id && l.posting_id == like.posting_id)
        {
            return Err(DomainError::AlreadyLiked);
        }
        state.likes.push(like.clone());
        Ok(())
    }

    async fn delete(&self, profile_id: Snowflake, posting_id: Snowflake) -> RepoResult<()> {
        let mut state = self.lock();
        let before = state.likes.len();
        state
            .likes
            .retain(|l| !(l.profile_id == profile_id && l.posting_id == posting_id));
        if state.likes.len() == before {
            return Err(DomainError::LikeNotFound);
        }
        Ok(())
    }

    async fn count_by_postings(
        &self,
        posting_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, i64>> {
        let mut state = self.lock();
        state.calls.like_counts += 1;
        Ok(Self::counts(posting_ids, state.likes.iter().map(|l| &l.posting_id)))
    }

    async fn liked_among(
        &self,
        viewer_id: Snowflake,
        posting_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>> {
        let mut state = self.lock();
        state.calls.liked_among += 1;
        Ok(state
            .likes
            .iter()
            .filter(|l| l.profile_id == viewer_id && posting_ids.contains(&l.posting_id))
            .map(|l| l.posting_id)
            .collect())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.lock().comments.push(comment.clone());
        Ok(())
    }

    async fn count_by_postings(
        &self,
        posting_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, i64>> {
        let mut state = self.lock();
        state.calls.comment_counts += 1;
        if state.fail_comment_counts {
            return Err(DomainError::DatabaseError("connection reset".to_string()));
        }
        Ok(Self::counts(posting_ids, state.comments.iter().map(|c| &c.posting_id)))
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        let mut state = self.lock();
        if state.follows.iter().any(|f| {
            f.follower_id == follow.follower_id && f.following_id == follow.following_id
        }) {
            return Err(DomainError::AlreadyFollowing);
        }
        state.follows.push(follow.clone());
        Ok(())
    }

    async fn delete(&self, follower_id: Snowflake, following_id: Snowflake) -> RepoResult<()> {
        let mut state = self.lock();
        let before = state.follows.len();
        state
            .follows
            .retain(|f| !(f.follower_id == follower_id && f.following_id == following_id));
        if state.follows.len() == before {
            return Err(DomainError::FollowNotFound);
        }
        Ok(())
    }

    async fn followed_among(
        &self,
        viewer_id: Snowflake,
        profile_ids: &[Snowflake],
    ) -> RepoResult<HashSet<Snowflake>> {
        let mut state = self.lock();
        state.calls.followed_among += 1;
        Ok(state
            .follows
            .iter()
            .filter(|f| f.follower_id == viewer_id && profile_ids.contains(&f.following_id))
            .map(|f| f.following_id)
            .collect())
    }
}

#[async_trait]
impl WatchEventRepository for InMemoryStore {
    async fn create(&self, event: &WatchEvent) -> RepoResult<()> {
        self.lock().watch_events.push(event.clone());
        Ok(())
    }
}
