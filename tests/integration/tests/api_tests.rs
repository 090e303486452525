//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET (API_PORT defaults to 0)
//!
//! Run with: cargo test -p integration-tests --test api_tests
//!
//! Feed tests page through postings seeded in a private day, starting from a
//! cursor at the end of that day, so data from other tests never interleaves.

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_pages_in_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut seed = Seeder::connect().await.unwrap();
    let creator = seed.profile("creator").await.unwrap();

    // P2 is seeded first, so it shares P1's timestamp with a smaller id
    let p2 = seed.posting_at(&creator, 100).await.unwrap();
    let p1 = seed.posting_at(&creator, 100).await.unwrap();
    let p3 = seed.posting_at(&creator, 90).await.unwrap();

    let path = format!("/api/v1/feed?limit=2&cursor={}", seed.day_cursor());
    let response = server.get(&path).await.unwrap();
    let first: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.ids(), vec![p1.to_string(), p2.to_string()]);
    assert_eq!(first.items[0].creator.name, "creator");
    let cursor = first.next_cursor.expect("full page carries a cursor");

    let response = server
        .get(&format!("/api/v1/feed?limit=2&cursor={cursor}"))
        .await
        .unwrap();
    let second: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();

    // Anything after P3 belongs to an older day
    assert_eq!(second.items[0].id, p3.to_string());
    assert!(second.items[1..]
        .iter()
        .all(|item| item.creator.id != creator.id.to_string()));

    seed.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_feed_viewer_flags() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut seed = Seeder::connect().await.unwrap();
    let creator = seed.profile("creator").await.unwrap();
    let viewer = seed.profile("viewer").await.unwrap();
    let p2 = seed.posting_at(&creator, 100).await.unwrap();
    let p1 = seed.posting_at(&creator, 200).await.unwrap();

    let response = server
        .post_auth("/api/v1/engagement/like", &viewer.token, &LikeBody::new(p1))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/feed?limit=2&cursor={}", seed.day_cursor());

    // Anonymous: counts, no viewer flags
    let response = server.get(&path).await.unwrap();
    let anonymous: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(anonymous.ids(), vec![p1.to_string(), p2.to_string()]);
    assert_eq!(anonymous.items[0].like_count, 1);
    assert_eq!(anonymous.items[1].like_count, 0);
    assert_eq!(anonymous.items[0].comment_count, 0);
    assert!(anonymous.items.iter().all(|item| item.viewer_has_liked.is_none()
        && item.viewer_follows_creator.is_none()));

    // Signed in: both flags on every item
    let response = server.get_auth(&path, &viewer.token).await.unwrap();
    let personal: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(personal.items[0].viewer_has_liked, Some(true));
    assert_eq!(personal.items[1].viewer_has_liked, Some(false));
    assert!(personal
        .items
        .iter()
        .all(|item| item.viewer_follows_creator == Some(false)));

    seed.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_feed_invalid_cursor() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/feed?cursor=definitely-not-a-cursor")
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_CURSOR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_feed_lenient_limit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/feed?limit=abc").await.unwrap();
    let page: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.items.len() <= 20);

    let response = server.get("/api/v1/feed?limit=500").await.unwrap();
    let page: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.items.len() <= 50);
}

#[tokio::test]
async fn test_feed_invalid_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_auth("/api/v1/feed", "garbage").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
        .await
        .unwrap();
}

// ============================================================================
// Posting Tests
// ============================================================================

#[tokio::test]
async fn test_create_posting_heads_feed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut seed = Seeder::connect().await.unwrap();
    let creator = seed.profile("poster").await.unwrap();

    let body = CreatePostingBody {
        caption: Some("first clip".to_string()),
        media_url: Some("https://cdn.example.com/clip.mp4".to_string()),
        tags: vec!["intro".to_string()],
    };
    let response = server
        .post_auth("/api/v1/postings", &creator.token, &body)
        .await
        .unwrap();
    let created: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    let response = server.get(&format!("/api/v1/postings/{id}")).await.unwrap();
    let fetched: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched["caption"], "first clip");
    assert_eq!(fetched["creator"]["name"], "poster");

    seed.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_posting() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/postings/1").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "POSTING_NOT_FOUND")
        .await
        .unwrap();
}

// ============================================================================
// Engagement Tests
// ============================================================================

#[tokio::test]
async fn test_like_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut seed = Seeder::connect().await.unwrap();
    let creator = seed.profile("creator").await.unwrap();
    let viewer = seed.profile("viewer").await.unwrap();
    let posting = seed.posting_at(&creator, 10).await.unwrap();

    let response = server
        .post_auth("/api/v1/engagement/like", &viewer.token, &LikeBody::new(posting))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/engagement/like", &viewer.token, &LikeBody::new(posting))
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "ALREADY_LIKED")
        .await
        .unwrap();

    let path = format!("/api/v1/engagement/like/{posting}");
    let response = server.delete_auth(&path, &viewer.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.delete_auth(&path, &viewer.token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "LIKE_NOT_FOUND")
        .await
        .unwrap();

    seed.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_follow_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut seed = Seeder::connect().await.unwrap();
    let creator = seed.profile("creator").await.unwrap();
    let viewer = seed.profile("viewer").await.unwrap();
    let posting = seed.posting_at(&creator, 10).await.unwrap();

    let response = server
        .post_auth("/api/v1/engagement/follow", &viewer.token, &FollowBody::new(viewer.id))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "CANNOT_FOLLOW_SELF")
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/engagement/follow", &viewer.token, &FollowBody::new(creator.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/feed?limit=1&cursor={}", seed.day_cursor());
    let response = server.get_auth(&path, &viewer.token).await.unwrap();
    let page: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.ids(), vec![posting.to_string()]);
    assert_eq!(page.items[0].viewer_follows_creator, Some(true));

    let response = server
        .delete_auth(
            &format!("/api/v1/engagement/follow/{}", creator.id),
            &viewer.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    seed.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_comment_and_watch() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut seed = Seeder::connect().await.unwrap();
    let creator = seed.profile("creator").await.unwrap();
    let viewer = seed.profile("viewer").await.unwrap();
    let posting = seed.posting_at(&creator, 10).await.unwrap();

    let comment = CommentBody {
        posting_id: posting.to_string(),
        text: "  nice one  ".to_string(),
    };
    let response = server
        .post_auth("/api/v1/engagement/comment", &viewer.token, &comment)
        .await
        .unwrap();
    let created: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created["text"], "nice one");

    let watch = WatchBody {
        posting_id: posting.to_string(),
        watch_time_ms: 4200,
        completed: true,
    };
    let response = server
        .post_auth("/api/v1/engagement/watch", &viewer.token, &watch)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/feed?limit=1&cursor={}", seed.day_cursor());
    let response = server.get(&path).await.unwrap();
    let page: FeedPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.items[0].comment_count, 1);

    seed.cleanup().await.unwrap();
}

#[tokio::test]
async fn test_engagement_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/engagement/like",
            &LikeBody::new(reel_core::Snowflake::new(1)),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();
}
