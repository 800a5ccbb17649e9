//! HTTP-level integration tests for media items: video URL validation,
//! derived embed fields, and reordering.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Create a media item through the admin API and return its JSON row.
async fn create_media(
    pool: &PgPool,
    token: &str,
    name: &str,
    kind: &str,
    url: &str,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "media_name": name, "kind": kind, "url": url });
    let response = post_json_auth(app, "/api/v1/admin/media", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "create {name}");
    body_json(response).await
}

/// Video items require a recognizable YouTube URL.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_video_requires_youtube_url(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "media_name": "Interview",
        "kind": "video",
        "url": "https://vimeo.com/123456"
    });
    let response = post_json_auth(app, "/api/v1/admin/media", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// All recognized YouTube URL shapes are accepted for video items.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_video_accepts_all_url_shapes(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;

    for url in [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube.com/shorts/dQw4w9WgXcQ",
        "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
    ] {
        create_media(&pool, &token, url, "video", url).await;
    }
}

/// The public view of a video item carries derived id, embed, and thumbnail.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_video_view_has_embed_fields(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    create_media(
        &pool,
        &token,
        "Studio tour",
        "video",
        "https://youtu.be/dQw4w9WgXcQ",
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/media").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let item = &json["data"][0];
    assert_eq!(item["video_id"], "dQw4w9WgXcQ");
    assert_eq!(
        item["embed_url"],
        "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"
    );
    assert_eq!(
        item["thumbnail_url"],
        "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
    );
}

/// Article items pass through any valid URL and carry no video fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_article_has_no_video_fields(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    create_media(
        &pool,
        &token,
        "Press piece",
        "article",
        "https://example.com/interview",
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/media").await;
    let json = body_json(response).await;
    let item = &json["data"][0];
    assert_eq!(item["kind"], "article");
    assert_eq!(item["video_id"], serde_json::Value::Null);
    assert_eq!(item["embed_url"], serde_json::Value::Null);
}

/// Changing an article into a video re-checks the URL rule against the
/// merged row, not just the fields present in the request.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_kind_revalidates_url(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let created = create_media(
        &pool,
        &token,
        "Press piece",
        "article",
        "https://example.com/interview",
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Flipping the kind alone must fail: the existing URL is not YouTube.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "kind": "video" });
    let response = put_json_auth(app, &format!("/api/v1/admin/media/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Flipping kind and URL together succeeds.
    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "kind": "video", "url": "https://youtu.be/dQw4w9WgXcQ" });
    let response = put_json_auth(app, &format!("/api/v1/admin/media/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Unknown media kinds are rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_kind_rejected(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "media_name": "Podcast",
        "kind": "podcast",
        "url": "https://example.com/episode"
    });
    let response = post_json_auth(app, "/api/v1/admin/media", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Media items reorder like the other collections.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    for name in ["One", "Two", "Three"] {
        create_media(&pool, &token, name, "article", "https://example.com/a").await;
    }

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "from_index": 2, "to_index": 0 });
    let response = post_json_auth(app, "/api/v1/admin/media/reorder", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["media_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Three", "One", "Two"]);
}
