//! HTTP-level integration tests for the artwork catalogue: CRUD, localized
//! public views, and reordering.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Create an artwork through the admin API and return its JSON row.
async fn create_artwork(pool: &PgPool, token: &str, title: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "title": title,
        "description": "Oil on canvas",
        "theme": "Nature",
        "category": "painting"
    });
    let response = post_json_auth(app, "/api/v1/admin/artworks", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// Created artworks are appended to the end of the collection.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_appends_to_collection(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;

    let first = create_artwork(&pool, &token, "First").await;
    let second = create_artwork(&pool, &token, "Second").await;

    assert_eq!(first["data"]["display_order"], 1);
    assert_eq!(second["data"]["display_order"], 2);
}

/// Creating with an empty title returns 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_empty_title(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "", "category": "painting" });
    let response = post_json_auth(app, "/api/v1/admin/artworks", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Creating with an unknown category returns 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_rejects_unknown_category(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Untitled", "category": "fresco" });
    let response = post_json_auth(app, "/api/v1/admin/artworks", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating a missing artwork returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_404(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "Renamed" });
    let response = put_json_auth(app, "/api/v1/admin/artworks/9999", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Delete removes the row; a second delete returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let created = create_artwork(&pool, &token, "Ephemeral").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/artworks/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/admin/artworks/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Localization
// ---------------------------------------------------------------------------

/// A non-default-language update writes only the variant column; the public
/// views then resolve per requested language with fallback.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_localized_update_and_resolution(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let created = create_artwork(&pool, &token, "Sun").await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Add an Armenian title only.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "language": "am", "title": "Արև" });
    let response = put_json_auth(app, &format!("/api/v1/admin/artworks/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let row = body_json(response).await;
    // The base column is untouched; the variant column holds the translation.
    assert_eq!(row["data"]["title"], "Sun");
    assert_eq!(row["data"]["title_am"], "Արև");
    assert_eq!(row["data"]["title_ru"], serde_json::Value::Null);

    // Armenian view resolves to the variant.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/artworks/{id}?lang=am")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Արև");

    // Russian view has no variant and falls back to the default language.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/artworks/{id}?lang=ru")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Sun");

    // Unknown code falls back to the default language.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/artworks/{id}?lang=de")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Sun");
}

/// The base (fallback) value of a required field cannot be blanked through
/// an update; a blank variant is accepted and reads as absent.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_cannot_blank_base_title(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    let created = create_artwork(&pool, &token, "Sun").await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Blanking the default-language title is rejected.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "language": "en", "title": "   " });
    let response = put_json_auth(app, &format!("/api/v1/admin/artworks/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The row is untouched.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/artworks/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Sun");

    // Blanking a variant is fine: it just falls back to the base value.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "language": "am", "title": "" });
    let response = put_json_auth(app, &format!("/api/v1/admin/artworks/{id}"), body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/artworks/{id}?lang=am")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Sun");
}

/// The public list never exposes variant columns, only resolved values.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_list_is_single_language(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    create_artwork(&pool, &token, "Sun").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/artworks").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let item = &json["data"][0];
    assert_eq!(item["title"], "Sun");
    assert!(item.get("title_am").is_none());
    assert!(item.get("title_ru").is_none());
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

/// Moving the first item to the end shifts the rest up and renumbers 1..n.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_moves_and_renumbers(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    for title in ["A", "B", "C", "D"] {
        create_artwork(&pool, &token, title).await;
    }

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "from_index": 0, "to_index": 3 });
    let response = post_json_auth(app, "/api/v1/admin/artworks/reorder", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["B", "C", "D", "A"]);

    let orders: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["display_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, [1, 2, 3, 4]);
}

/// An out-of-range index returns 400 and changes nothing.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_rejects_out_of_range(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    create_artwork(&pool, &token, "Only").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "from_index": 0, "to_index": 5 });
    let response = post_json_auth(app, "/api/v1/admin/artworks/reorder", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/artworks", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["display_order"], 1);
}

/// A no-op move (same position) succeeds without changing the order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_same_position_is_noop(pool: PgPool) {
    let (_admin, token) = common::seed_admin(&pool).await;
    create_artwork(&pool, &token, "A").await;
    create_artwork(&pool, &token, "B").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "from_index": 1, "to_index": 1 });
    let response = post_json_auth(app, "/api/v1/admin/artworks/reorder", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["title"], "A");
    assert_eq!(json["data"][1]["title"], "B");
}
