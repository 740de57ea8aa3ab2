//! Integration tests for public host resolution and the render context.

mod common;

use axum::http::StatusCode;
use common::{authed_post_json, body_json, get_with_host};
use serde_json::json;
use sqlx::PgPool;

async fn seed_showcase(pool: &PgPool, name: &str, slug: &str, domains: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = authed_post_json(
        app,
        "/api/v1/showcases",
        json!({ "name": name, "slug": slug, "domains": domains }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn root_resolves_by_host_header(pool: PgPool) {
    let id = seed_showcase(&pool, "Spring offers", "main", "offers.example").await;

    let app = common::build_test_app(pool);
    let response = get_with_host(app, "/", "offers.example").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["showcase"]["id"], id);
    assert_eq!(json["templates"][0], "index.html");
    assert!(json["cards"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn host_port_is_ignored_for_matching(pool: PgPool) {
    seed_showcase(&pool, "Spring offers", "main", "offers.example").await;

    let app = common::build_test_app(pool);
    let response = get_with_host(app, "/", "offers.example:8080").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unicode_host_matches_punycode_domain(pool: PgPool) {
    seed_showcase(&pool, "RF offers", "main", "xn--e1afmkfd.xn--p1ai").await;

    let app = common::build_test_app(pool);
    let response = get_with_host(app, "/", "пример.рф").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_host_returns_404(pool: PgPool) {
    seed_showcase(&pool, "Spring offers", "main", "offers.example").await;

    let app = common::build_test_app(pool);
    let response = get_with_host(app, "/", "elsewhere.example").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn slug_key_narrows_within_host(pool: PgPool) {
    seed_showcase(&pool, "Main page", "main", "offers.example").await;
    let promo = seed_showcase(&pool, "Promo page", "promo", "offers.example").await;

    let app = common::build_test_app(pool);
    let response = get_with_host(app, "/promo", "offers.example").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["showcase"]["id"], promo);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn numeric_key_requires_matching_host(pool: PgPool) {
    let id = seed_showcase(&pool, "Main page", "main", "offers.example").await;

    let app = common::build_test_app(pool.clone());
    let response = get_with_host(app, &format!("/{id}"), "offers.example").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_with_host(app, &format!("/{id}"), "elsewhere.example").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cards_get_composed_links_in_context(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = authed_post_json(
        app,
        "/api/v1/showcases",
        json!({
            "name": "Tracked",
            "slug": "main",
            "domains": "offers.example",
            "extra_params": "utm_source=vitrine"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = authed_post_json(
        app,
        &format!("/api/v1/showcases/{id}/cards"),
        json!({ "title": "Fast cash", "btn_url": "lender.example/go" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get_with_host(app, "/", "offers.example").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let cards = json["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(
        cards[0]["btn_url"],
        "https://lender.example/go?utm_source=vitrine"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_card_link_is_suppressed(pool: PgPool) {
    let id = seed_showcase(&pool, "Spring offers", "main", "offers.example").await;

    let app = common::build_test_app(pool.clone());
    let response = authed_post_json(
        app,
        &format!("/api/v1/showcases/{id}/cards"),
        json!({ "title": "No link yet", "btn_url": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get_with_host(app, "/", "offers.example").await).await;
    assert!(json["cards"][0]["btn_url"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn themed_showcase_lists_fallback_candidates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = authed_post_json(
        app,
        "/api/v1/showcases",
        json!({
            "name": "Green site",
            "slug": "main",
            "domains": "offers.example",
            "template": "green"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get_with_host(app, "/", "offers.example").await).await;
    assert_eq!(json["templates"][0], "themes/green/index.html");
    assert_eq!(json["templates"][1], "index.html");
}
