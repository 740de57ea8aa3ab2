//! Integration tests for domain-to-showcase resolution.

use sqlx::PgPool;
use vitrine_core::lookup::{LookupKey, ResolveMode};
use vitrine_db::models::showcase::CreateShowcase;
use vitrine_db::repositories::ShowcaseRepo;

fn showcase(name: &str, slug: &str, domains: &str) -> CreateShowcase {
    CreateShowcase {
        name: name.to_string(),
        slug: Some(slug.to_string()),
        domains: Some(domains.to_string()),
        template: None,
        extra_params: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn host_match_returns_the_claiming_showcase(pool: PgPool) {
    let created = ShowcaseRepo::create(&pool, &showcase("Promo", "promo", "example.com"), "promo")
        .await
        .unwrap();

    let resolved = ShowcaseRepo::resolve(&pool, "example.com", &LookupKey::Root, ResolveMode::Public)
        .await
        .unwrap()
        .expect("host should resolve");
    assert_eq!(resolved.id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_host_resolves_to_none(pool: PgPool) {
    ShowcaseRepo::create(&pool, &showcase("Promo", "promo", "example.com"), "promo")
        .await
        .unwrap();

    let resolved = ShowcaseRepo::resolve(&pool, "other.com", &LookupKey::Root, ResolveMode::Public)
        .await
        .unwrap();
    assert!(resolved.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn unicode_storage_matches_punycode_host_and_vice_versa(pool: PgPool) {
    ShowcaseRepo::create(&pool, &showcase("RU", "ru", "пример.рф"), "ru")
        .await
        .unwrap();
    ShowcaseRepo::create(&pool, &showcase("Puny", "puny", "xn--80akhbyknj4f.xn--p1ai"), "puny")
        .await
        .unwrap();

    // Stored unicode, requested punycode.
    let hit = ShowcaseRepo::resolve(
        &pool,
        "xn--e1afmkfd.xn--p1ai",
        &LookupKey::Root,
        ResolveMode::Public,
    )
    .await
    .unwrap()
    .expect("punycode host should match unicode storage");
    assert_eq!(hit.slug, "ru");

    // Stored punycode, requested unicode ("испытание.рф").
    let hit = ShowcaseRepo::resolve(&pool, "испытание.рф", &LookupKey::Root, ResolveMode::Public)
        .await
        .unwrap()
        .expect("unicode host should match punycode storage");
    assert_eq!(hit.slug, "puny");
}

#[sqlx::test(migrations = "./migrations")]
async fn main_slug_wins_root_resolution(pool: PgPool) {
    ShowcaseRepo::create(&pool, &showcase("Older", "other", "shared.com"), "other")
        .await
        .unwrap();
    let main = ShowcaseRepo::create(&pool, &showcase("Main", "main", "shared.com"), "main")
        .await
        .unwrap();
    // A newer non-main sibling must not displace "main".
    ShowcaseRepo::create(&pool, &showcase("Newest", "newest", "shared.com"), "newest")
        .await
        .unwrap();

    let resolved = ShowcaseRepo::resolve(&pool, "shared.com", &LookupKey::Root, ResolveMode::Public)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.id, main.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn without_main_most_recent_candidate_wins(pool: PgPool) {
    ShowcaseRepo::create(&pool, &showcase("First", "first", "shared.com"), "first")
        .await
        .unwrap();
    let second = ShowcaseRepo::create(&pool, &showcase("Second", "second", "shared.com"), "second")
        .await
        .unwrap();

    let resolved = ShowcaseRepo::resolve(&pool, "shared.com", &LookupKey::Root, ResolveMode::Public)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resolved.id, second.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn slug_lookup_requires_host_match_in_public_mode(pool: PgPool) {
    let created = ShowcaseRepo::create(&pool, &showcase("Promo", "promo", "example.com"), "promo")
        .await
        .unwrap();

    let key = LookupKey::Slug("promo".to_string());

    let hit = ShowcaseRepo::resolve(&pool, "example.com", &key, ResolveMode::Public)
        .await
        .unwrap();
    assert_eq!(hit.unwrap().id, created.id);

    let miss = ShowcaseRepo::resolve(&pool, "elsewhere.com", &key, ResolveMode::Public)
        .await
        .unwrap();
    assert!(miss.is_none());

    // Preview mode relaxes host matching for operators.
    let preview = ShowcaseRepo::resolve(&pool, "elsewhere.com", &key, ResolveMode::Preview)
        .await
        .unwrap();
    assert_eq!(preview.unwrap().id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn id_lookup_is_host_checked_unless_previewing(pool: PgPool) {
    let created = ShowcaseRepo::create(&pool, &showcase("Promo", "promo", "example.com"), "promo")
        .await
        .unwrap();

    let key = LookupKey::Id(created.id);

    let strict = ShowcaseRepo::resolve(&pool, "elsewhere.com", &key, ResolveMode::Public)
        .await
        .unwrap();
    assert!(strict.is_none());

    let preview = ShowcaseRepo::resolve(&pool, "elsewhere.com", &key, ResolveMode::Preview)
        .await
        .unwrap();
    assert_eq!(preview.unwrap().id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn host_header_port_is_ignored(pool: PgPool) {
    let created = ShowcaseRepo::create(&pool, &showcase("Promo", "promo", "example.com"), "promo")
        .await
        .unwrap();

    let resolved = ShowcaseRepo::resolve(
        &pool,
        "Example.COM:8443",
        &LookupKey::Root,
        ResolveMode::Public,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(resolved.id, created.id);
}
