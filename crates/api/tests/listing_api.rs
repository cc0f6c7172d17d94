//! HTTP-level integration tests for filtered, sorted, paginated NFT listings
//! (marketplace and inventory) and their bucket statistics.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, get_auth, list_for_sale, mint_nft, register_user};
use sqlx::PgPool;

/// Seed two sellers with a spread of listed and unlisted NFTs.
///
/// Listed: 5 NFTs across two games, three rarities and three categories.
/// Unlisted: 1 NFT.
async fn seed_market(pool: &PgPool) -> (String, String) {
    let (_, alice) = register_user(pool, "Alice").await;
    let (_, bob) = register_user(pool, "Bob").await;

    let listed = [
        (&alice, "Dawn Blade", "Abyss", "Legendary", "Weapon", 500.0),
        (&alice, "Dusk Plate", "Abyss", "Rare", "Armor", 120.0),
        (&alice, "Coin of Ash", "Forge", "Common", "Collectible", 5.0),
        (&bob, "Storm Steed", "Forge", "Legendary", "Mount", 900.0),
        (&bob, "Rune Dagger", "Abyss", "Rare", "Weapon", 60.0),
    ];
    for (token, name, game, rarity, category, price) in listed {
        let id = mint_nft(pool, token, name, game, rarity, category).await;
        list_for_sale(pool, token, id, price).await;
    }
    mint_nft(pool, &bob, "Hidden Gem", "Forge", "Epic", "Collectible").await;

    (alice, bob)
}

fn bucket_sum(map: &serde_json::Value) -> i64 {
    map.as_object()
        .unwrap()
        .values()
        .map(|v| v.as_i64().unwrap())
        .sum()
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["name"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn marketplace_lists_only_for_sale_items_with_consistent_stats(pool: PgPool) {
    seed_market(&pool).await;

    let response = get(build_test_app(pool), "/api/v1/marketplace").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let stats = &json["stats"];
    assert_eq!(stats["total"], 5);
    assert_eq!(json["pagination"]["total"], 5);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 12);
    assert_eq!(json["pagination"]["totalPages"], 1);

    assert_eq!(bucket_sum(&stats["byRarity"]), 5);
    assert_eq!(bucket_sum(&stats["byGame"]), 5);
    assert_eq!(bucket_sum(&stats["byCategory"]), 5);
    assert_eq!(stats["byRarity"]["Legendary"], 2);
    assert_eq!(stats["byGame"]["Abyss"], 3);
    assert!(!names(&json).contains(&"Hidden Gem".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filters_narrow_both_data_and_stats(pool: PgPool) {
    seed_market(&pool).await;

    let response = get(
        build_test_app(pool),
        "/api/v1/marketplace?game=Abyss&rarity=rare&minPrice=50",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(bucket_sum(&json["stats"]["byCategory"]), 2);
    for nft in json["data"].as_array().unwrap() {
        assert_eq!(nft["game"], "Abyss");
        assert_eq!(nft["rarity"], "Rare");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inverted_price_bounds_yield_empty_results(pool: PgPool) {
    seed_market(&pool).await;

    let response = get(
        build_test_app(pool),
        "/api/v1/marketplace?minPrice=800&maxPrice=100",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
    assert_eq!(json["stats"]["total"], 0);
    assert_eq!(json["pagination"]["totalPages"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sort_by_price_ascending(pool: PgPool) {
    seed_market(&pool).await;

    let response = get(
        build_test_app(pool),
        "/api/v1/marketplace?sortBy=price&sortOrder=asc",
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(
        names(&json),
        vec!["Coin of Ash", "Rune Dagger", "Dusk Plate", "Dawn Blade", "Storm Steed"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sort_by_rarity_uses_tier_order(pool: PgPool) {
    seed_market(&pool).await;

    let response = get(
        build_test_app(pool),
        "/api/v1/marketplace?sortBy=rarity&sortOrder=desc",
    )
    .await;

    let json = body_json(response).await;
    let rarities: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["rarity"].as_str().unwrap())
        .collect();
    assert_eq!(rarities, vec!["Legendary", "Legendary", "Rare", "Rare", "Common"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pagination_splits_results(pool: PgPool) {
    seed_market(&pool).await;

    let page1 = body_json(
        get(
            build_test_app(pool.clone()),
            "/api/v1/marketplace?sortBy=name&sortOrder=asc&limit=2&page=1",
        )
        .await,
    )
    .await;
    let page3 = body_json(
        get(
            build_test_app(pool),
            "/api/v1/marketplace?sortBy=name&sortOrder=asc&limit=2&page=3",
        )
        .await,
    )
    .await;

    assert_eq!(page1["pagination"]["totalPages"], 3);
    assert_eq!(names(&page1), vec!["Coin of Ash", "Dawn Blade"]);
    assert_eq!(names(&page3), vec!["Storm Steed"]);
    assert_eq!(page3["stats"]["total"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn oversized_limit_is_clamped(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/marketplace?limit=5000&page=0").await;

    let json = body_json(response).await;
    assert_eq!(json["pagination"]["limit"], 100);
    assert_eq!(json["pagination"]["page"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_listing_parameters_are_rejected(pool: PgPool) {
    for query in [
        "sortBy=owner",
        "sortOrder=sideways",
        "rarity=Golden",
        "category=Vehicle",
        "maxPrice=NaN",
        "minPrice=NaN",
        "maxPrice=inf",
    ] {
        let response = get(
            build_test_app(pool.clone()),
            &format!("/api/v1/marketplace?{query}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "query: {query}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn inventory_is_scoped_to_caller(pool: PgPool) {
    let (_, bob) = seed_market(&pool).await;

    let all = body_json(get_auth(build_test_app(pool.clone()), "/api/v1/inventory", &bob).await).await;
    assert_eq!(all["stats"]["total"], 3);
    assert_eq!(bucket_sum(&all["stats"]["byRarity"]), 3);

    let unlisted = body_json(
        get_auth(
            build_test_app(pool.clone()),
            "/api/v1/inventory?forSale=false",
            &bob,
        )
        .await,
    )
    .await;
    assert_eq!(names(&unlisted), vec!["Hidden Gem"]);

    let anonymous = get(build_test_app(pool), "/api/v1/inventory").await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}
