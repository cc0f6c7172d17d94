//! HTTP-level integration tests for the achievement catalog and unlocks.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, count_activities, get, get_auth, post_auth, post_json_auth,
    register_user,
};
use gamervault_db::models::achievement::CreateAchievement;
use gamervault_db::repositories::{AchievementRepo, UserProfileRepo};
use sqlx::PgPool;

fn new_achievement(name: &str, game: &str, points: i32, rarity: &str) -> CreateAchievement {
    CreateAchievement {
        name: name.to_string(),
        description: Some(format!("Earned in {game}")),
        game: game.to_string(),
        points,
        rarity: rarity.to_string(),
        criteria: None,
        icon: None,
    }
}

async fn seed_catalog(pool: &PgPool) -> Vec<i64> {
    let entries = [
        new_achievement("First Blood", "Abyss", 10, "Common"),
        new_achievement("Untouchable", "Abyss", 600, "Legendary"),
        new_achievement("Smith", "Forge", 50, "Uncommon"),
        new_achievement("Grandmaster Smith", "Forge", 700, "Epic"),
    ];
    let mut ids = Vec::new();
    for entry in &entries {
        ids.push(AchievementRepo::create(pool, entry).await.unwrap().id);
    }
    ids
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_lists_with_stats_and_no_category_bucket(pool: PgPool) {
    seed_catalog(&pool).await;

    let response = get(build_test_app(pool), "/api/v1/achievements?game=Forge").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["stats"]["total"], 2);
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["stats"]["byGame"]["Forge"], 2);
    assert!(json["stats"].get("byCategory").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_sorts_by_points(pool: PgPool) {
    seed_catalog(&pool).await;

    let response = get(
        build_test_app(pool),
        "/api/v1/achievements?sortBy=points&sortOrder=desc",
    )
    .await;

    let json = body_json(response).await;
    let points: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["points"].as_i64().unwrap())
        .collect();
    assert_eq!(points, vec![700, 600, 50, 10]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_rejects_nft_only_sort_key(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/achievements?sortBy=price").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_achievement_requires_session_and_valid_rarity(pool: PgPool) {
    let (_, token) = register_user(&pool, "Curator").await;
    let body = serde_json::json!({
        "name": "Speed Demon",
        "game": "Racer",
        "points": 100,
        "rarity": "rare",
    });

    let created = post_json_auth(build_test_app(pool.clone()), "/api/v1/achievements", body, &token).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let json = body_json(created).await;
    assert_eq!(json["data"]["rarity"], "Rare");

    let bad = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/achievements",
        serde_json::json!({ "name": "X", "game": "Racer", "points": 1, "rarity": "Cursed" }),
        &token,
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let anonymous = common::post_json(
        build_test_app(pool),
        "/api/v1/achievements",
        serde_json::json!({ "name": "Y", "game": "Racer", "points": 1, "rarity": "Rare" }),
    )
    .await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlock_awards_experience_and_records_activity(pool: PgPool) {
    let ids = seed_catalog(&pool).await;
    let (user_id, token) = register_user(&pool, "Achiever").await;

    for id in [ids[1], ids[3]] {
        let response = post_auth(
            build_test_app(pool.clone()),
            &format!("/api/v1/achievements/{id}/unlock"),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let profile = UserProfileRepo::find_by_user_id(&pool, user_id).await.unwrap().unwrap();
    assert_eq!(profile.experience, 1300);
    assert_eq!(count_activities(&pool, user_id, "achievement_unlocked").await, 2);

    let unlocked = body_json(
        get_auth(build_test_app(pool), "/api/v1/achievements/unlocked", &token).await,
    )
    .await;
    let list = unlocked["data"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|a| a["unlockedAt"].is_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlocking_twice_is_conflict_and_awards_nothing(pool: PgPool) {
    let ids = seed_catalog(&pool).await;
    let (user_id, token) = register_user(&pool, "Repeater").await;
    let uri = format!("/api/v1/achievements/{}/unlock", ids[2]);

    let first = post_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = post_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let profile = UserProfileRepo::find_by_user_id(&pool, user_id).await.unwrap().unwrap();
    assert_eq!(profile.experience, 50);
    assert_eq!(count_activities(&pool, user_id, "achievement_unlocked").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unlocking_missing_achievement_is_not_found(pool: PgPool) {
    let (_, token) = register_user(&pool, "Seeker").await;

    let response = post_auth(build_test_app(pool), "/api/v1/achievements/31337/unlock", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
