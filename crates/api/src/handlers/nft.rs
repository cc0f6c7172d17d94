//! Handlers for the `/nfts` resource (mint, detail, listing changes).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::error::CoreError;
use gamervault_core::nft::{self, Category, Rarity};
use gamervault_core::types::DbId;
use gamervault_db::models::nft::CreateNft;
use gamervault_db::repositories::NftRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /nfts`.
#[derive(Debug, Deserialize)]
pub struct MintNftRequest {
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub game: String,
    pub rarity: String,
    pub category: String,
}

/// Request body for `PUT /nfts/{id}/listing`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    pub for_sale: bool,
    pub price: Option<f64>,
}

/// POST /api/v1/nfts
///
/// Add a simulated NFT to the caller's collection.
pub async fn mint_nft(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<MintNftRequest>,
) -> AppResult<impl IntoResponse> {
    nft::validate_name(&input.name)?;
    nft::validate_description(input.description.as_deref())?;
    if input.image.trim().is_empty() {
        return Err(AppError::BadRequest("image must not be empty".into()));
    }
    if input.game.trim().is_empty() {
        return Err(AppError::BadRequest("game must not be empty".into()));
    }
    let rarity = Rarity::from_str(&input.rarity)?;
    let category = Category::from_str(&input.category)?;

    let created = NftRepo::create(
        &state.pool,
        &CreateNft {
            name: input.name.trim().to_string(),
            description: input.description,
            image: input.image,
            game: input.game.trim().to_string(),
            rarity: rarity.as_str().to_string(),
            category: category.as_str().to_string(),
            owner_id: auth.user_id,
        },
    )
    .await?;

    tracing::info!(nft_id = created.id, user_id = auth.user_id, "NFT minted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/nfts/{id}
pub async fn get_nft(
    State(state): State<AppState>,
    Path(nft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NftRepo::find_by_id(&state.pool, nft_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NFT",
            id: nft_id,
        }))?;

    Ok(Json(DataResponse { data: found }))
}

/// PUT /api/v1/nfts/{id}/listing
///
/// List the caller's NFT for sale at a price, or take it off sale.
pub async fn update_listing(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(nft_id): Path<DbId>,
    Json(input): Json<UpdateListingRequest>,
) -> AppResult<impl IntoResponse> {
    let price = if input.for_sale {
        let price = input.price.ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "price is required when listing for sale".into(),
            ))
        })?;
        nft::validate_price(price)?;
        Some(price)
    } else {
        None
    };

    let existing = NftRepo::find_by_id(&state.pool, nft_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "NFT",
            id: nft_id,
        }))?;
    if existing.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner can change this listing".into(),
        )));
    }

    // Ownership can change between the check and the update; the repository
    // re-checks the owner in its WHERE clause.
    let updated = NftRepo::set_listing(&state.pool, nft_id, auth.user_id, price)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(
                "Only the owner can change this listing".into(),
            ))
        })?;

    tracing::info!(
        nft_id,
        user_id = auth.user_id,
        for_sale = updated.for_sale,
        "NFT listing updated"
    );

    Ok(Json(DataResponse { data: updated }))
}
