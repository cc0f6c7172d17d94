//! Handlers for the `/marketplace` resource (browse listings, purchase).

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gamervault_core::error::CoreError;
use gamervault_core::types::DbId;
use gamervault_db::models::nft::PurchaseOutcome;
use gamervault_db::repositories::{MarketplaceRepo, NftRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::NftListParams;
use crate::response::{DataResponse, ListingResponse};
use crate::state::AppState;

/// GET /api/v1/marketplace
///
/// Browse NFTs currently for sale with filters, sorting, per-bucket counts
/// and pagination. Public.
pub async fn list_marketplace(
    State(state): State<AppState>,
    Query(params): Query<NftListParams>,
) -> AppResult<impl IntoResponse> {
    let mut listing = params.parse()?;
    listing.filter.for_sale = Some(true);

    let data = NftRepo::list(
        &state.pool,
        &listing.filter,
        listing.sort,
        listing.order,
        listing.page,
    )
    .await?;
    let stats = NftRepo::stats(&state.pool, &listing.filter).await?;
    let pagination = listing.page.paginate(stats.total);

    Ok(Json(ListingResponse {
        data,
        stats,
        pagination,
    }))
}

/// POST /api/v1/marketplace/{id}/purchase
///
/// Buy a listed NFT. Unlisted or missing NFTs are 404; buying your own
/// listing is 400 `INVALID_OPERATION`.
pub async fn purchase(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(nft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    match MarketplaceRepo::purchase(&state.pool, nft_id, auth.user_id).await? {
        PurchaseOutcome::Completed { nft, seller_id } => {
            tracing::info!(nft_id, buyer_id = auth.user_id, seller_id, "NFT purchased");
            Ok(Json(DataResponse { data: nft }))
        }
        PurchaseOutcome::NotListed => Err(AppError::Core(CoreError::NotFound {
            entity: "NFT listing",
            id: nft_id,
        })),
        PurchaseOutcome::AlreadyOwner => Err(AppError::Core(CoreError::InvalidOperation(
            "You already own this NFT".into(),
        ))),
    }
}
