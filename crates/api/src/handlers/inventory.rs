//! Handler for `/inventory`: the caller's own collection.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gamervault_db::repositories::NftRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::NftListParams;
use crate::response::ListingResponse;
use crate::state::AppState;

/// GET /api/v1/inventory
///
/// Same filters as the marketplace plus `forSale`, restricted to NFTs the
/// caller owns.
pub async fn list_inventory(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NftListParams>,
) -> AppResult<impl IntoResponse> {
    let mut listing = params.parse()?;
    listing.filter.owner_id = Some(auth.user_id);

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
