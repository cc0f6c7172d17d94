//! JSON envelopes. Successful responses put the payload under `data`;
//! listings add `stats` and `pagination` beside it.

use gamervault_core::listing::Pagination;
use gamervault_db::models::listing::ListingStats;
use serde::Serialize;

/// `{ "data": T }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "stats": {...}, "pagination": {...} }` envelope for
/// filtered listings.
#[derive(Debug, Serialize)]
pub struct ListingResponse<T: Serialize> {
    pub data: Vec<T>,
    pub stats: ListingStats,
    pub pagination: Pagination,
}

/// `{ "data": [...], "pagination": {...} }` envelope for plain paginated
/// listings.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
