//! Sorting and pagination rules for listing endpoints.
//!
//! Marketplace, inventory, achievements and activity listings all accept
//! `sortBy` / `sortOrder` / `page` / `limit`. The types here turn those raw
//! query values into validated, clamped parameters; the repositories map the
//! sort keys onto whitelisted SQL columns.

use serde::Serialize;

use crate::error::CoreError;

/// Page size used when `limit` is absent.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc` (case-insensitive). `None` yields `default`.
    pub fn parse_or(s: Option<&str>, default: SortOrder) -> Result<Self, CoreError> {
        match s {
            None => Ok(default),
            Some(v) if v.eq_ignore_ascii_case("asc") => Ok(Self::Asc),
            Some(v) if v.eq_ignore_ascii_case("desc") => Ok(Self::Desc),
            Some(v) => Err(CoreError::Validation(format!(
                "Invalid sortOrder '{v}'. Must be 'asc' or 'desc'"
            ))),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Sort keys accepted by NFT listings (marketplace and inventory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NftSortKey {
    CreatedAt,
    Price,
    Name,
    Rarity,
    AcquiredDate,
}

impl NftSortKey {
    /// Parse a `sortBy` value. A missing key falls back to `createdAt`.
    pub fn parse(s: Option<&str>) -> Result<Self, CoreError> {
        match s {
            None | Some("createdAt") => Ok(Self::CreatedAt),
            Some("price") => Ok(Self::Price),
            Some("name") => Ok(Self::Name),
            Some("rarity") => Ok(Self::Rarity),
            Some("acquiredDate") => Ok(Self::AcquiredDate),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid sortBy '{other}'. Must be one of: createdAt, price, name, rarity, acquiredDate"
            ))),
        }
    }
}

/// Sort keys accepted by the achievement catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementSortKey {
    CreatedAt,
    Points,
    Name,
    Rarity,
}

impl AchievementSortKey {
    pub fn parse(s: Option<&str>) -> Result<Self, CoreError> {
        match s {
            None | Some("createdAt") => Ok(Self::CreatedAt),
            Some("points") => Ok(Self::Points),
            Some("name") => Ok(Self::Name),
            Some("rarity") => Ok(Self::Rarity),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid sortBy '{other}'. Must be one of: createdAt, points, name, rarity"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: clamp_page(page),
            limit: clamp_limit(limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    /// Row offset for SQL `OFFSET`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Build the pagination metadata for a result set of `total` rows.
    pub fn paginate(&self, total: i64) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: total_pages(total, self.limit),
        }
    }
}

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Number of pages needed to show `total` rows at `limit` per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}
