//! Shared query parameter types for API handlers.
//!
//! Listing endpoints accept camelCase query strings
//! (`?rarity=Epic&minPrice=10&sortBy=price&sortOrder=asc&page=2&limit=12`).
//! Each params struct parses itself into validated filter, sort and page
//! values before any query runs.

use gamervault_core::error::CoreError;
use gamervault_core::listing::{AchievementSortKey, NftSortKey, PageRequest, SortOrder};
use gamervault_core::nft::{Category, Rarity};
use gamervault_db::models::achievement::AchievementFilter;
use gamervault_db::models::nft::NftFilter;
use serde::Deserialize;

/// Treat `?game=` the same as an absent parameter.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_rarity(value: &Option<String>) -> Result<Option<String>, CoreError> {
    non_empty(value)
        .map(|v| Rarity::from_str(v).map(|r| r.as_str().to_string()))
        .transpose()
}

fn parse_category(value: &Option<String>) -> Result<Option<String>, CoreError> {
    non_empty(value)
        .map(|v| Category::from_str(v).map(|c| c.as_str().to_string()))
        .transpose()
}

/// `NaN` compares true against every price in Postgres, so only finite
/// bounds are accepted.
fn price_bound(name: &str, value: Option<f64>) -> Result<Option<f64>, CoreError> {
    match value {
        Some(v) if !v.is_finite() => Err(CoreError::Validation(format!(
            "{name} must be a finite number"
        ))),
        other => Ok(other),
    }
}

/// Generic pagination parameters (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

// ---------------------------------------------------------------------------
// NFT listings (marketplace, inventory)
// ---------------------------------------------------------------------------

/// Query parameters for NFT listing endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftListParams {
    pub game: Option<String>,
    pub rarity: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Only honoured by the inventory endpoint.
    pub for_sale: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Validated form of [`NftListParams`].
#[derive(Debug, Clone)]
pub struct NftListing {
    pub filter: NftFilter,
    pub sort: NftSortKey,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl NftListParams {
    /// Validate enum values and sort keys and clamp paging.
    pub fn parse(&self) -> Result<NftListing, CoreError> {
        let filter = NftFilter {
            owner_id: None,
            for_sale: self.for_sale,
            game: non_empty(&self.game).map(str::to_string),
            rarity: parse_rarity(&self.rarity)?,
            category: parse_category(&self.category)?,
            min_price: price_bound("minPrice", self.min_price)?,
            max_price: price_bound("maxPrice", self.max_price)?,
        };

        Ok(NftListing {
            filter,
            sort: NftSortKey::parse(non_empty(&self.sort_by))?,
            order: SortOrder::parse_or(non_empty(&self.sort_order), SortOrder::Desc)?,
            page: PageRequest::new(self.page, self.limit),
        })
    }
}

// ---------------------------------------------------------------------------
// Achievement catalog
// ---------------------------------------------------------------------------

/// Query parameters for the achievement catalog.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementListParams {
    pub game: Option<String>,
    pub rarity: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Validated form of [`AchievementListParams`].
#[derive(Debug, Clone)]
pub struct AchievementListing {
    pub filter: AchievementFilter,
    pub sort: AchievementSortKey,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl AchievementListParams {
    pub fn parse(&self) -> Result<AchievementListing, CoreError> {
        Ok(AchievementListing {
            filter: AchievementFilter {
                game: non_empty(&self.game).map(str::to_string),
                rarity: parse_rarity(&self.rarity)?,
            },
            sort: AchievementSortKey::parse(non_empty(&self.sort_by))?,
            order: SortOrder::parse_or(non_empty(&self.sort_order), SortOrder::Desc)?,
            page: PageRequest::new(self.page, self.limit),
        })
    }
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

/// Query parameters for the activity history (`?type=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ActivityListParams {
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the leaderboard (`?by=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub by: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for the games catalog (`?genre=`).
#[derive(Debug, Default, Deserialize)]
pub struct GameListParams {
    pub genre: Option<String>,
}

impl GameListParams {
    pub fn genre(&self) -> Option<&str> {
        non_empty(&self.genre)
    }
}

impl ActivityListParams {
    pub fn activity_type(&self) -> Option<&str> {
        non_empty(&self.activity_type)
    }
}

impl LeaderboardParams {
    pub fn by(&self) -> Option<&str> {
        non_empty(&self.by)
    }
}
