//! NFT entity model, DTOs, and listing filter.

use gamervault_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `nfts` table.
///
/// `rarity` and `category` hold the display names from
/// [`gamervault_core::nft::Rarity`] and [`gamervault_core::nft::Category`].
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub game: String,
    pub rarity: String,
    pub category: String,
    pub owner_id: DbId,
    pub for_sale: bool,
    pub price: Option<f64>,
    /// Earlier owners, oldest first.
    pub previous_owners: Vec<DbId>,
    pub acquired_date: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for minting a new NFT into a user's collection.
#[derive(Debug)]
pub struct CreateNft {
    pub name: String,
    pub description: Option<String>,
    pub image: String,
    pub game: String,
    pub rarity: String,
    pub category: String,
    pub owner_id: DbId,
}

/// Filter for NFT listings. `None` fields do not restrict the result.
#[derive(Debug, Clone, Default)]
pub struct NftFilter {
    pub owner_id: Option<DbId>,
    pub for_sale: Option<bool>,
    pub game: Option<String>,
    pub rarity: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Result of a marketplace purchase attempt.
#[derive(Debug)]
pub enum PurchaseOutcome {
    /// Ownership moved to the buyer; carries the updated NFT and the seller id.
    Completed { nft: Nft, seller_id: DbId },
    /// The NFT does not exist or is not listed for sale.
    NotListed,
    /// The buyer already owns the NFT.
    AlreadyOwner,
}
