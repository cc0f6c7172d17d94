//! Marketplace purchase: the one multi-step write in the system.

use gamervault_core::activity::ActivityKind;
use gamervault_core::types::DbId;
use sqlx::PgPool;

use super::activity_repo::ActivityRepo;
use super::nft_repo::COLUMNS;
use crate::models::activity::CreateActivity;
use crate::models::nft::{Nft, PurchaseOutcome};

pub struct MarketplaceRepo;

impl MarketplaceRepo {
    /// Transfer a listed NFT to `buyer_id`.
    ///
    /// Inside one transaction: lock the NFT row, check it is listed and not
    /// already owned by the buyer, move the current owner onto
    /// `previous_owners`, reassign ownership, clear the listing, stamp
    /// `acquired_date`, and append a `purchase` activity for the buyer and a
    /// `sale` activity for the seller.
    ///
    /// Rejections ([`PurchaseOutcome::NotListed`],
    /// [`PurchaseOutcome::AlreadyOwner`]) and errors return before commit, so
    /// the transaction rolls back on drop and nothing is written.
    pub async fn purchase(
        pool: &PgPool,
        nft_id: DbId,
        buyer_id: DbId,
    ) -> Result<PurchaseOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM nfts WHERE id = $1 FOR UPDATE");
        let listed = sqlx::query_as::<_, Nft>(&query)
            .bind(nft_id)
            .fetch_optional(&mut *tx)
            .await?
            .filter(|nft| nft.for_sale);

        let Some(listed) = listed else {
            return Ok(PurchaseOutcome::NotListed);
        };
        if listed.owner_id == buyer_id {
            return Ok(PurchaseOutcome::AlreadyOwner);
        }

        let seller_id = listed.owner_id;
        let price = listed.price;

        let query = format!(
            "UPDATE nfts SET
                previous_owners = array_append(previous_owners, owner_id),
                owner_id = $2,
                for_sale = false,
                price = NULL,
                acquired_date = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let nft = sqlx::query_as::<_, Nft>(&query)
            .bind(nft_id)
            .bind(buyer_id)
            .fetch_one(&mut *tx)
            .await?;

        let buyer_entry = CreateActivity {
            user_id: buyer_id,
            activity_type: ActivityKind::Purchase.as_str(),
            title: ActivityKind::Purchase.title(&nft.name),
            description: price.map(|p| format!("Bought for {p}")),
            metadata: serde_json::json!({
                "nftId": nft.id,
                "price": price,
                "counterpartyId": seller_id,
            }),
        };
        ActivityRepo::create(&mut *tx, &buyer_entry).await?;

        let seller_entry = CreateActivity {
            user_id: seller_id,
            activity_type: ActivityKind::Sale.as_str(),
            title: ActivityKind::Sale.title(&nft.name),
            description: price.map(|p| format!("Sold for {p}")),
            metadata: serde_json::json!({
                "nftId": nft.id,
                "price": price,
                "counterpartyId": buyer_id,
            }),
        };
        ActivityRepo::create(&mut *tx, &seller_entry).await?;

        tx.commit().await?;

        tracing::debug!(nft_id, buyer_id, seller_id, "NFT ownership transferred");
        Ok(PurchaseOutcome::Completed { nft, seller_id })
    }
}
