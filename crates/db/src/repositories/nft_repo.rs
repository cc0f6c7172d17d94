//! Repository for the `nfts` table.

use gamervault_core::activity::ActivityKind;
use gamervault_core::listing::{NftSortKey, PageRequest, SortOrder};
use gamervault_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use super::activity_repo::ActivityRepo;
use super::RARITY_RANK_SQL;
use crate::models::activity::CreateActivity;
use crate::models::listing::{BucketRow, ListingStats};
use crate::models::nft::{CreateNft, Nft, NftFilter};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, name, description, image, game, rarity, category, owner_id, \
                                  for_sale, price, previous_owners, acquired_date, created_at, updated_at";

/// WHERE clause for [`NftFilter`]; binds `$1`..`$7` via [`bind_filter`].
///
/// Price bounds compare against `price` directly, so inverted or
/// out-of-range bounds simply match nothing.
const FILTER_CLAUSE: &str = "($1::BIGINT IS NULL OR owner_id = $1)
               AND ($2::BOOL IS NULL OR for_sale = $2)
               AND ($3::TEXT IS NULL OR game = $3)
               AND ($4::TEXT IS NULL OR rarity = $4)
               AND ($5::TEXT IS NULL OR category = $5)
               AND ($6::FLOAT8 IS NULL OR price >= $6)
               AND ($7::FLOAT8 IS NULL OR price <= $7)";

fn bind_filter<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &'q NftFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    query
        .bind(filter.owner_id)
        .bind(filter.for_sale)
        .bind(filter.game.as_deref())
        .bind(filter.rarity.as_deref())
        .bind(filter.category.as_deref())
        .bind(filter.min_price)
        .bind(filter.max_price)
}

/// Build a whitelisted ORDER BY clause. `id` breaks ties so pages are stable.
fn order_clause(key: NftSortKey, order: SortOrder) -> String {
    let column = match key {
        NftSortKey::CreatedAt => "created_at",
        NftSortKey::Price => "price",
        NftSortKey::Name => "name",
        NftSortKey::Rarity => RARITY_RANK_SQL,
        NftSortKey::AcquiredDate => "acquired_date",
    };
    let dir = order.as_sql();
    format!("{column} {dir} NULLS LAST, id {dir}")
}

/// Provides CRUD and listing operations for NFTs.
pub struct NftRepo;

impl NftRepo {
    /// Mint a new NFT for `input.owner_id` and record an `nft_minted` activity.
    pub async fn create(pool: &PgPool, input: &CreateNft) -> Result<Nft, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO nfts (name, description, image, game, rarity, category, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let nft = sqlx::query_as::<_, Nft>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.game)
            .bind(&input.rarity)
            .bind(&input.category)
            .bind(input.owner_id)
            .fetch_one(&mut *tx)
            .await?;

        let activity = CreateActivity {
            user_id: nft.owner_id,
            activity_type: ActivityKind::NftMinted.as_str(),
            title: ActivityKind::NftMinted.title(&nft.name),
            description: Some(format!("{} {} from {}", nft.rarity, nft.category, nft.game)),
            metadata: serde_json::json!({ "nftId": nft.id }),
        };
        ActivityRepo::create(&mut *tx, &activity).await?;

        tx.commit().await?;
        Ok(nft)
    }

    /// Find an NFT by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Nft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nfts WHERE id = $1");
        sqlx::query_as::<_, Nft>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return one page of NFTs matching `filter`.
    pub async fn list(
        pool: &PgPool,
        filter: &NftFilter,
        sort: NftSortKey,
        order: SortOrder,
        page: PageRequest,
    ) -> Result<Vec<Nft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM nfts
             WHERE {FILTER_CLAUSE}
             ORDER BY {order}
             LIMIT $8 OFFSET $9",
            order = order_clause(sort, order),
        );
        bind_filter(sqlx::query_as::<_, Nft>(&query), filter)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count NFTs matching `filter` grouped by rarity, game and category.
    ///
    /// A single `GROUPING SETS` statement produces every bucket and the total
    /// from one snapshot, so the buckets always sum to the total.
    pub async fn stats(pool: &PgPool, filter: &NftFilter) -> Result<ListingStats, sqlx::Error> {
        let query = format!(
            "SELECT
                CASE WHEN GROUPING(rarity) = 0 THEN rarity END AS rarity,
                CASE WHEN GROUPING(game) = 0 THEN game END AS game,
                CASE WHEN GROUPING(category) = 0 THEN category END AS category,
                COUNT(*)::BIGINT AS count
             FROM nfts
             WHERE {FILTER_CLAUSE}
             GROUP BY GROUPING SETS ((rarity), (game), (category), ())"
        );
        let rows = bind_filter(sqlx::query_as::<_, BucketRow>(&query), filter)
            .fetch_all(pool)
            .await?;
        Ok(ListingStats::from_rows(rows, true))
    }

    /// Put an NFT on sale at `price`, or take it off sale when `price` is
    /// `None`, recording a listed/delisted activity for the owner.
    ///
    /// Only the current owner may change the listing; returns `None` when the
    /// NFT does not exist or `owner_id` does not own it.
    pub async fn set_listing(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        price: Option<f64>,
    ) -> Result<Option<Nft>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE nfts SET
                for_sale = $3::FLOAT8 IS NOT NULL,
                price = $3
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        let Some(nft) = sqlx::query_as::<_, Nft>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(price)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let kind = if nft.for_sale {
            ActivityKind::NftListed
        } else {
            ActivityKind::NftDelisted
        };
        let activity = CreateActivity {
            user_id: owner_id,
            activity_type: kind.as_str(),
            title: kind.title(&nft.name),
            description: nft.price.map(|p| format!("Asking price: {p}")),
            metadata: serde_json::json!({ "nftId": nft.id, "price": nft.price }),
        };
        ActivityRepo::create(&mut *tx, &activity).await?;

        tx.commit().await?;
        Ok(Some(nft))
    }
}
