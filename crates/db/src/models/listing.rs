//! Aggregate counts returned next to a page of listing results.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;

/// One row of a `GROUPING SETS` count query.
///
/// Exactly one of the key columns is set for a bucket row; all are `None` for
/// the grand-total row.
#[derive(Debug, Clone, FromRow)]
pub struct BucketRow {
    pub rarity: Option<String>,
    pub game: Option<String>,
    pub category: Option<String>,
    pub count: i64,
}

/// Totals by rarity, game, and (for NFTs) category.
///
/// Every bucket map sums to `total` because each record carries exactly one
/// value per dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total: i64,
    pub by_rarity: BTreeMap<String, i64>,
    pub by_game: BTreeMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_category: Option<BTreeMap<String, i64>>,
}

impl ListingStats {
    /// Fold grouping-set rows into bucket maps. `with_category` controls
    /// whether a category dimension is reported at all.
    pub fn from_rows(rows: Vec<BucketRow>, with_category: bool) -> Self {
        let mut stats = ListingStats {
            by_category: with_category.then(BTreeMap::new),
            ..Default::default()
        };

        for row in rows {
            match (row.rarity, row.game, row.category) {
                (Some(rarity), None, None) => {
                    stats.by_rarity.insert(rarity, row.count);
                }
                (None, Some(game), None) => {
                    stats.by_game.insert(game, row.count);
                }
                (None, None, Some(category)) => {
                    if let Some(map) = stats.by_category.as_mut() {
                        map.insert(category, row.count);
                    }
                }
                (None, None, None) => stats.total = row.count,
                _ => {}
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rarity: Option<&str>, game: Option<&str>, category: Option<&str>, count: i64) -> BucketRow {
        BucketRow {
            rarity: rarity.map(String::from),
            game: game.map(String::from),
            category: category.map(String::from),
            count,
        }
    }

    #[test]
    fn folds_rows_into_buckets() {
        let rows = vec![
            row(Some("Rare"), None, None, 2),
            row(Some("Epic"), None, None, 1),
            row(None, Some("Elden Ring"), None, 3),
            row(None, None, Some("Weapon"), 3),
            row(None, None, None, 3),
        ];
        let stats = ListingStats::from_rows(rows, true);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_rarity.values().sum::<i64>(), stats.total);
        assert_eq!(stats.by_game["Elden Ring"], 3);
        assert_eq!(stats.by_category.unwrap()["Weapon"], 3);
    }

    #[test]
    fn category_dimension_can_be_omitted() {
        let rows = vec![row(None, None, Some("Weapon"), 1), row(None, None, None, 1)];
        let stats = ListingStats::from_rows(rows, false);
        assert!(stats.by_category.is_none());
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("byCategory").is_none());
    }

    #[test]
    fn empty_result_has_zero_total() {
        let stats = ListingStats::from_rows(vec![row(None, None, None, 0)], true);
        assert_eq!(stats.total, 0);
        assert!(stats.by_rarity.is_empty());
    }
}
