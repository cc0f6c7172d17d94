//! NFT rarity tiers, categories, and listing-price rules.
//!
//! Rarity is shared with the achievement catalog. Both enums are stored as
//! their display names (`"Legendary"`, `"Mount"`) in TEXT columns guarded by
//! CHECK constraints, so `as_str` must stay in sync with the migrations.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an NFT or achievement name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a free-text description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Upper bound for a listing price.
pub const MAX_PRICE: f64 = 1_000_000_000.0;

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity tier, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// Every tier in ascending order.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
            Self::Mythic => "Mythic",
        }
    }

    /// Parse a rarity from its display name. Matching is case-insensitive so
    /// `?rarity=legendary` works from query strings.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid rarity '{s}'. Must be one of: {}",
                    Self::names().join(", ")
                ))
            })
    }

    /// Display names of every tier in ascending order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Rarity::as_str).collect()
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Item category of an NFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Weapon,
    Armor,
    Mount,
    Collectible,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Weapon,
        Category::Armor,
        Category::Mount,
        Category::Collectible,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Mount => "Mount",
            Self::Collectible => "Collectible",
            Self::Other => "Other",
        }
    }

    /// Parse a category from its display name (case-insensitive).
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Category::as_str).collect();
                CoreError::Validation(format!(
                    "Invalid category '{s}'. Must be one of: {}",
                    names.join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a listing price: finite, non-negative, at most [`MAX_PRICE`].
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() {
        return Err(CoreError::Validation(
            "price must be a finite number".to_string(),
        ));
    }
    if !(0.0..=MAX_PRICE).contains(&price) {
        return Err(CoreError::Validation(format!(
            "price must be between 0 and {MAX_PRICE}, got {price}"
        )));
    }
    Ok(())
}

/// Validate an item name (non-blank, at most [`MAX_NAME_LENGTH`] characters).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that an optional description stays within [`MAX_DESCRIPTION_LENGTH`].
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    match description {
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LENGTH => Err(CoreError::Validation(
            format!("description must be at most {MAX_DESCRIPTION_LENGTH} characters"),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_parse_is_case_insensitive() {
        assert_eq!(Rarity::from_str("legendary").unwrap(), Rarity::Legendary);
        assert_eq!(Rarity::from_str("EPIC").unwrap(), Rarity::Epic);
        assert_eq!(Rarity::from_str("Mythic").unwrap(), Rarity::Mythic);
    }

    #[test]
    fn rarity_parse_rejects_unknown() {
        let err = Rarity::from_str("shiny").unwrap_err();
        assert!(err.to_string().contains("Common, Uncommon"));
    }

    #[test]
    fn rarity_orders_by_tier() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Legendary < Rarity::Mythic);
        let mut tiers = vec![Rarity::Epic, Rarity::Common, Rarity::Legendary];
        tiers.sort();
        assert_eq!(tiers, vec![Rarity::Common, Rarity::Epic, Rarity::Legendary]);
    }

    #[test]
    fn category_parse() {
        assert_eq!(Category::from_str("mount").unwrap(), Category::Mount);
        assert!(Category::from_str("Vehicle").is_err());
    }

    #[test]
    fn category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::Collectible).unwrap();
        assert_eq!(json, "\"Collectible\"");
    }

    #[test]
    fn price_bounds() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(150.5).is_ok());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(MAX_PRICE + 1.0).is_err());
    }

    #[test]
    fn name_rules() {
        assert!(validate_name("Dragon Blade").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn description_limit() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("short")).is_ok());
        assert!(validate_description(Some(&"d".repeat(MAX_DESCRIPTION_LENGTH + 1))).is_err());
    }
}
