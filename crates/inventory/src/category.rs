use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

/// Rule set an item follows when a day passes.
///
/// The set is closed; each variant has its own arm in `Item::tick`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses one quality per day, two once the sell-by date has passed.
    #[default]
    Standard,
    /// Gains one quality per day and never expires.
    Appreciating,
    /// Never sold, never changes; quality is fixed at 80.
    Legendary,
    /// Degrades twice as fast as a standard item.
    Conjured,
    /// Appreciates in tiers as the event approaches, worthless afterwards.
    BackstagePass,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Standard,
        Category::Appreciating,
        Category::Legendary,
        Category::Conjured,
        Category::BackstagePass,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Appreciating => "appreciating",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
            Category::BackstagePass => "backstage_pass",
        }
    }

    /// Whether `sell_in` counts down for this category.
    pub fn ages(self) -> bool {
        !matches!(self, Category::Appreciating | Category::Legendary)
    }

    /// Quality lost per day for decaying categories, given the already
    /// decremented `sell_in`. Non-decaying categories report 0.
    pub fn degrade_rate(self, sell_in: i64) -> i64 {
        const BASE: i64 = 1;

        let base = if sell_in >= 0 { BASE } else { 2 * BASE };
        match self {
            Category::Standard => base,
            Category::Conjured => 2 * base,
            Category::Appreciating | Category::Legendary | Category::BackstagePass => 0,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_loose_names() {
        assert_eq!("standard".parse::<Category>().unwrap(), Category::Standard);
        assert_eq!("Backstage Pass".parse::<Category>().unwrap(), Category::BackstagePass);
        assert_eq!("backstage-pass".parse::<Category>().unwrap(), Category::BackstagePass);
        assert_eq!(" LEGENDARY ".parse::<Category>().unwrap(), Category::Legendary);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "widget".parse::<Category>().unwrap_err();
        assert_eq!(err, DomainError::validation("unknown category: widget"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::BackstagePass).unwrap();
        assert_eq!(json, "\"backstage_pass\"");
    }

    #[test]
    fn only_appreciating_and_legendary_do_not_age() {
        let aging: Vec<_> = Category::ALL.into_iter().filter(|c| c.ages()).collect();
        assert_eq!(
            aging,
            vec![Category::Standard, Category::Conjured, Category::BackstagePass]
        );
    }

    #[test]
    fn standard_rate_doubles_past_sell_by() {
        assert_eq!(Category::Standard.degrade_rate(0), 1);
        assert_eq!(Category::Standard.degrade_rate(-1), 2);
    }

    #[test]
    fn conjured_rate_doubles_the_standard_rate() {
        assert_eq!(Category::Conjured.degrade_rate(5), 2);
        assert_eq!(Category::Conjured.degrade_rate(-1), 4);
    }
}
