//! Item categories and the name-based classification that selects them.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_PREFIX: &str = "Conjured";

/// Rule set an item follows when a day passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Loses quality every day, twice as fast once expired.
    Regular,
    /// Gains quality with age ("Aged Brie").
    Aging,
    /// Never sold, never changes ("Sulfuras").
    Legendary,
    /// Gains quality as the event approaches, worthless afterwards.
    EventTicket,
    /// Loses quality twice as fast as regular stock ("Conjured ...").
    FastDecay,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Regular,
        Category::Aging,
        Category::Legendary,
        Category::EventTicket,
        Category::FastDecay,
    ];

    /// Classify an item by its name. Unrecognised names are `Regular`.
    pub fn classify(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Aging,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::EventTicket,
            n if n.starts_with(CONJURED_PREFIX) => Category::FastDecay,
            _ => Category::Regular,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Regular => "regular",
            Category::Aging => "aging",
            Category::Legendary => "legendary",
            Category::EventTicket => "event_ticket",
            Category::FastDecay => "fast_decay",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
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
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category label: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_names_match_exactly() {
        assert_eq!(Category::classify("Aged Brie"), Category::Aging);
        assert_eq!(
            Category::classify("Sulfuras, Hand of Ragnaros"),
            Category::Legendary
        );
        assert_eq!(
            Category::classify("Backstage passes to a TAFKAL80ETC concert"),
            Category::EventTicket
        );
    }

    #[test]
    fn near_misses_fall_back_to_regular() {
        assert_eq!(Category::classify("aged brie"), Category::Regular);
        assert_eq!(Category::classify("Aged Brie "), Category::Regular);
        assert_eq!(Category::classify("Sulfuras"), Category::Regular);
        assert_eq!(
            Category::classify("Backstage passes to a Metallica concert"),
            Category::Regular
        );
        assert_eq!(Category::classify(""), Category::Regular);
    }

    #[test]
    fn conjured_is_a_prefix_match() {
        assert_eq!(Category::classify("Conjured Mana Cake"), Category::FastDecay);
        assert_eq!(Category::classify("Conjured"), Category::FastDecay);
        assert_eq!(Category::classify("Conjured Aged Brie"), Category::FastDecay);
        assert_eq!(Category::classify("Mana Cake, Conjured"), Category::Regular);
        assert_eq!(Category::classify("conjured Mana Cake"), Category::Regular);
    }

    #[test]
    fn labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn unknown_label_is_a_validation_error() {
        let err = "cheese".parse::<Category>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("cheese")),
        }
    }

    #[test]
    fn serde_uses_snake_case_labels() {
        let json = serde_json::to_string(&Category::EventTicket).unwrap();
        assert_eq!(json, "\"event_ticket\"");
    }
}
