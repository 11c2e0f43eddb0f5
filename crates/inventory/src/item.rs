use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single line of stock.
///
/// Construction does not validate `sell_in` or `quality`; values outside the
/// usual range are carried as-is until a daily rule touches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Days left before the sell-by date; negative once it has passed.
    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
