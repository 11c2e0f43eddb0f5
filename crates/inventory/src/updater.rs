//! Inventory Updater: owns the stock and ages it one day at a time.

use tracing::{debug, trace};

use crate::item::Item;
use crate::policy;

/// The shop's inventory.
///
/// Items keep their order for the life of the updater. The updater never adds
/// or removes items; it only ages the ones it was given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Age every item by one day, in order.
    ///
    /// Total over all items: unknown names follow the regular rules.
    pub fn advance_day(&mut self) {
        let span = tracing::debug_span!("advance_day", items = self.items.len());
        let _guard = span.enter();

        let mut touched = 0usize;
        for item in &mut self.items {
            let change = policy::advance(item);
            if change.category.is_legendary() {
                trace!(item = item.name(), "legendary item left untouched");
                continue;
            }
            touched += 1;
            trace!(
                item = item.name(),
                category = %change.category,
                sell_in_before = change.sell_in.0,
                sell_in_after = change.sell_in.1,
                quality_before = change.quality.0,
                quality_after = change.quality.1,
                "item aged"
            );
        }

        debug!(touched, "day advanced");
    }
}
