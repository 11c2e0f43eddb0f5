//! Per-category rules for one day passing.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::item::Item;
use crate::quality::{decrease, increase};

/// Event tickets gain an extra point when this many days (or fewer) are left
/// at the start of the day.
const TICKET_FIRST_BAND: i32 = 10;
/// ...and another one at this many.
const TICKET_SECOND_BAND: i32 = 5;

/// What a single day did to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChange {
    pub category: Category,
    pub sell_in: (i32, i32),
    pub quality: (i32, i32),
}

impl ItemChange {
    pub fn is_unchanged(&self) -> bool {
        self.sell_in.0 == self.sell_in.1 && self.quality.0 == self.quality.1
    }
}

/// Advance a single item by one day according to its category.
pub fn advance(item: &mut Item) -> ItemChange {
    let category = item.category();
    let before = (item.sell_in, item.quality);

    if !category.is_legendary() {
        // Saturates at i32::MIN; that far past the date the item stays expired.
        item.sell_in = item.sell_in.saturating_sub(1);
        let expired = item.sell_in < 0;

        match category {
            Category::Regular => regular(&mut item.quality, expired),
            Category::Aging => aging(&mut item.quality, expired),
            Category::EventTicket => event_ticket(&mut item.quality, before.0, expired),
            Category::FastDecay => fast_decay(&mut item.quality, expired),
            Category::Legendary => {}
        }
    }

    ItemChange {
        category,
        sell_in: (before.0, item.sell_in),
        quality: (before.1, item.quality),
    }
}

fn regular(quality: &mut i32, expired: bool) {
    decrease(quality);
    if expired {
        decrease(quality);
    }
}

fn aging(quality: &mut i32, expired: bool) {
    increase(quality);
    if expired {
        increase(quality);
    }
}

fn event_ticket(quality: &mut i32, days_left: i32, expired: bool) {
    increase(quality);
    if days_left <= TICKET_FIRST_BAND {
        increase(quality);
    }
    if days_left <= TICKET_SECOND_BAND {
        increase(quality);
    }
    // Worthless once the event is over, whatever was added above.
    if expired {
        *quality = 0;
    }
}

fn fast_decay(quality: &mut i32, expired: bool) {
    let steps = if expired { 4 } else { 2 };
    for _ in 0..steps {
        decrease(quality);
    }
}
