//! Inventory domain module (daily quality rules).
//!
//! This crate contains the business rules for aging the Gilded Rose stock,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod policy;
pub mod quality;
pub mod updater;

pub use category::Category;
pub use item::Item;
pub use policy::ItemChange;
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use updater::GildedRose;
