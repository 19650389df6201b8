//! Inventory domain module.
//!
//! This crate contains the daily stock rules, implemented purely as
//! deterministic domain logic (no IO, no clock, no storage). Callers build an
//! [`Inventory`], advance it one day at a time, and read the resulting
//! `sell_in` / `quality` values back out.

pub mod category;
pub mod inventory;
pub mod item;
pub mod quality;

pub use category::Category;
pub use inventory::{Inventory, tick_inventory};
pub use item::Item;
pub use quality::Quality;
