use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Advance every item in `items` by one day, in order.
pub fn tick_inventory(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.tick();
    }
}

/// Ordered collection of stock items.
///
/// Items are independent of each other; order is kept so that output built from
/// an inventory is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Advance every item by one day.
    pub fn tick(&mut self) {
        tick_inventory(&mut self.items);
    }

    pub fn tick_days(&mut self, days: u32) {
        for _ in 0..days {
            self.tick();
        }
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
