use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::quality::Quality;

/// One stock line: a named item whose `sell_in` and `quality` move once per day.
///
/// Fields are private so that every quality write goes through
/// [`Item::set_quality`]. Read access is via the plain getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: Quality,
    category: Category,
}

/// Wire shape of an [`Item`]. Deserializing goes through `Item::new`, so loaded
/// values are clamped exactly like constructed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i64,
    quality: i64,
    #[serde(default)]
    category: Category,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64, category: Category) -> Self {
        let mut item = Self {
            name: name.into(),
            sell_in,
            quality: Quality::default(),
            category,
        };
        item.set_quality(quality);
        item
    }

    pub fn standard(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self::new(name, sell_in, quality, Category::Standard)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    /// Current quality. Legendary items always report [`Quality::LEGENDARY`].
    pub fn quality(&self) -> i64 {
        match self.category {
            Category::Legendary => Quality::LEGENDARY,
            _ => self.quality.value(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Set quality, clamped into `[Quality::MIN, Quality::MAX]`.
    /// No-op for legendary items.
    pub fn set_quality(&mut self, value: i64) {
        if self.category == Category::Legendary {
            return;
        }
        self.quality = Quality::new(value);
    }

    /// Advance this item by one day.
    pub fn tick(&mut self) {
        self.age();
        match self.category {
            Category::Standard | Category::Conjured => self.degrade(),
            Category::Appreciating => self.appreciate(),
            Category::Legendary => {}
            Category::BackstagePass => self.update_backstage_pass(),
        }
    }

    fn age(&mut self) {
        if self.category.ages() {
            self.sell_in = self.sell_in.saturating_sub(1);
        }
    }

    fn degrade(&mut self) {
        let rate = self.category.degrade_rate(self.sell_in);
        self.set_quality(self.quality.lowered_by(rate).value());
    }

    fn appreciate(&mut self) {
        self.set_quality(self.quality.raised_by(1).value());
    }

    // Tiers are read from `sell_in` after today's decrement: the +3 tier still
    // applies on the event day (0), the reset happens the day after (-1).
    fn update_backstage_pass(&mut self) {
        let next = match self.sell_in {
            s if s > 10 => self.quality.raised_by(1),
            6..=10 => self.quality.raised_by(2),
            0..=5 => self.quality.raised_by(3),
            _ => Quality::new(Quality::MIN),
        };
        self.set_quality(next.value());
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality, record.category)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            quality: item.quality(),
            name: item.name,
            sell_in: item.sell_in,
            category: item.category,
        }
    }
}
