//! Starting stock used when no inventory file is configured.

use gildedrose_inventory::{Category, Inventory, Item};

pub fn seed_inventory() -> Inventory {
    Inventory::from(vec![
        Item::standard("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0, Category::Appreciating),
        Item::standard("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80, Category::Legendary),
        Item::new(
            "Backstage passes to a TAFKAL80ETC concert",
            15,
            20,
            Category::BackstagePass,
        ),
        Item::new("Conjured Mana Cake", 3, 6, Category::Conjured),
    ])
}
