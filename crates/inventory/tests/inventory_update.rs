//! End-to-end check of a mixed inventory after a single day.

use gildedrose_inventory::{Category, Inventory, Item};

fn updated_inventory() -> Inventory {
    let mut inventory = Inventory::from(vec![
        Item::standard("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 1, Category::Appreciating),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80, Category::Legendary),
        Item::new("Conjured Mana Cake", 3, 6, Category::Conjured),
        Item::new(
            "Backstage passes to a TAFKAL80ETC concert",
            15,
            20,
            Category::BackstagePass,
        ),
        Item::new(
            "Backstage passes to a D498FJ9FJ2N concert",
            10,
            30,
            Category::BackstagePass,
        ),
        Item::new(
            "Backstage passes to a FH38F39DJ39 concert",
            5,
            33,
            Category::BackstagePass,
        ),
    ]);
    inventory.tick();
    inventory
}

fn count(inventory: &Inventory, category: Category) -> usize {
    inventory.iter().filter(|item| item.category() == category).count()
}

fn state(inventory: &Inventory, name: &str) -> (i64, i64) {
    let item = inventory
        .find(name)
        .unwrap_or_else(|| panic!("missing item {name}"));
    (item.sell_in(), item.quality())
}

#[test]
fn categories_survive_update() {
    let inventory = updated_inventory();

    assert_eq!(inventory.len(), 7);
    assert_eq!(count(&inventory, Category::Appreciating), 1);
    assert_eq!(count(&inventory, Category::Legendary), 1);
    assert_eq!(count(&inventory, Category::Conjured), 1);
    assert_eq!(count(&inventory, Category::BackstagePass), 3);
}

#[test]
fn dexterity_vest_loses_a_day_and_a_point() {
    let inventory = updated_inventory();
    assert_eq!(state(&inventory, "+5 Dexterity Vest"), (9, 19));
}

#[test]
fn every_category_follows_its_rule() {
    let inventory = updated_inventory();

    assert_eq!(state(&inventory, "Aged Brie"), (2, 2));
    assert_eq!(state(&inventory, "Sulfuras, Hand of Ragnaros"), (0, 80));
    assert_eq!(state(&inventory, "Conjured Mana Cake"), (2, 4));
    assert_eq!(state(&inventory, "Backstage passes to a TAFKAL80ETC concert"), (14, 21));
    assert_eq!(state(&inventory, "Backstage passes to a D498FJ9FJ2N concert"), (9, 32));
    assert_eq!(state(&inventory, "Backstage passes to a FH38F39DJ39 concert"), (4, 36));
}

#[test]
fn backstage_passes_are_worthless_after_the_concert() {
    let mut inventory = updated_inventory();
    inventory.tick_days(5);

    assert_eq!(state(&inventory, "Backstage passes to a FH38F39DJ39 concert"), (-1, 0));
    assert_eq!(state(&inventory, "Backstage passes to a D498FJ9FJ2N concert"), (4, 44));
}

#[test]
fn exported_json_reflects_updated_state() {
    let inventory = updated_inventory();
    let json = serde_json::to_string_pretty(&inventory).unwrap();
    let reloaded: Inventory = serde_json::from_str(&json).unwrap();

    assert_eq!(reloaded, inventory);
}
