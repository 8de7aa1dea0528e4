//! End-to-end storefront flow: build a catalog, browse it under
//! different filter and sort settings, then drive a basket through
//! add/remove/prune and check the totals.

use storefront_core::prelude::*;

fn stock() -> Vec<Item> {
    vec![
        Item::new(
            "1",
            "name_1",
            "description_1",
            vec![36, 38, 40, 41, 43],
            Money::new(499, Currency::USD),
            true,
        ),
        Item::new(
            "2",
            "name_2",
            "description_2",
            vec![37, 39, 42, 44],
            Money::new(999, Currency::USD),
            true,
        ),
        Item::new(
            "3",
            "name_3",
            "description_3",
            vec![38, 39, 40],
            Money::new(1499, Currency::USD),
            true,
        ),
        Item::new(
            "4",
            "name_4",
            "description_4",
            vec![39, 40, 41, 42, 43, 44],
            Money::new(1999, Currency::USD),
            true,
        ),
        Item::new(
            "5",
            "name_5",
            "description_5",
            vec![39, 41, 43],
            Money::new(2999, Currency::USD),
            false,
        ),
        Item::new(
            "6",
            "name_6",
            "description_6",
            vec![38, 39, 41, 42],
            Money::new(2999, Currency::USD),
            true,
        ),
    ]
}

fn listed_ids(catalog: &Catalog) -> Vec<String> {
    catalog
        .list()
        .iter()
        .map(|item| item.id.as_str().to_string())
        .collect()
}

#[test]
fn catalog_browsing_flow() {
    let items = stock();
    let mut catalog = Catalog::new(NameFilter::new("nam"), false, true);

    assert!(catalog.add(items[0].clone()));
    assert!(catalog.add(items[2].clone()));
    assert!(catalog.add(items[1].clone()));
    // Second add of id 2 is dropped silently.
    assert!(!catalog.add(items[1].clone()));
    assert_eq!(listed_ids(&catalog), ["1", "3", "2"]);

    assert!(catalog.remove(&ItemId::new("2")));
    assert_eq!(listed_ids(&catalog), ["1", "3"]);

    assert!(catalog.add(items[1].clone()));
    assert_eq!(listed_ids(&catalog), ["1", "3", "2"]);

    catalog.sort_by_price = true;
    assert_eq!(listed_ids(&catalog), ["1", "2", "3"]);

    catalog.sort_ascending = false;
    assert_eq!(listed_ids(&catalog), ["3", "2", "1"]);

    catalog.filter = NameFilter::new("name_1");
    assert_eq!(listed_ids(&catalog), ["1"]);
}

#[test]
fn basket_checkout_flow() {
    let items = stock();
    let mut basket = Basket::new();

    basket.add(&items[0], 4);
    basket.add(&items[0], 2);
    basket.add(&items[1], 3);
    assert_eq!(basket.line_count(), 2);
    assert_eq!(basket.get(&ItemId::new("1")).unwrap().amount, 6);

    assert!(basket.remove(&items[0], 5));
    assert!(basket.remove(&items[1], 3));
    assert_eq!(basket.get(&ItemId::new("1")).unwrap().amount, 1);
    assert!(basket.get(&ItemId::new("2")).is_none());

    basket.add(&items[1], 2);
    basket.add(&items[2], 3);
    basket.add(&items[3], 4);
    // Item 5 is snapshotted into the basket while unavailable.
    basket.add(&items[4], 5);

    assert_eq!(basket.remove_unavailable(), 1);
    let remaining: Vec<_> = basket.list().iter().map(|l| l.item_id.as_str()).collect();
    assert_eq!(remaining, ["1", "2", "3", "4"]);

    assert_eq!(basket.total_amount(), Money::new(14990, Currency::USD));
    assert_eq!(basket.total_sum(), 10);
}

#[test]
fn catalog_edits_do_not_reach_the_basket() {
    let items = stock();
    let mut catalog = Catalog::default();
    for item in &items {
        catalog.add(item.clone());
    }

    let mut basket = Basket::new();
    basket.add(&items[0], 2);

    catalog.set_available(&ItemId::new("1"), false);
    catalog.remove(&ItemId::new("1"));

    let line = basket.get(&ItemId::new("1")).unwrap();
    assert!(line.available);
    assert_eq!(line.amount, 2);
    assert_eq!(basket.remove_unavailable(), 0);
}

#[test]
fn listing_serializes_for_transport() {
    let items = stock();
    let mut catalog = Catalog::new(NameFilter::new("name_1"), false, true);
    for item in &items {
        catalog.add(item.clone());
    }

    let json = serde_json::to_string(&catalog.list()).expect("listing serializes");
    assert!(json.contains("\"name_1\""));

    let listing: Vec<Item> = serde_json::from_str(&json).expect("listing deserializes");
    assert_eq!(listing, catalog.list());
}
