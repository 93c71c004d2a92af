// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! End-to-end store tests: a day of checkout followed by restocking.

use grocery_store::{
    GroceryItem, GroceryItemDatabase, GroceryStore, Inventory, ItemsSold, ReorderPolicy,
    ShoppingCart, Upc, make_shopping_carts,
};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::sync::Arc;

fn upc(code: &str) -> Upc {
    Upc::from(code)
}

/// Opening quantities for every sample-cart item the store carries.
const OPENING_INVENTORY: &[(&str, u32)] = &[
    // Red Baron
    ("00075457129000", 10), ("00038000291210", 23), ("00025317533003", 9),
    ("00835841005255", 27), ("00688267039317", 33), ("00037466065908", 23),
    // Peppermint Patty
    ("00813608012401", 36), ("00631723300704", 31), ("00051500280645", 19),
    ("00792851355155", 31), ("00898425001333", 52), ("00021908501871", 21),
    ("00856414001092", 40), ("00036192122930", 39), ("00763795931415", 12),
    ("00070596000647", 13), ("00079400266200", 16),
    // Woodstock
    ("00859013004327", 49), ("00041331092609", 9), ("00217039300005", 27),
    ("00636874220338", 27), ("00688267138973", 11), ("00033674100066", 20),
    ("00891475001421", 21), ("00688267133442", 9), ("00021000778690", 30),
    ("00071758100823", 26), ("00041520010667", 24), ("00216079600007", 49),
    ("00790555051526", 38), ("00070177862640", 35), ("00018000001958", 21),
    // Schroeder
    ("00072591002251", 12), ("00219019100001", 14), ("00890692002020", 42),
    ("00637876981630", 47), ("00716237183507", 50), ("00886911000052", 53),
    ("00084783499008", 49), ("00016055456747", 44), ("00021908743325", 39),
    // Lucy van Pelt
    ("00070327012116", 45), ("00073377801839", 13), ("00030768009670", 17),
    ("00852697001422", 51), ("00079471102414", 31), ("00072736013753", 38),
    ("00216210900003", 50), ("00780872310185", 27), ("00710069086036", 46),
    ("00092657016985", 46), ("00086449903065", 45), ("00885229000198", 17),
    // Charlie Brown
    ("00611508524006", 28),
    // Not in any cart
    ("00044100117428", 8),
];

const APPLE_PIE: &str = "09073649000493";
const LUMP_OF_COAL: &str = "00611508524006";
const SPANISH_OMELET: &str = "00041331092609";

/// Every cart item is in the catalog at $1.00 except the lump of coal.
fn sample_catalog() -> GroceryItemDatabase {
    make_shopping_carts()
        .values()
        .flat_map(|cart| cart.iter())
        .filter(|(code, _)| code.as_str() != LUMP_OF_COAL)
        .map(|(code, name)| GroceryItem::new(name.clone(), "Acme", code.clone(), dec!(1.00)))
        .collect()
}

fn sample_store() -> GroceryStore<GroceryItemDatabase> {
    let inventory: Inventory = OPENING_INVENTORY
        .iter()
        .map(|(code, quantity)| (upc(code), *quantity))
        .collect();
    GroceryStore::new(inventory, Arc::new(sample_catalog()))
}

#[test]
fn single_item_day() {
    let catalog: GroceryItemDatabase = [GroceryItem::new("Milk", "Lala", "A", dec!(2.00))]
        .into_iter()
        .collect();
    let inventory: Inventory = [(upc("A"), 5)].into_iter().collect();
    let mut store =
        GroceryStore::with_policy(inventory, Arc::new(catalog), ReorderPolicy::new(10, 20));
    let cart: ShoppingCart = [(upc("A"), "milk".to_string())].into_iter().collect();

    let mut receipt = Vec::new();
    let mut sold = store.ring_up_customer(&cart, &mut receipt).unwrap();

    assert!(String::from_utf8(receipt).unwrap().contains("Total $2.00"));
    assert_eq!(store.inventory().quantity(&upc("A")), Some(4));
    assert_eq!(sold, [upc("A")].into_iter().collect::<ItemsSold>());

    store.reorder_items(&mut sold, &mut std::io::sink()).unwrap();

    assert_eq!(store.inventory().quantity(&upc("A")), Some(24));
    assert!(sold.is_empty());
}

#[test]
fn sample_day_checkout() {
    let mut store = sample_store();
    let carts = make_shopping_carts();

    let mut receipt = Vec::new();
    let sold = store.ring_up_customers(&carts, &mut receipt).unwrap();

    assert_eq!(store.inventory().len(), OPENING_INVENTORY.len());

    // Everything stocked and catalogued was sold exactly once per cart.
    let opening: BTreeMap<&str, u32> = OPENING_INVENTORY.iter().copied().collect();
    let mut bought: BTreeMap<&str, u32> = BTreeMap::new();
    for cart in carts.values() {
        for code in cart.keys() {
            *bought.entry(code.as_str()).or_default() += 1;
        }
    }
    assert_eq!(bought["00037466065908"], 2);
    assert_eq!(bought["00688267138973"], 2);

    for (code, opening_quantity) in &opening {
        let expected = match bought.get(code) {
            Some(count) if *code != LUMP_OF_COAL => opening_quantity - count,
            _ => *opening_quantity,
        };
        assert_eq!(store.inventory().quantity(&upc(code)), Some(expected), "{code}");
    }

    // Only items the store carries are recorded, each once.
    let expected_sold: ItemsSold = bought
        .keys()
        .filter(|code| opening.contains_key(*code) && **code != LUMP_OF_COAL)
        .map(|code| upc(code))
        .collect();
    assert_eq!(sold, expected_sold);
    assert!(!sold.contains(APPLE_PIE));

    let receipt = String::from_utf8(receipt).unwrap();
    assert!(receipt.contains("Charlie Brown's shopping cart contains:\n"));
    assert!(receipt.contains("(Lump Of Coal) not found, the item is free!"));
    assert!(receipt.contains("Red Baron's shopping cart contains:\n"));
    assert!(receipt.contains("Total $7.00"));
    assert!(receipt.contains("Total $15.00"));
}

#[test]
fn sample_day_reorder_after_discontinuing_an_item() {
    let mut store = sample_store();
    let mut sold = store
        .ring_up_customers(&make_shopping_carts(), &mut std::io::sink())
        .unwrap();
    let after_checkout = store.inventory().clone();

    store.inventory_mut().remove(&upc(SPANISH_OMELET));

    let mut report = Vec::new();
    let summary = store.reorder_items(&mut sold, &mut report).unwrap();

    let expected_reordered: Vec<Upc> = [
        "00025317533003",
        "00070596000647",
        "00072591002251",
        "00073377801839",
        "00075457129000",
        "00219019100001",
        "00688267133442",
        "00688267138973",
        "00763795931415",
    ]
    .into_iter()
    .map(upc)
    .collect();
    assert_eq!(summary.reordered, expected_reordered);
    assert_eq!(summary.discontinued, vec![upc(SPANISH_OMELET)]);
    assert!(sold.is_empty());
    assert_eq!(store.inventory().len(), OPENING_INVENTORY.len() - 1);

    for (code, quantity) in after_checkout.iter() {
        let expected = if code.as_str() == SPANISH_OMELET {
            None
        } else if expected_reordered.contains(code) {
            Some(quantity + 20)
        } else {
            Some(quantity)
        };
        assert_eq!(store.inventory().quantity(code), expected, "{code}");
    }

    let report = String::from_utf8(report).unwrap();
    assert!(report.starts_with("Re-Ordering grocery items the store is running low on\n\n"));
    assert_eq!(report.matches(" *** no longer sold in this store").count(), 1);
    assert_eq!(report.matches("re-ordering 20 more").count(), 9);
    assert!(report.contains("10: {"));
    assert!(!report.contains("11: {"));
}

#[test]
fn second_day_reuses_the_sales_set() {
    let mut store = sample_store();
    let carts = make_shopping_carts();

    let mut sold = store.ring_up_customers(&carts, &mut std::io::sink()).unwrap();
    store.reorder_items(&mut sold, &mut std::io::sink()).unwrap();
    assert!(sold.is_empty());

    let mut next_day = store.ring_up_customers(&carts, &mut std::io::sink()).unwrap();
    sold.append(&mut next_day);
    assert!(!sold.is_empty());

    store.reorder_items(&mut sold, &mut std::io::sink()).unwrap();
    assert!(sold.is_empty());
}
