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

//! # Grocery Store
//!
//! This library models a single grocery store's inventory and checkout
//! workflow against a separate world-wide catalog of grocery items.
//!
//! ## Core Components
//!
//! - [`GroceryStore`]: Store facade owning the inventory and reorder policy
//! - [`Inventory`]: Quantity-on-hand ledger keyed by [`Upc`]
//! - [`Catalog`]: Read-only item lookup, implemented by [`GroceryItemDatabase`]
//! - [`Checkout`]: Rings up shopping carts and records today's sales
//! - [`Restock`]: Reorders items sold today that fell below the threshold
//! - [`StoreError`]: Error types for ledger violations and sink failures
//!
//! ## Example
//!
//! ```
//! use grocery_store::{
//!     GroceryItem, GroceryItemDatabase, GroceryStore, Inventory, ReorderPolicy, ShoppingCart, Upc,
//! };
//! use rust_decimal_macros::dec;
//! use std::sync::Arc;
//!
//! let catalog: GroceryItemDatabase = [GroceryItem::new("Milk", "Lala", "A", dec!(2.00))]
//!     .into_iter()
//!     .collect();
//! let inventory: Inventory = [(Upc::from("A"), 5)].into_iter().collect();
//! let mut store = GroceryStore::with_policy(inventory, Arc::new(catalog), ReorderPolicy::new(10, 20));
//!
//! let cart: ShoppingCart = [(Upc::from("A"), "milk".to_string())].into_iter().collect();
//! let mut receipt = Vec::new();
//! let mut sold = store.ring_up_customer(&cart, &mut receipt).unwrap();
//! assert!(String::from_utf8(receipt).unwrap().contains("Total $2.00"));
//! assert_eq!(store.inventory().quantity(&Upc::from("A")), Some(4));
//!
//! store.reorder_items(&mut sold, &mut std::io::sink()).unwrap();
//! assert_eq!(store.inventory().quantity(&Upc::from("A")), Some(24));
//! assert!(sold.is_empty());
//! ```

mod base;
pub mod cart;
pub mod catalog;
mod checkout;
pub mod error;
pub mod inventory;
mod policy;
mod restock;
mod store;

pub use base::Upc;
pub use cart::{ShoppingCart, ShoppingCarts, make_shopping_carts};
pub use catalog::{Catalog, GroceryItem, GroceryItemDatabase};
pub use checkout::{Checkout, ItemsSold};
pub use error::{InventoryError, LoadError, StoreError};
pub use inventory::Inventory;
pub use policy::ReorderPolicy;
pub use restock::{ReorderSummary, Restock};
pub use store::GroceryStore;
