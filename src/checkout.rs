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

//! Checkout: ringing up shopping carts.
//!
//! Every scanned item is priced from the catalog. Only items the store
//! actually stocks move the inventory and land in the day's sales.
//!
//! | Catalog | Inventory | Receipt | Amount due | Inventory / sales |
//! |---------|-----------|---------|------------|-------------------|
//! | missing | any | "not found, the item is free!" | unchanged | untouched |
//! | found | missing | full description | + price | untouched |
//! | found | found | full description | + price | -1 on hand, UPC recorded |

use crate::base::Upc;
use crate::cart::{ShoppingCart, ShoppingCarts};
use crate::catalog::Catalog;
use crate::error::{InventoryError, StoreError};
use crate::inventory::Inventory;
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::io::{self, Write};
use tracing::{debug, info};

/// Unique UPCs sold since the last reorder, in ascending order.
pub type ItemsSold = BTreeSet<Upc>;

pub(crate) const RECEIPT_RULE: &str = "-------------------------";

/// Rings up carts against a catalog and a store's inventory.
pub struct Checkout<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: Catalog + ?Sized> Checkout<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Rings up every customer in name order, writing one receipt each.
    ///
    /// Returns the union of the UPCs sold to all customers; an item bought
    /// by several customers appears once.
    ///
    /// All receipts are printed before any item leaves the inventory, so a
    /// failed write sells nothing.
    ///
    /// # Errors
    ///
    /// Fails if writing to `receipt` fails.
    pub fn ring_up_customers<W: Write>(
        &self,
        shopping_carts: &ShoppingCarts,
        inventory: &mut Inventory,
        receipt: &mut W,
    ) -> Result<ItemsSold, StoreError> {
        let mut printed = Vec::new();
        let mut priced = Vec::new();
        for (customer, cart) in shopping_carts {
            writeln!(printed, "{customer}'s shopping cart contains:")?;
            priced.extend(self.print_receipt(cart, &mut printed)?);
        }
        receipt.write_all(&printed)?;

        let todays_sales = sell(priced, inventory);
        info!(
            customers = shopping_carts.len(),
            items_sold = todays_sales.len(),
            "finished ringing up customers"
        );
        Ok(todays_sales)
    }

    /// Rings up a single cart and prints its receipt, ending with the amount due.
    ///
    /// Returns the UPCs of stocked items this customer bought. The inventory
    /// is left untouched if the receipt can't be written.
    ///
    /// # Errors
    ///
    /// Fails if writing to `receipt` fails.
    pub fn ring_up_customer<W: Write>(
        &self,
        shopping_cart: &ShoppingCart,
        inventory: &mut Inventory,
        receipt: &mut W,
    ) -> Result<ItemsSold, StoreError> {
        let mut printed = Vec::new();
        let priced = self.print_receipt(shopping_cart, &mut printed)?;
        receipt.write_all(&printed)?;

        Ok(sell(priced, inventory))
    }

    /// Prints the receipt for `shopping_cart` into `out` and returns the
    /// UPCs that were priced from the catalog.
    fn print_receipt<'c>(
        &self,
        shopping_cart: &'c ShoppingCart,
        out: &mut Vec<u8>,
    ) -> io::Result<Vec<&'c Upc>> {
        let mut priced = Vec::with_capacity(shopping_cart.len());
        let mut amount_due = Decimal::ZERO;

        for (upc, product_name) in shopping_cart {
            match self.catalog.find(upc) {
                Some(item) => {
                    writeln!(out, "  {item}")?;
                    amount_due += item.price();
                    priced.push(upc);
                }
                None => {
                    writeln!(out, "  \"{upc}\" ({product_name}) not found, the item is free!")?;
                }
            }
        }

        writeln!(out, "{RECEIPT_RULE}")?;
        writeln!(out, "Total ${:.2}\n", amount_due.round_dp(2))?;

        info!(total = %amount_due, items = shopping_cart.len(), "customer rung up");
        Ok(priced)
    }
}

/// Takes one unit of each priced item out of the inventory and returns the
/// UPCs the store stocks.
fn sell<'c>(priced: impl IntoIterator<Item = &'c Upc>, inventory: &mut Inventory) -> ItemsSold {
    let mut sold = ItemsSold::new();
    for upc in priced {
        match inventory.decrement(upc) {
            Ok(remaining) => {
                debug!(%upc, remaining, "sold stocked item");
                sold.insert(upc.clone());
            }
            // Rung up from the catalog; this store doesn't track it.
            Err(InventoryError::NotInInventory(_)) => {
                debug!(%upc, "sold item not carried in inventory");
            }
        }
    }
    sold
}
