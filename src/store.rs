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

//! Grocery store facade.
//!
//! The [`GroceryStore`] owns its inventory and holds a shared handle to the catalog,
//! wiring both into [`Checkout`] and [`Restock`] for each call.
//!
//! # Concurrency
//!
//! Every operation takes `&mut self` and runs to completion. Serving
//! customers from several threads requires wrapping the store in a single
//! lock; the catalog itself is read-only and can be shared freely.

use crate::cart::{ShoppingCart, ShoppingCarts};
use crate::catalog::Catalog;
use crate::checkout::{Checkout, ItemsSold};
use crate::error::StoreError;
use crate::inventory::Inventory;
use crate::policy::ReorderPolicy;
use crate::restock::{ReorderSummary, Restock};
use std::io::Write;
use std::sync::Arc;

/// A single store: its inventory, the catalog it prices from, and its
/// reorder policy.
///
/// # Invariants
///
/// - Inventory quantities change only through checkout (-1 per stocked item
///   sold) and restocking (+`lot_count` per reorder).
/// - Today's sales only ever contain UPCs that were in the inventory when sold.
pub struct GroceryStore<C: Catalog + ?Sized> {
    inventory: Inventory,
    catalog: Arc<C>,
    policy: ReorderPolicy,
}

impl<C: Catalog + ?Sized> GroceryStore<C> {
    /// Creates a store using the default [`ReorderPolicy`].
    pub fn new(inventory: Inventory, catalog: Arc<C>) -> Self {
        Self::with_policy(inventory, catalog, ReorderPolicy::default())
    }

    pub fn with_policy(inventory: Inventory, catalog: Arc<C>, policy: ReorderPolicy) -> Self {
        Self {
            inventory,
            catalog,
            policy,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access for changes outside checkout and restocking, such as
    /// discontinuing an item.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn policy(&self) -> ReorderPolicy {
        self.policy
    }

    /// See [`Checkout::ring_up_customers`].
    pub fn ring_up_customers<W: Write>(
        &mut self,
        shopping_carts: &ShoppingCarts,
        receipt: &mut W,
    ) -> Result<ItemsSold, StoreError> {
        Checkout::new(&*self.catalog).ring_up_customers(
            shopping_carts,
            &mut self.inventory,
            receipt,
        )
    }

    /// See [`Checkout::ring_up_customer`].
    pub fn ring_up_customer<W: Write>(
        &mut self,
        shopping_cart: &ShoppingCart,
        receipt: &mut W,
    ) -> Result<ItemsSold, StoreError> {
        Checkout::new(&*self.catalog).ring_up_customer(
            shopping_cart,
            &mut self.inventory,
            receipt,
        )
    }

    /// See [`Restock::reorder_items`].
    pub fn reorder_items<W: Write>(
        &mut self,
        todays_sales: &mut ItemsSold,
        report: &mut W,
    ) -> Result<ReorderSummary, StoreError> {
        Restock::new(&*self.catalog, self.policy).reorder_items(
            todays_sales,
            &mut self.inventory,
            report,
        )
    }
}
