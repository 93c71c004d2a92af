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

//! Restocking items sold today that fell below the reorder threshold.
//!
//! Each UPC in today's sales ends up in exactly one of three states:
//!
//! ```text
//! not in inventory ─────────────► reported as discontinued, skipped
//! on hand < reorder threshold ──► reported, +lot_count on hand
//! on hand >= reorder threshold ─► nothing
//! ```
//!
//! Report entries are numbered in ascending UPC order.

use crate::base::Upc;
use crate::catalog::Catalog;
use crate::checkout::ItemsSold;
use crate::error::StoreError;
use crate::inventory::Inventory;
use crate::policy::ReorderPolicy;
use std::io::Write;
use tracing::{debug, info};

/// What a reorder pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderSummary {
    /// UPCs that received a lot, in report order.
    pub reordered: Vec<Upc>,
    /// UPCs sold today that the store no longer carries.
    pub discontinued: Vec<Upc>,
}

/// Replenishes low inventory under a [`ReorderPolicy`].
pub struct Restock<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    policy: ReorderPolicy,
}

impl<'a, C: Catalog + ?Sized> Restock<'a, C> {
    pub fn new(catalog: &'a C, policy: ReorderPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Reorders every item in `todays_sales` that is running low, writing a
    /// numbered report, then clears `todays_sales` for the next day.
    ///
    /// Assumes each order has already arrived: the lot is added to the
    /// inventory immediately. The report is written before any lot is added.
    ///
    /// # Errors
    ///
    /// Fails if writing to `report` fails. The inventory and `todays_sales`
    /// are then left as they were, so the pass can be retried.
    pub fn reorder_items<W: Write>(
        &self,
        todays_sales: &mut ItemsSold,
        inventory: &mut Inventory,
        report: &mut W,
    ) -> Result<ReorderSummary, StoreError> {
        let mut summary = ReorderSummary::default();
        let mut printed = Vec::new();
        let mut entry = 1;

        writeln!(printed, "Re-Ordering grocery items the store is running low on\n")?;

        for upc in todays_sales.iter() {
            let Some(quantity) = inventory.quantity(upc) else {
                writeln!(printed, "{entry}: {{{}}}", self.label(upc))?;
                writeln!(
                    printed,
                    " *** no longer sold in this store and will not be re-ordered\n"
                )?;
                entry += 1;
                summary.discontinued.push(upc.clone());
                continue;
            };

            if !self.policy.needs_reorder(quantity) {
                continue;
            }

            writeln!(printed, "{entry}: {{{}}}", self.label(upc))?;
            writeln!(
                printed,
                " only {quantity} remain in stock which is {} unit(s) below reorder threshold ({}), re-ordering {} more\n",
                self.policy.deficit(quantity),
                self.policy.reorder_threshold,
                self.policy.lot_count
            )?;
            entry += 1;
            summary.reordered.push(upc.clone());
        }

        report.write_all(&printed)?;

        for upc in &summary.reordered {
            let on_hand = inventory.increment(upc, self.policy.lot_count)?;
            debug!(%upc, on_hand, "restocked");
        }
        todays_sales.clear();

        info!(
            reordered = summary.reordered.len(),
            discontinued = summary.discontinued.len(),
            "reorder complete"
        );
        Ok(summary)
    }

    /// Full catalog description, or the bare UPC for items the catalog lacks.
    fn label(&self, upc: &Upc) -> String {
        match self.catalog.find(upc) {
            Some(item) => item.to_string(),
            None => upc.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GroceryItem, GroceryItemDatabase};
    use rust_decimal_macros::dec;

    #[test]
    fn report_layout() {
        let catalog: GroceryItemDatabase = [GroceryItem::new("Milk", "Lala", "001", dec!(2.49))]
            .into_iter()
            .collect();
        let mut inventory: Inventory = [(Upc::from("001"), 7), (Upc::from("003"), 40)]
            .into_iter()
            .collect();
        let mut sales: ItemsSold = ["001", "002", "003"].into_iter().map(Upc::from).collect();
        let mut report = Vec::new();

        Restock::new(&catalog, ReorderPolicy::new(10, 20))
            .reorder_items(&mut sales, &mut inventory, &mut report)
            .unwrap();

        let expected = "Re-Ordering grocery items the store is running low on\n\
                        \n\
                        1: {\"001\", \"Lala\", \"Milk\", 2.49}\n\
                        \x20only 7 remain in stock which is 3 unit(s) below reorder threshold (10), re-ordering 20 more\n\
                        \n\
                        2: {002}\n\
                        \x20*** no longer sold in this store and will not be re-ordered\n\
                        \n";
        assert_eq!(String::from_utf8(report).unwrap(), expected);
    }

    #[test]
    fn empty_sales_prints_only_header() {
        let catalog = GroceryItemDatabase::new();
        let mut inventory = Inventory::new();
        let mut sales = ItemsSold::new();
        let mut report = Vec::new();

        let summary = Restock::new(&catalog, ReorderPolicy::default())
            .reorder_items(&mut sales, &mut inventory, &mut report)
            .unwrap();

        assert_eq!(summary, ReorderSummary::default());
        assert_eq!(
            String::from_utf8(report).unwrap(),
            "Re-Ordering grocery items the store is running low on\n\n"
        );
    }
}
