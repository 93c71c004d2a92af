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

//! World-wide grocery item catalog.
//!
//! The catalog holds the full description and price of every known grocery
//! item. Stores only ever read from it through the [`Catalog`] trait, so a
//! test double or a shared `Arc<dyn Catalog>` can stand in for the real
//! database.
//!
//! # Example
//!
//! ```
//! use grocery_store::{Catalog, GroceryItem, GroceryItemDatabase, Upc};
//! use rust_decimal_macros::dec;
//!
//! let catalog: GroceryItemDatabase = [GroceryItem::new("Milk", "Lala", "001", dec!(2.49))]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(catalog.find(&Upc::from("001")).unwrap().price(), dec!(2.49));
//! assert!(catalog.find(&Upc::from("002")).is_none());
//! ```

use crate::base::Upc;
use crate::error::LoadError;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Read-only lookup of grocery item descriptions by UPC.
pub trait Catalog {
    /// Returns the item registered under `upc`, if any.
    fn find(&self, upc: &Upc) -> Option<&GroceryItem>;
}

/// Full description of a grocery item as known to the world-wide catalog.
///
/// Field order matches the catalog file layout: UPC, brand, product name, price.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroceryItem {
    upc: Upc,
    brand_name: String,
    product_name: String,
    price: Decimal,
}

impl GroceryItem {
    pub fn new(
        product_name: impl Into<String>,
        brand_name: impl Into<String>,
        upc: impl Into<Upc>,
        price: Decimal,
    ) -> Self {
        Self {
            upc: upc.into(),
            brand_name: brand_name.into(),
            product_name: product_name.into(),
            price,
        }
    }

    pub fn upc(&self) -> &Upc {
        &self.upc
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Prints `"upc", "brand", "product name", price` with the price at two
/// decimal places.
impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\", \"{}\", \"{}\", {:.2}",
            self.upc,
            self.brand_name,
            self.product_name,
            self.price.round_dp(2)
        )
    }
}

/// In-memory catalog keyed by UPC.
///
/// The first item registered for a UPC wins; later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct GroceryItemDatabase {
    items: BTreeMap<Upc, GroceryItem>,
}

impl GroceryItemDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item. Returns `false` if its UPC was already present.
    pub fn insert(&mut self, item: GroceryItem) -> bool {
        match self.items.entry(item.upc.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(item);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.values()
    }

    /// Reads catalog records from `reader`.
    ///
    /// Each record is `"upc","brand","product name",price`. Quoted fields may
    /// span lines. Rows that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Csv`] if the underlying reader fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut database = Self::new();

        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .has_headers(false)
            .from_reader(reader);

        for result in rdr.deserialize::<GroceryItem>() {
            match result {
                Ok(item) => {
                    if !database.insert(item) {
                        debug!("ignoring duplicate catalog record");
                    }
                }
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(error = %e, "skipping malformed catalog record");
                }
            }
        }

        Ok(database)
    }

    /// Loads the catalog stored at `path`.
    ///
    /// A missing or unreadable file yields an empty catalog and a warning;
    /// every item then rings up as free.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = File::open(path)
            .map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })
            .and_then(Self::from_reader);

        match loaded {
            Ok(database) => {
                debug!(items = database.len(), path = %path.display(), "catalog loaded");
                database
            }
            Err(e) => {
                warn!(error = %e, "proceeding with an empty grocery item catalog");
                Self::new()
            }
        }
    }
}

impl Catalog for GroceryItemDatabase {
    fn find(&self, upc: &Upc) -> Option<&GroceryItem> {
        self.items.get(upc)
    }
}

impl FromIterator<GroceryItem> for GroceryItemDatabase {
    fn from_iter<I: IntoIterator<Item = GroceryItem>>(iter: I) -> Self {
        let mut database = Self::new();
        for item in iter {
            database.insert(item);
        }
        database
    }
}
