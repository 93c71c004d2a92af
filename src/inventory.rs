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

//! Store inventory ledger.
//!
//! Maps each UPC the store sells to its quantity on hand. Entries are created
//! by the bulk load, removed when the store discontinues an item, and their
//! quantities move only through [`Inventory::decrement`] (a sale) and
//! [`Inventory::increment`] (a restock).
//!
//! # Example
//!
//! ```
//! use grocery_store::{Inventory, Upc};
//!
//! let mut inventory: Inventory = [(Upc::from("001"), 5)].into_iter().collect();
//! assert_eq!(inventory.decrement(&Upc::from("001")), Ok(4));
//! assert!(inventory.decrement(&Upc::from("002")).is_err());
//! ```

use crate::base::Upc;
use crate::error::{InventoryError, LoadError};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Quantity-on-hand ledger keyed by UPC.
///
/// # Invariants
///
/// - A UPC appears at most once.
/// - Quantities never go below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<Upc, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry during bulk load.
    ///
    /// Returns `false` and keeps the existing quantity if the UPC is
    /// already present.
    pub fn insert(&mut self, upc: Upc, quantity: u32) -> bool {
        match self.items.entry(upc) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(quantity);
                true
            }
        }
    }

    /// Returns the quantity on hand, or `None` if the store does not stock `upc`.
    pub fn quantity(&self, upc: &Upc) -> Option<u32> {
        self.items.get(upc).copied()
    }

    pub fn contains(&self, upc: &Upc) -> bool {
        self.items.contains_key(upc)
    }

    /// Removes one unit of `upc` and returns the new quantity on hand.
    ///
    /// Selling an item with nothing on hand leaves the quantity at zero.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotInInventory`] if the store does not stock `upc`.
    pub fn decrement(&mut self, upc: &Upc) -> Result<u32, InventoryError> {
        let quantity = self
            .items
            .get_mut(upc)
            .ok_or_else(|| InventoryError::NotInInventory(upc.clone()))?;

        if *quantity == 0 {
            warn!(%upc, "sold an item with no quantity on hand");
        } else {
            *quantity -= 1;
        }
        Ok(*quantity)
    }

    /// Adds `amount` units of `upc` and returns the new quantity on hand.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotInInventory`] if the store does not stock `upc`.
    pub fn increment(&mut self, upc: &Upc, amount: u32) -> Result<u32, InventoryError> {
        let quantity = self
            .items
            .get_mut(upc)
            .ok_or_else(|| InventoryError::NotInInventory(upc.clone()))?;

        *quantity = quantity.saturating_add(amount);
        Ok(*quantity)
    }

    /// Discontinues `upc`, returning its last quantity. Removing an absent
    /// UPC is a no-op.
    pub fn remove(&mut self, upc: &Upc) -> Option<u32> {
        self.items.remove(upc)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates entries in ascending UPC order.
    pub fn iter(&self) -> impl Iterator<Item = (&Upc, u32)> {
        self.items.iter().map(|(upc, quantity)| (upc, *quantity))
    }

    /// Parses an inventory snapshot.
    ///
    /// The snapshot is a sequence of records, each a double-quoted UPC,
    /// whitespace, then an unsigned quantity. Any whitespace separates
    /// tokens, so records may share a line or wrap across lines. A backslash
    /// inside the quotes escapes the next character. Quantities may carry a
    /// leading `+` (`"00044100117428" +8` reads as 8).
    ///
    /// ```text
    /// "00044100117428"     8
    /// "00041780001566"    46
    /// ```
    ///
    /// # Errors
    ///
    /// - [`LoadError::Read`] if the reader fails.
    /// - [`LoadError::Malformed`] for the first record that doesn't fit the
    ///   layout, with the line it failed on.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;

        let mut inventory = Self::new();
        let mut scanner = Scanner::new(&contents);
        while let Some(record) = scanner.next_record() {
            let (upc, quantity) = record.map_err(|reason| LoadError::Malformed {
                line: scanner.line,
                reason,
            })?;
            if !inventory.insert(upc, quantity) {
                debug!(line = scanner.line, "ignoring duplicate inventory record");
            }
        }
        Ok(inventory)
    }

    /// Loads the inventory snapshot stored at `path`.
    ///
    /// A missing file or a malformed snapshot is not fatal: the store opens
    /// with an empty inventory and a warning is logged.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = File::open(path)
            .map_err(|source| LoadError::Open {
                path: path.to_path_buf(),
                source,
            })
            .and_then(Self::from_reader);

        match loaded {
            Ok(inventory) => {
                debug!(items = inventory.len(), path = %path.display(), "inventory loaded");
                inventory
            }
            Err(e) => {
                warn!(error = %e, "proceeding with empty inventory");
                Self::new()
            }
        }
    }
}

/// Cursor over snapshot text. `line` is 1-based and follows the cursor.
struct Scanner<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text, line: 1 }
    }

    /// Reads the next `"upc" quantity` record, or `None` once only
    /// whitespace remains.
    fn next_record(&mut self) -> Option<Result<(Upc, u32), String>> {
        self.skip_whitespace();
        if self.rest.is_empty() {
            return None;
        }
        Some(self.record())
    }

    fn record(&mut self) -> Result<(Upc, u32), String> {
        let upc = self.quoted()?;
        if self.skip_whitespace() == 0 {
            return Err("expected whitespace after UPC".to_string());
        }
        let quantity = self.quantity()?;
        Ok((upc, quantity))
    }

    /// Returns the number of bytes skipped.
    fn skip_whitespace(&mut self) -> usize {
        let trimmed = self.rest.trim_start();
        let skipped = &self.rest[..self.rest.len() - trimmed.len()];
        self.line += skipped.matches('\n').count();
        self.rest = trimmed;
        skipped.len()
    }

    fn quoted(&mut self) -> Result<Upc, String> {
        let body = self
            .rest
            .strip_prefix('"')
            .ok_or_else(|| "UPC must be a quoted string".to_string())?;

        let mut upc = String::new();
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.line += body[..i].matches('\n').count();
                    self.rest = &body[i + 1..];
                    return Ok(Upc::from(upc));
                }
                '\\' => match chars.next() {
                    Some((_, escaped)) => upc.push(escaped),
                    None => break,
                },
                c => upc.push(c),
            }
        }
        Err("unterminated UPC".to_string())
    }

    fn quantity(&mut self) -> Result<u32, String> {
        let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        let quantity = token
            .parse::<u32>()
            .map_err(|e| format!("invalid quantity {token:?}: {e}"))?;
        self.rest = rest;
        Ok(quantity)
    }
}

impl FromIterator<(Upc, u32)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (Upc, u32)>>(iter: I) -> Self {
        let mut inventory = Self::new();
        for (upc, quantity) in iter {
            inventory.insert(upc, quantity);
        }
        inventory
    }
}
