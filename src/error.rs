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

//! Error types for inventory, checkout and restocking.
//!
//! A catalog miss or a catalog item the store does not stock is a business
//! rule, not an error, and never shows up here.

use crate::base::Upc;
use std::path::PathBuf;
use thiserror::Error;

/// Inventory ledger errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A quantity change was attempted on a UPC the store does not stock
    #[error("grocery item {0} is not in the store's inventory")]
    NotInInventory(Upc),
}

/// Errors raised while ringing up customers or reordering.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Ledger invariant violation
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The receipt or report sink rejected a write
    #[error("failed to write to receipt or report: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading the catalog or an inventory snapshot.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source file could not be opened
    #[error("could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Csv(#[from] csv::Error),

    /// A record that does not follow the `"upc" quantity` layout
    #[error("malformed inventory record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(
            InventoryError::NotInInventory(Upc::from("00075457129000")).to_string(),
            "grocery item 00075457129000 is not in the store's inventory"
        );
        assert_eq!(
            LoadError::Malformed {
                line: 3,
                reason: "missing quantity".into()
            }
            .to_string(),
            "malformed inventory record on line 3: missing quantity"
        );
    }

    #[test]
    fn store_error_wraps_inventory_error_transparently() {
        let error: StoreError = InventoryError::NotInInventory(Upc::from("001")).into();
        assert_eq!(
            error.to_string(),
            "grocery item 001 is not in the store's inventory"
        );
        assert!(matches!(
            error,
            StoreError::Inventory(InventoryError::NotInInventory(_))
        ));
    }

    #[test]
    fn errors_are_cloneable() {
        let error = InventoryError::NotInInventory(Upc::from("001"));
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
