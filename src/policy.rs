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

//! Store-wide restocking policy.

/// Reorder threshold and lot size shared by every item in a store.
///
/// The restock report and the inventory update both read from the same
/// policy, so the printed deficit and lot size always match what is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderPolicy {
    /// Items with fewer units on hand than this are reordered.
    pub reorder_threshold: u32,
    /// Units received per reorder.
    pub lot_count: u32,
}

impl ReorderPolicy {
    pub const DEFAULT_REORDER_THRESHOLD: u32 = 15;
    pub const DEFAULT_LOT_COUNT: u32 = 20;

    pub fn new(reorder_threshold: u32, lot_count: u32) -> Self {
        Self {
            reorder_threshold,
            lot_count,
        }
    }

    pub fn needs_reorder(&self, quantity: u32) -> bool {
        quantity < self.reorder_threshold
    }

    /// Units short of the threshold (zero when adequately stocked).
    pub fn deficit(&self, quantity: u32) -> u32 {
        self.reorder_threshold.saturating_sub(quantity)
    }
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REORDER_THRESHOLD, Self::DEFAULT_LOT_COUNT)
    }
}
