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

//! Core identifier type for grocery items.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Universal Product Code identifying a grocery item.
///
/// The UPC is the join key between the world-wide catalog and a store's
/// inventory. Ordering is lexicographic, so ordered collections of UPCs
/// iterate in ascending code order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Upc(pub String);

impl Upc {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Upc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Upc {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl From<String> for Upc {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for Upc {
    fn borrow(&self) -> &str {
        &self.0
    }
}
