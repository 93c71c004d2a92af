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

//! Customer shopping carts.

use crate::base::Upc;
use std::collections::BTreeMap;

/// One customer's selections: UPC to the product name written on the shelf tag.
///
/// The name is only a display hint for items the catalog doesn't know.
pub type ShoppingCart = BTreeMap<Upc, String>;

/// Shopping carts keyed by customer name, served in name order.
pub type ShoppingCarts = BTreeMap<String, ShoppingCart>;

fn cart(items: &[(&str, &str)]) -> ShoppingCart {
    items
        .iter()
        .map(|(upc, name)| (Upc::from(*upc), (*name).to_string()))
        .collect()
}

/// The day's sample customers.
pub fn make_shopping_carts() -> ShoppingCarts {
    let carts = [
        (
            "Red Baron",
            cart(&[
                ("00075457129000", "milk"),
                ("00038000291210", "rice krispies"),
                ("00025317533003", "hotdogs"),
                ("09073649000493", "apple pie"),
                ("00835841005255", "bread"),
                ("00688267039317", "eggs"),
                ("00037466065908", "Truffles"),
            ]),
        ),
        (
            "Peppermint Patty",
            cart(&[
                ("00813608012401", "Cheese"),
                ("00037466065908", "Truffles"),
                ("00631723300704", "Pepperoncini"),
                ("00051500280645", "Pancake Mix"),
                ("00792851355155", "Soup"),
                ("00898425001333", "Sandwich"),
                ("00021908501871", "Potato Spuds"),
                ("00856414001092", "Plantain Chips"),
                ("00036192122930", "Applesauce"),
                ("00763795931415", "Paper Plates"),
                ("00070596000647", "Soap"),
                ("00079400266200", "Deodorant"),
            ]),
        ),
        (
            "Woodstock",
            cart(&[
                ("00859013004327", "Mint Tea"),
                ("00041331092609", "Spanish Omelet"),
                ("00217039300005", "Fillet Steak"),
                ("00636874220338", "Face Exfoliate"),
                ("00688267138973", "Green Tea"),
                ("00033674100066", "Forskohlii"),
                ("00891475001421", "Candy Fruit Chews"),
                ("00688267133442", "Coffee"),
                ("00021000778690", "Cheesy Potatoes"),
                ("00071758100823", "Pepper"),
                ("00041520010667", "Mouth Wash"),
                ("00216079600007", "Lamb Chops"),
                ("00790555051526", "Black Beans"),
                ("00070177862640", "Tea Sampler"),
                ("00018000001958", "Cinnamon Rolls"),
            ]),
        ),
        (
            "Schroeder",
            cart(&[
                ("00072591002251", "Peanut Butter"),
                ("00219019100001", "Ground Beef"),
                ("00890692002020", "Stretch Cream"),
                ("00637876981630", "Mozzarella"),
                ("00716237183507", "Facial Towelettes"),
                ("00886911000052", "Pastry Popover"),
                ("00084783499008", "Massage Oil"),
                ("00016055456747", "Children's Fruit Drink"),
                ("00021908743325", "Granola Cereal"),
                ("00688267138973", "Green Tea"),
            ]),
        ),
        (
            "Lucy van Pelt",
            cart(&[
                ("00070327012116", "Pineapple"),
                ("00073377801839", "Sleep Mask Blue"),
                ("00030768009670", "Calcium Softgels"),
                ("00852697001422", "Baby Food"),
                ("00079471102414", "Manzanillo"),
                ("00072736013753", "Dressing"),
                ("00216210900003", "Cheddar Cheese"),
                ("00780872310185", "Dog Food"),
                ("00710069086036", "Crackers"),
                ("00092657016985", "Tea"),
                ("00086449903065", "Deodorant"),
                ("00885229000198", "Drinks"),
            ]),
        ),
        ("Charlie Brown", cart(&[("00611508524006", "Lump Of Coal")])),
    ];

    carts
        .into_iter()
        .map(|(name, cart)| (name.to_string(), cart))
        .collect()
}
