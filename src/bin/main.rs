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

use clap::Parser;
use grocery_store::{
    Catalog, GroceryItemDatabase, GroceryStore, Inventory, ReorderPolicy, ShoppingCarts,
    StoreError, Upc, make_shopping_carts,
};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Grocery Store - Ring up the day's customers and restock
///
/// Loads the world-wide catalog and the store's inventory, rings up the sample
/// shopping carts, then reorders whatever ran low. Receipts and the reorder
/// report go to stdout; logs go to stderr (filter with RUST_LOG).
#[derive(Parser, Debug)]
#[command(name = "grocery-store")]
#[command(about = "Rings up shopping carts and restocks a grocery store", long_about = None)]
struct Args {
    /// Catalog file of "upc","brand","product name",price records
    #[arg(long, value_name = "FILE", default_value = "Grocery_UPC_Database.dat")]
    catalog: PathBuf,

    /// Inventory snapshot of "upc" quantity records
    #[arg(long, value_name = "FILE", default_value = "Grocery_Inventory.dat")]
    inventory: PathBuf,

    /// Items with fewer units on hand than this are reordered
    #[arg(long, default_value_t = ReorderPolicy::DEFAULT_REORDER_THRESHOLD)]
    reorder_threshold: u32,

    /// Units received per reorder
    #[arg(long, default_value_t = ReorderPolicy::DEFAULT_LOT_COUNT)]
    lot_count: u32,

    /// UPC the store stops carrying after checkout (repeatable)
    #[arg(long = "discontinue", value_name = "UPC")]
    discontinued: Vec<String>,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let catalog = Arc::new(GroceryItemDatabase::load(&args.catalog));
    let inventory = Inventory::load(&args.inventory);
    info!(
        catalog_items = catalog.len(),
        inventory_items = inventory.len(),
        "store opened"
    );

    let policy = ReorderPolicy::new(args.reorder_threshold, args.lot_count);
    let mut store = GroceryStore::with_policy(inventory, catalog, policy);
    let discontinued: Vec<Upc> = args.discontinued.into_iter().map(Upc::from).collect();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(e) = run_day(&mut store, &make_shopping_carts(), &discontinued, &mut out) {
        eprintln!("Error running the store: {}", e);
        process::exit(1);
    }
}

/// Rings up `shopping_carts`, drops `discontinued` from the inventory, then
/// reorders, writing receipts and the reorder report to `out`.
fn run_day<C: Catalog + ?Sized, W: Write>(
    store: &mut GroceryStore<C>,
    shopping_carts: &ShoppingCarts,
    discontinued: &[Upc],
    out: &mut W,
) -> Result<(), StoreError> {
    let mut todays_sales = store.ring_up_customers(shopping_carts, out)?;

    for upc in discontinued {
        if store.inventory_mut().remove(upc).is_some() {
            info!(%upc, "item discontinued");
        }
    }

    store.reorder_items(&mut todays_sales, out)?;
    out.flush()?;
    Ok(())
}
