//! Stock reads and decrements used by the order transaction.
//!
//! Both functions expect to run on a connection that is already inside a
//! transaction.

use diesel::prelude::*;
use diesel::PgConnection;

use crate::domain::errors::DomainError;
use crate::domain::order::StockRecord;
use crate::schema::{inventory, products};

use super::models::StockRow;

/// Reads stock, price and title for exactly `product_ids`, sorted by product
/// id, and row-locks the inventory and product rows until the transaction
/// ends. Locks are always taken in product id order so concurrent orders for
/// overlapping products cannot deadlock.
pub fn lock_stock(
    conn: &mut PgConnection,
    product_ids: &[i32],
) -> Result<Vec<StockRecord>, DomainError> {
    let rows: Vec<StockRow> = inventory::table
        .inner_join(products::table)
        .filter(inventory::prod_id.eq_any(product_ids))
        .order(inventory::prod_id.asc())
        .select((
            inventory::prod_id,
            inventory::quan_in_stock,
            products::price,
            products::title,
        ))
        .for_update()
        .load(conn)?;

    Ok(rows.into_iter().map(StockRecord::from).collect())
}

/// Takes `quantity` units out of stock for one product, only if that much is
/// on hand.
pub fn decrement_stock(
    conn: &mut PgConnection,
    product_id: i32,
    quantity: i32,
) -> Result<(), DomainError> {
    let updated = diesel::update(
        inventory::table
            .filter(inventory::prod_id.eq(product_id))
            .filter(inventory::quan_in_stock.ge(quantity)),
    )
    .set(inventory::quan_in_stock.eq(inventory::quan_in_stock - quantity))
    .execute(conn)?;

    if updated != 1 {
        return Err(DomainError::OutOfInventory(product_id));
    }
    Ok(())
}
