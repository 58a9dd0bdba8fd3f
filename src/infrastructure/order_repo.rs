use std::collections::BTreeSet;

use chrono::{SubsecRound, Utc};
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::cancel::Cancellation;
use crate::domain::errors::{DomainError, Entity};
use crate::domain::order::{validate_lines, FlatOrderRow, Order, OrderLineInput};
use crate::domain::ports::OrderRepository;
use crate::domain::pricing::price_lines;
use crate::domain::reconstruct::{assemble_order, assemble_orders};
use crate::schema::{orderlines, orders};

use super::inventory::{decrement_stock, lock_stock};
use super::models::{NewOrderLineRow, NewOrderRow, OrderLineJoinRow};

// ── Repository ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Columns of the order header x order line flattening join, in the order
/// `OrderLineJoinRow` expects them.
const FLAT_ORDER_COLUMNS: (
    orders::orderid,
    orders::orderdate,
    orders::netamount,
    orders::tax,
    orders::totalamount,
    orderlines::prod_id,
    orderlines::title,
    orderlines::price,
    orderlines::quantity,
) = (
    orders::orderid,
    orders::orderdate,
    orders::netamount,
    orders::tax,
    orders::totalamount,
    orderlines::prod_id,
    orderlines::title,
    orderlines::price,
    orderlines::quantity,
);

impl OrderRepository for DieselOrderRepository {
    fn add_order(
        &self,
        customer_id: i32,
        mut lines: Vec<OrderLineInput>,
        cancellation: &Cancellation,
    ) -> Result<Order, DomainError> {
        validate_lines(&lines)?;
        let product_ids: Vec<i32> = lines
            .iter()
            .map(|l| l.product_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut conn = self.pool.get()?;

        // Any Err returned from the closure rolls the whole transaction back.
        let order = conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Lock and read stock for the requested products
            let stock = lock_stock(conn, &product_ids)?;
            if stock.len() != product_ids.len() {
                if let Some(missing) = product_ids
                    .iter()
                    .copied()
                    .find(|id| !stock.iter().any(|s| s.product_id == *id))
                {
                    return Err(DomainError::ProductNotFound(missing));
                }
            }

            // 2. Price the lines against stock (both sorted by product id)
            lines.sort_by_key(|l| l.product_id);
            let priced = price_lines(&lines, &stock)?;

            // 3. Take the ordered quantities out of stock
            for line in &lines {
                decrement_stock(conn, line.product_id, line.quantity)?;
            }

            // 4. Insert the order header (Postgres keeps microseconds)
            cancellation.check()?;
            let date = Utc::now().trunc_subsecs(6);
            let order_id: i32 = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    orderdate: date,
                    customerid: customer_id,
                    netamount: &priced.net_amount,
                    tax: &priced.tax,
                    totalamount: &priced.total_amount,
                })
                .returning(orders::orderid)
                .get_result(conn)?;

            // 5. Insert order lines, numbered from 1
            let new_lines: Vec<NewOrderLineRow> = priced
                .lines
                .iter()
                .zip(1..)
                .map(|(l, seq)| NewOrderLineRow {
                    orderlineid: seq,
                    orderid: order_id,
                    prod_id: l.product_id,
                    quantity: l.quantity,
                    price: &l.price,
                    title: &l.title,
                    orderdate: date,
                })
                .collect();
            diesel::insert_into(orderlines::table)
                .values(&new_lines)
                .execute(conn)?;

            cancellation.check()?;
            Ok(Order {
                id: order_id,
                date,
                net_amount: priced.net_amount,
                tax: priced.tax,
                total_amount: priced.total_amount,
                lines: priced.lines,
            })
        })
        .inspect_err(|e| {
            if matches!(e, DomainError::Cancelled) {
                log::warn!("order for customer {customer_id} rolled back: request cancelled");
            }
        })?;

        log::info!(
            "order {} placed for customer {} ({} lines, total {})",
            order.id,
            customer_id,
            order.lines.len(),
            order.total_amount
        );
        Ok(order)
    }

    fn find_by_id(&self, id: i32) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<OrderLineJoinRow> = orders::table
            .inner_join(orderlines::table)
            .filter(orders::orderid.eq(id))
            .order(orderlines::orderlineid.asc())
            .select(FLAT_ORDER_COLUMNS)
            .load(&mut conn)?;

        assemble_order(rows.into_iter().map(FlatOrderRow::from))
            .ok_or_else(|| DomainError::not_found(Entity::Order, id))
    }

    fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<OrderLineJoinRow> = orders::table
            .inner_join(orderlines::table)
            .filter(orders::customerid.eq(customer_id))
            .order((orders::orderid.asc(), orderlines::orderlineid.asc()))
            .select(FLAT_ORDER_COLUMNS)
            .load(&mut conn)?;

        let found = assemble_orders(rows.into_iter().map(FlatOrderRow::from));
        if found.is_empty() {
            return Err(DomainError::not_found(Entity::CustomerOrders, customer_id));
        }
        Ok(found)
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        // Order lines go with the header (ON DELETE CASCADE); stock is not
        // returned to inventory.
        let deleted =
            diesel::delete(orders::table.filter(orders::orderid.eq(id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(DomainError::not_found(Entity::Order, id));
        }
        Ok(())
    }
}
