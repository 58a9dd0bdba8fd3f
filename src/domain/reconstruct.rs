//! Rebuilds nested orders from the rows of the order/line flattening join.

use std::collections::HashMap;

use super::order::{FlatOrderRow, Order, OrderLine};

/// Builds a single order from rows that all belong to it, one line per row
/// in row order. Returns `None` when there are no rows: an order without
/// lines cannot be told apart from a missing one.
pub fn assemble_order<I>(rows: I) -> Option<Order>
where
    I: IntoIterator<Item = FlatOrderRow>,
{
    let mut rows = rows.into_iter();
    let first = rows.next()?;
    let mut order = start_order(first);
    for row in rows {
        order.lines.push(line_of(row));
    }
    Some(order)
}

/// Groups rows into orders keyed by order id.
///
/// Orders come out in the order their id was first seen and lines are
/// appended in row order, so the result does not depend on rows of one
/// order being contiguous.
pub fn assemble_orders<I>(rows: I) -> Vec<Order>
where
    I: IntoIterator<Item = FlatOrderRow>,
{
    let mut orders: Vec<Order> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        match index.get(&row.order_id) {
            Some(&pos) => orders[pos].lines.push(line_of(row)),
            None => {
                index.insert(row.order_id, orders.len());
                orders.push(start_order(row));
            }
        }
    }
    orders
}

fn start_order(row: FlatOrderRow) -> Order {
    let FlatOrderRow {
        order_id,
        date,
        net_amount,
        tax,
        total_amount,
        product_id,
        title,
        price,
        quantity,
    } = row;
    Order {
        id: order_id,
        date,
        net_amount,
        tax,
        total_amount,
        lines: vec![OrderLine {
            product_id,
            title,
            price,
            quantity,
        }],
    }
}

fn line_of(row: FlatOrderRow) -> OrderLine {
    OrderLine {
        product_id: row.product_id,
        title: row.title,
        price: row.price,
        quantity: row.quantity,
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn row(order_id: i32, product_id: i32, quantity: i32) -> FlatOrderRow {
        FlatOrderRow {
            order_id,
            date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            net_amount: BigDecimal::from(100),
            tax: BigDecimal::from(10),
            total_amount: BigDecimal::from(110),
            product_id,
            title: format!("TITLE {product_id}"),
            price: BigDecimal::from(5),
            quantity,
        }
    }

    fn product_ids(order: &Order) -> Vec<i32> {
        order.lines.iter().map(|l| l.product_id).collect()
    }

    #[test]
    fn assemble_order_returns_none_for_no_rows() {
        assert!(assemble_order(Vec::new()).is_none());
    }

    #[test]
    fn assemble_order_keeps_one_line_per_row_in_row_order() {
        let order = assemble_order(vec![row(4, 30, 1), row(4, 10, 2), row(4, 20, 3)])
            .expect("order expected");

        assert_eq!(order.id, 4);
        assert_eq!(order.total_amount, BigDecimal::from(110));
        assert_eq!(product_ids(&order), vec![30, 10, 20]);
        assert_eq!(order.lines[1].quantity, 2);
        assert_eq!(order.lines[1].title, "TITLE 10");
    }

    #[test]
    fn assemble_orders_splits_contiguous_groups() {
        let rows = vec![
            row(1, 11, 1),
            row(1, 12, 1),
            row(2, 21, 1),
            row(2, 22, 1),
            row(2, 23, 1),
        ];

        let orders = assemble_orders(rows);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 1);
        assert_eq!(orders[0].lines.len(), 2);
        assert_eq!(orders[1].id, 2);
        assert_eq!(product_ids(&orders[1]), vec![21, 22, 23]);
    }

    #[test]
    fn assemble_orders_merges_interleaved_rows_by_first_seen_id() {
        let rows = vec![row(7, 1, 1), row(3, 2, 1), row(7, 3, 1), row(3, 4, 1)];

        let orders = assemble_orders(rows);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 7);
        assert_eq!(product_ids(&orders[0]), vec![1, 3]);
        assert_eq!(orders[1].id, 3);
        assert_eq!(product_ids(&orders[1]), vec![2, 4]);
    }

    #[test]
    fn assemble_orders_is_empty_for_no_rows() {
        assert!(assemble_orders(Vec::new()).is_empty());
    }
}
