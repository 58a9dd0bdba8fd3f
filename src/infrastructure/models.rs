use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::catalog::{Customer, Product};
use crate::domain::order::{FlatOrderRow, StockRecord};
use crate::schema::{customers, inventory, orderlines, orders, products};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    #[diesel(column_name = customerid)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            first_name: row.firstname,
            last_name: row.lastname,
            age: row.age,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub age: i32,
}

/// A product joined with its inventory row.
#[derive(Debug, Clone, Queryable)]
pub struct ProductRow {
    pub id: i32,
    pub title: String,
    pub price: BigDecimal,
    pub quan_in_stock: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            price: row.price,
            quantity: row.quan_in_stock,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub title: &'a str,
    pub price: &'a BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = inventory)]
pub struct NewInventoryRow {
    pub prod_id: i32,
    pub quan_in_stock: i32,
}

#[derive(Debug, Clone, Queryable)]
pub struct StockRow {
    pub prod_id: i32,
    pub quan_in_stock: i32,
    pub price: BigDecimal,
    pub title: String,
}

impl From<StockRow> for StockRecord {
    fn from(row: StockRow) -> Self {
        StockRecord {
            product_id: row.prod_id,
            quantity: row.quan_in_stock,
            price: row.price,
            title: row.title,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub orderdate: DateTime<Utc>,
    pub customerid: i32,
    pub netamount: &'a BigDecimal,
    pub tax: &'a BigDecimal,
    pub totalamount: &'a BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orderlines)]
pub struct NewOrderLineRow<'a> {
    pub orderlineid: i32,
    pub orderid: i32,
    pub prod_id: i32,
    pub quantity: i32,
    pub price: &'a BigDecimal,
    pub title: &'a str,
    pub orderdate: DateTime<Utc>,
}

/// One row of the order header x order line join.
#[derive(Debug, Clone, Queryable)]
pub struct OrderLineJoinRow {
    pub orderid: i32,
    pub orderdate: DateTime<Utc>,
    pub netamount: BigDecimal,
    pub tax: BigDecimal,
    pub totalamount: BigDecimal,
    pub prod_id: i32,
    pub title: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl From<OrderLineJoinRow> for FlatOrderRow {
    fn from(row: OrderLineJoinRow) -> Self {
        FlatOrderRow {
            order_id: row.orderid,
            date: row.orderdate,
            net_amount: row.netamount,
            tax: row.tax,
            total_amount: row.totalamount,
            product_id: row.prod_id,
            title: row.title,
            price: row.price,
            quantity: row.quantity,
        }
    }
}
