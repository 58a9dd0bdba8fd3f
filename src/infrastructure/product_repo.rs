use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{NewProduct, Product};
use crate::domain::errors::{DomainError, Entity};
use crate::domain::ports::ProductRepository;
use crate::schema::{inventory, products};

use super::models::{NewInventoryRow, NewProductRow, ProductRow};

#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn list(&self, limit: i64) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<ProductRow> = products::table
            .inner_join(inventory::table)
            .select((
                products::prod_id,
                products::title,
                products::price,
                inventory::quan_in_stock,
            ))
            .order(products::prod_id.asc())
            .limit(limit)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row: Option<ProductRow> = products::table
            .inner_join(inventory::table)
            .filter(products::prod_id.eq(id))
            .select((
                products::prod_id,
                products::title,
                products::price,
                inventory::quan_in_stock,
            ))
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn create(&self, product: NewProduct) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let id: i32 = diesel::insert_into(products::table)
                .values(&NewProductRow {
                    title: &product.title,
                    price: &product.price,
                })
                .returning(products::prod_id)
                .get_result(conn)?;

            diesel::insert_into(inventory::table)
                .values(&NewInventoryRow {
                    prod_id: id,
                    quan_in_stock: product.quantity,
                })
                .execute(conn)?;

            Ok(id)
        })
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            diesel::delete(inventory::table.filter(inventory::prod_id.eq(id))).execute(conn)?;
            let deleted =
                diesel::delete(products::table.filter(products::prod_id.eq(id))).execute(conn)?;

            if deleted == 0 {
                return Err(DomainError::not_found(Entity::Product, id));
            }
            Ok(())
        })
    }
}
