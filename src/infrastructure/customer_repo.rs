use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{Customer, NewCustomer};
use crate::domain::errors::{DomainError, Entity};
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};

#[derive(Clone)]
pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn list(&self, limit: i64) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customers::table
            .select(CustomerRow::as_select())
            .order(customers::customerid.asc())
            .limit(limit)
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::customerid.eq(id))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn create(&self, customer: NewCustomer) -> Result<i32, DomainError> {
        let mut conn = self.pool.get()?;

        let id = diesel::insert_into(customers::table)
            .values(&NewCustomerRow {
                firstname: &customer.first_name,
                lastname: &customer.last_name,
                age: customer.age,
            })
            .returning(customers::customerid)
            .get_result(&mut conn)?;

        Ok(id)
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(customers::table.filter(customers::customerid.eq(id)))
            .execute(&mut conn)?;

        if deleted == 0 {
            return Err(DomainError::not_found(Entity::Customer, id));
        }
        Ok(())
    }
}
