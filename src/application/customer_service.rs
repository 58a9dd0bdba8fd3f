use crate::domain::catalog::{Customer, NewCustomer};
use crate::domain::errors::{DomainError, Entity};
use crate::domain::ports::CustomerRepository;

use super::{logged, validation};

pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_customers(&self, limit: i64) -> Result<Vec<Customer>, DomainError> {
        validation::positive(limit, "limit").map_err(|e| logged("list_customers", e))?;
        self.repo
            .list(limit)
            .map_err(|e| logged("list_customers", e))
    }

    pub fn get_customer(&self, id: i32) -> Result<Customer, DomainError> {
        validation::positive(id.into(), "customerId").map_err(|e| logged("get_customer", e))?;
        self.repo
            .find_by_id(id)
            .and_then(|c| c.ok_or_else(|| DomainError::not_found(Entity::Customer, id)))
            .map_err(|e| logged("get_customer", e))
    }

    pub fn add_customer(&self, customer: NewCustomer) -> Result<i32, DomainError> {
        validation::new_customer(&customer).map_err(|e| logged("add_customer", e))?;
        self.repo
            .create(customer)
            .map_err(|e| logged("add_customer", e))
    }

    pub fn delete_customer(&self, id: i32) -> Result<(), DomainError> {
        validation::positive(id.into(), "customerId")
            .map_err(|e| logged("delete_customer", e))?;
        self.repo
            .delete(id)
            .map_err(|e| logged("delete_customer", e))
    }
}
