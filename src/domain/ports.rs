use super::cancel::Cancellation;
use super::catalog::{Customer, NewCustomer, NewProduct, Product};
use super::errors::DomainError;
use super::order::{Order, OrderLineInput};

pub trait CustomerRepository: Send + Sync + 'static {
    fn list(&self, limit: i64) -> Result<Vec<Customer>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError>;
    fn create(&self, customer: NewCustomer) -> Result<i32, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn list(&self, limit: i64) -> Result<Vec<Product>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;
    fn create(&self, product: NewProduct) -> Result<i32, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Places an order atomically: stock check, pricing, stock decrement and
    /// order insert all commit together or not at all. A cancelled
    /// `cancellation` rolls the transaction back.
    fn add_order(
        &self,
        customer_id: i32,
        lines: Vec<OrderLineInput>,
        cancellation: &Cancellation,
    ) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Order, DomainError>;
    fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}
