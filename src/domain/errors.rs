use std::fmt;

use thiserror::Error;

/// Kind of entity a lookup was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Customer,
    Product,
    Order,
    CustomerOrders,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Customer => "customer",
            Entity::Product => "product",
            Entity::Order => "order",
            Entity::CustomerOrders => "orders for customer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: i32 },
    /// A product referenced by an order request does not exist.
    #[error("product with id {0} not found")]
    ProductNotFound(i32),
    #[error("product with id {0} is out of inventory")]
    OutOfInventory(i32),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Storage failure: {0}")]
    Storage(String),
    /// The caller went away before the transaction committed; nothing was
    /// written.
    #[error("request cancelled")]
    Cancelled,
}

impl DomainError {
    pub fn not_found(entity: Entity, id: i32) -> Self {
        DomainError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_entity_and_id() {
        let err = DomainError::not_found(Entity::CustomerOrders, 7);
        assert_eq!(err.to_string(), "orders for customer with id 7 not found");
    }

    #[test]
    fn out_of_inventory_names_product() {
        assert_eq!(
            DomainError::OutOfInventory(42).to_string(),
            "product with id 42 is out of inventory"
        );
    }
}
