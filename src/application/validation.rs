use bigdecimal::BigDecimal;

use crate::domain::catalog::{NewCustomer, NewProduct};
use crate::domain::errors::DomainError;
use crate::domain::pricing::money_limit;

/// Names and titles are stored as `VARCHAR(50)`.
pub const MAX_TEXT_LEN: usize = 50;

/// Ids and limits must be strictly positive.
pub fn positive(value: i64, name: &str) -> Result<(), DomainError> {
    if value > 0 {
        return Ok(());
    }
    Err(DomainError::Validation(format!("{name} must be > 0")))
}

pub fn new_customer(customer: &NewCustomer) -> Result<(), DomainError> {
    if !fits_text(&customer.first_name) || !fits_text(&customer.last_name) || customer.age <= 0 {
        return Err(fields_not_valid(&["first_name", "last_name", "age"]));
    }
    Ok(())
}

pub fn new_product(product: &NewProduct) -> Result<(), DomainError> {
    if !fits_text(&product.title)
        || product.price < BigDecimal::from(0)
        || product.price >= money_limit()
        || product.quantity < 0
    {
        return Err(fields_not_valid(&["title", "price", "quantity"]));
    }
    Ok(())
}

fn fits_text(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().count() <= MAX_TEXT_LEN
}

fn fields_not_valid(fields: &[&str]) -> DomainError {
    DomainError::Validation(format!("fields not valid: {}", fields.join(", ")))
}
