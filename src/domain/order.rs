use std::collections::HashSet;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::errors::DomainError;

/// A requested order line: which product and how many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineInput {
    pub product_id: i32,
    pub quantity: i32,
}

/// An order needs at least one line, positive product ids and quantities,
/// and each product at most once.
pub fn validate_lines(lines: &[OrderLineInput]) -> Result<(), DomainError> {
    if lines.is_empty() {
        return Err(DomainError::Validation(
            "products must not be empty".to_string(),
        ));
    }
    let mut seen = HashSet::with_capacity(lines.len());
    for line in lines {
        if line.product_id <= 0 || line.quantity <= 0 {
            return Err(DomainError::Validation(
                "fields not valid: product_id, quantity".to_string(),
            ));
        }
        if !seen.insert(line.product_id) {
            return Err(DomainError::Validation(format!(
                "product {} appears more than once",
                line.product_id
            )));
        }
    }
    Ok(())
}

/// Stock on hand for a product, read inside the order transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct StockRecord {
    pub product_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
    pub title: String,
}

/// A line of a placed order. Price and title are snapshots taken when the
/// order was placed and never follow later catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub product_id: i32,
    pub title: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub date: DateTime<Utc>,
    pub net_amount: BigDecimal,
    pub tax: BigDecimal,
    pub total_amount: BigDecimal,
    pub lines: Vec<OrderLine>,
}

/// One row of the order/line flattening join: header fields are repeated for
/// every line of the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatOrderRow {
    pub order_id: i32,
    pub date: DateTime<Utc>,
    pub net_amount: BigDecimal,
    pub tax: BigDecimal,
    pub total_amount: BigDecimal,
    pub product_id: i32,
    pub title: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i32, quantity: i32) -> OrderLineInput {
        OrderLineInput {
            product_id,
            quantity,
        }
    }

    #[test]
    fn lines_must_not_be_empty() {
        assert_eq!(
            validate_lines(&[]),
            Err(DomainError::Validation("products must not be empty".to_string()))
        );
    }

    #[test]
    fn lines_reject_non_positive_values() {
        assert!(validate_lines(&[line(0, 1)]).is_err());
        assert!(validate_lines(&[line(1, 0)]).is_err());
        assert!(validate_lines(&[line(1, 1), line(2, 5)]).is_ok());
    }

    #[test]
    fn lines_reject_duplicate_products() {
        let err = validate_lines(&[line(4, 1), line(9, 1), line(4, 2)]).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("product 4 appears more than once".to_string())
        );
    }
}
