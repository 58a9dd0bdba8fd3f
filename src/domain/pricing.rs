//! Pure pricing and stock validation for an order request.
//!
//! The store is the only source of truth for prices: every line is priced
//! from the stock record it is paired with, never from caller input.

use bigdecimal::{BigDecimal, RoundingMode};

use super::errors::DomainError;
use super::order::{OrderLine, OrderLineInput, StockRecord};

/// Money amounts are kept in cents.
const MONEY_SCALE: i64 = 2;

/// Exclusive upper bound for any stored amount: money columns are
/// `NUMERIC(12, 2)`, so the largest value is 9999999999.99.
pub fn money_limit() -> BigDecimal {
    BigDecimal::from(10_000_000_000i64)
}

/// Fixed sales tax rate, 0.10.
pub fn tax_rate() -> BigDecimal {
    BigDecimal::new(10i64.into(), 2)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedLines {
    pub lines: Vec<OrderLine>,
    pub net_amount: BigDecimal,
    pub tax: BigDecimal,
    pub total_amount: BigDecimal,
}

/// Pairs each requested line with its stock record and computes the order
/// amounts.
///
/// Both slices must be sorted by product id so that pairing is positional.
/// Fails with [`DomainError::ProductNotFound`] when a requested id has no
/// matching stock record, with [`DomainError::OutOfInventory`] when a line
/// asks for more than is on hand and with [`DomainError::Validation`] when
/// the total would not fit a money column.
pub fn price_lines(
    requested: &[OrderLineInput],
    stock: &[StockRecord],
) -> Result<PricedLines, DomainError> {
    if let Some(missing) = requested
        .iter()
        .find(|line| !stock.iter().any(|s| s.product_id == line.product_id))
    {
        return Err(DomainError::ProductNotFound(missing.product_id));
    }

    let mut net = BigDecimal::from(0);
    let mut lines = Vec::with_capacity(requested.len());
    for (line, record) in requested.iter().zip(stock) {
        if line.product_id != record.product_id {
            return Err(DomainError::ProductNotFound(line.product_id));
        }
        if line.quantity > record.quantity {
            return Err(DomainError::OutOfInventory(record.product_id));
        }
        net += &record.price * BigDecimal::from(line.quantity);
        lines.push(OrderLine {
            product_id: record.product_id,
            title: record.title.clone(),
            price: record.price.clone(),
            quantity: line.quantity,
        });
    }

    let net_amount = round_money(&net);
    let tax = round_money(&(&net_amount * tax_rate()));
    let total_amount = &net_amount + &tax;
    if total_amount >= money_limit() {
        return Err(DomainError::Validation(format!(
            "order total {total_amount} exceeds the largest storable amount"
        )));
    }

    Ok(PricedLines {
        lines,
        net_amount,
        tax,
        total_amount,
    })
}

fn round_money(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
}
