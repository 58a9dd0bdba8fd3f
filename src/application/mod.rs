pub mod customer_service;
pub mod order_service;
pub mod product_service;
pub mod validation;

use crate::domain::errors::DomainError;

/// Logs a failure on its way out of the use-case layer. Storage failures
/// carry backend detail that only goes to the log; everything else is an
/// expected outcome and is logged at debug level.
fn logged(op: &str, err: DomainError) -> DomainError {
    match &err {
        DomainError::Storage(detail) => log::error!("{op}: {detail}"),
        other => log::debug!("{op}: {other}"),
    }
    err
}
