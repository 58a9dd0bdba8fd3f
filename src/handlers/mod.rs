pub mod customers;
pub mod orders;
pub mod products;

use serde::Deserialize;

/// Upper bound for `limit` on list endpoints.
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Number of items to return. Defaults to 20, maximum 100.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

impl ListParams {
    /// Caps the requested limit; values below 1 are left for the use-case
    /// layer to reject.
    pub fn capped_limit(&self) -> i64 {
        self.limit.min(MAX_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_capped() {
        assert_eq!(ListParams { limit: 500 }.capped_limit(), 100);
        assert_eq!(ListParams { limit: 7 }.capped_limit(), 7);
        assert_eq!(ListParams { limit: 0 }.capped_limit(), 0);
    }
}
