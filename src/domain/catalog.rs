use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// A catalog product. `quantity` is the stock on hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub price: BigDecimal,
    /// Initial stock on hand.
    pub quantity: i32,
}
