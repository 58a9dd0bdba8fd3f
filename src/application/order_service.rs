use crate::domain::cancel::Cancellation;
use crate::domain::errors::{DomainError, Entity};
use crate::domain::order::{validate_lines, Order, OrderLineInput};
use crate::domain::ports::{CustomerRepository, OrderRepository};

use super::{logged, validation};

/// Order use cases. Input is validated and the customer's existence checked
/// here before the repository runs the fulfillment transaction.
pub struct OrderService<O, C> {
    orders: O,
    customers: C,
}

impl<O: OrderRepository, C: CustomerRepository> OrderService<O, C> {
    pub fn new(orders: O, customers: C) -> Self {
        Self { orders, customers }
    }

    pub fn get_order(&self, id: i32) -> Result<Order, DomainError> {
        validation::positive(id.into(), "orderId").map_err(|e| logged("get_order", e))?;
        self.orders
            .find_by_id(id)
            .map_err(|e| logged("get_order", e))
    }

    pub fn get_customer_orders(&self, customer_id: i32) -> Result<Vec<Order>, DomainError> {
        validation::positive(customer_id.into(), "customerId")
            .map_err(|e| logged("get_customer_orders", e))?;
        self.ensure_customer(customer_id)
            .and_then(|_| self.orders.find_by_customer(customer_id))
            .map_err(|e| logged("get_customer_orders", e))
    }

    pub fn add_order(
        &self,
        customer_id: i32,
        lines: Vec<OrderLineInput>,
        cancellation: &Cancellation,
    ) -> Result<Order, DomainError> {
        validation::positive(customer_id.into(), "customerId")
            .and_then(|_| validate_lines(&lines))
            .map_err(|e| logged("add_order", e))?;
        self.ensure_customer(customer_id)
            .and_then(|_| self.orders.add_order(customer_id, lines, cancellation))
            .map_err(|e| logged("add_order", e))
    }

    pub fn delete_order(&self, id: i32) -> Result<(), DomainError> {
        validation::positive(id.into(), "orderId").map_err(|e| logged("delete_order", e))?;
        self.orders.delete(id).map_err(|e| logged("delete_order", e))
    }

    fn ensure_customer(&self, customer_id: i32) -> Result<(), DomainError> {
        match self.customers.find_by_id(customer_id)? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(Entity::Customer, customer_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use bigdecimal::BigDecimal;
    use chrono::Utc;

    use super::*;
    use crate::domain::catalog::{Customer, NewCustomer};
    use crate::domain::order::OrderLine;

    struct FakeCustomers {
        known: Vec<i32>,
        fail: bool,
    }

    impl CustomerRepository for FakeCustomers {
        fn list(&self, _limit: i64) -> Result<Vec<Customer>, DomainError> {
            Ok(vec![])
        }

        fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
            if self.fail {
                return Err(DomainError::Storage("connection refused".to_string()));
            }
            Ok(self.known.contains(&id).then(|| Customer {
                id,
                first_name: "RUTH".to_string(),
                last_name: "MARTINEZ".to_string(),
                age: 40,
            }))
        }

        fn create(&self, _customer: NewCustomer) -> Result<i32, DomainError> {
            unreachable!("not used by order use cases")
        }

        fn delete(&self, _id: i32) -> Result<(), DomainError> {
            unreachable!("not used by order use cases")
        }
    }

    #[derive(Default)]
    struct FakeOrders {
        placed: Mutex<Vec<(i32, Vec<OrderLineInput>)>>,
        customer_orders: Vec<Order>,
    }

    impl OrderRepository for FakeOrders {
        fn add_order(
            &self,
            customer_id: i32,
            lines: Vec<OrderLineInput>,
            cancellation: &Cancellation,
        ) -> Result<Order, DomainError> {
            cancellation.check()?;
            self.placed
                .lock()
                .expect("lock poisoned")
                .push((customer_id, lines.clone()));
            Ok(order(1, lines.len()))
        }

        fn find_by_id(&self, id: i32) -> Result<Order, DomainError> {
            Err(DomainError::not_found(Entity::Order, id))
        }

        fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Order>, DomainError> {
            if self.customer_orders.is_empty() {
                return Err(DomainError::not_found(Entity::CustomerOrders, customer_id));
            }
            Ok(self.customer_orders.clone())
        }

        fn delete(&self, _id: i32) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn order(id: i32, line_count: usize) -> Order {
        Order {
            id,
            date: Utc::now(),
            net_amount: BigDecimal::from(0),
            tax: BigDecimal::from(0),
            total_amount: BigDecimal::from(0),
            lines: (0..line_count)
                .map(|i| OrderLine {
                    product_id: i as i32 + 1,
                    title: "T".to_string(),
                    price: BigDecimal::from(0),
                    quantity: 1,
                })
                .collect(),
        }
    }

    fn service(known: Vec<i32>) -> OrderService<FakeOrders, FakeCustomers> {
        OrderService::new(
            FakeOrders::default(),
            FakeCustomers {
                known,
                fail: false,
            },
        )
    }

    fn line(product_id: i32, quantity: i32) -> OrderLineInput {
        OrderLineInput {
            product_id,
            quantity,
        }
    }

    #[test]
    fn add_order_delegates_for_known_customer() {
        let svc = service(vec![10]);

        let placed = svc
            .add_order(10, vec![line(1, 2), line(2, 1)], &Cancellation::new())
            .expect("add_order failed");

        assert_eq!(placed.lines.len(), 2);
        let calls = svc.orders.placed.lock().expect("lock poisoned");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 10);
    }

    #[test]
    fn add_order_rejects_unknown_customer_before_touching_orders() {
        let svc = service(vec![]);

        let err = svc.add_order(10, vec![line(1, 1)], &Cancellation::new()).unwrap_err();

        assert_eq!(err, DomainError::not_found(Entity::Customer, 10));
        assert!(svc.orders.placed.lock().expect("lock poisoned").is_empty());
    }

    #[test]
    fn add_order_validates_input() {
        let svc = service(vec![10]);

        assert!(matches!(
            svc.add_order(10, vec![], &Cancellation::new()),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            svc.add_order(0, vec![line(1, 1)], &Cancellation::new()),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            svc.add_order(10, vec![line(1, -2)], &Cancellation::new()),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            svc.add_order(10, vec![line(3, 1), line(3, 1)], &Cancellation::new()),
            Err(DomainError::Validation(_))
        ));
        assert!(svc.orders.placed.lock().expect("lock poisoned").is_empty());
    }

    #[test]
    fn add_order_passes_storage_failures_through() {
        let svc = OrderService::new(
            FakeOrders::default(),
            FakeCustomers {
                known: vec![10],
                fail: true,
            },
        );

        assert!(matches!(
            svc.add_order(10, vec![line(1, 1)], &Cancellation::new()),
            Err(DomainError::Storage(_))
        ));
    }

    #[test]
    fn add_order_hands_cancellation_to_repository() {
        let svc = service(vec![10]);
        let cancellation = Cancellation::new();
        cancellation.cancel();

        let err = svc.add_order(10, vec![line(1, 1)], &cancellation).unwrap_err();

        assert_eq!(err, DomainError::Cancelled);
        assert!(svc.orders.placed.lock().expect("lock poisoned").is_empty());
    }

    #[test]
    fn get_customer_orders_checks_customer_first() {
        let svc = service(vec![]);
        assert_eq!(
            svc.get_customer_orders(5).unwrap_err(),
            DomainError::not_found(Entity::Customer, 5)
        );

        let svc = service(vec![5]);
        assert_eq!(
            svc.get_customer_orders(5).unwrap_err(),
            DomainError::not_found(Entity::CustomerOrders, 5)
        );
    }

    #[test]
    fn get_customer_orders_returns_repository_orders() {
        let svc = OrderService::new(
            FakeOrders {
                customer_orders: vec![order(1, 2), order(2, 3)],
                ..FakeOrders::default()
            },
            FakeCustomers {
                known: vec![5],
                fail: false,
            },
        );

        let orders = svc.get_customer_orders(5).expect("get failed");
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].lines.len(), 3);
    }

    #[test]
    fn get_order_rejects_non_positive_id() {
        let svc = service(vec![]);
        assert_eq!(
            svc.get_order(0).unwrap_err(),
            DomainError::Validation("orderId must be > 0".to_string())
        );
        assert_eq!(
            svc.get_order(3).unwrap_err(),
            DomainError::not_found(Entity::Order, 3)
        );
    }
}
