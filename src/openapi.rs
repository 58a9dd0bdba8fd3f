use utoipa::OpenApi;

use crate::handlers::{customers, orders, products};

#[derive(OpenApi)]
#[openapi(
    paths(
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::delete_customer,
        customers::get_customer_orders,
        products::list_products,
        products::get_product,
        products::create_product,
        products::delete_product,
        orders::create_order,
        orders::get_order,
        orders::delete_order,
    ),
    components(schemas(
        customers::CreateCustomerRequest,
        customers::CustomerResponse,
        products::CreateProductRequest,
        products::ProductResponse,
        orders::CreateOrderRequest,
        orders::CreateOrderLineRequest,
        orders::OrderResponse,
        orders::OrderLineResponse,
    )),
    tags(
        (name = "customers", description = "Customer accounts and their orders"),
        (name = "products", description = "Catalog and stock on hand"),
        (name = "orders", description = "Order placement and lookup"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_order_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/orders"));
        assert!(doc.paths.paths.contains_key("/orders/{id}"));
        assert!(doc.paths.paths.contains_key("/customers/{id}/orders"));
    }
}
