use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::cancel::Cancellation;
use crate::domain::order::{Order, OrderLineInput};
use crate::errors::AppError;
use crate::OrderUseCases;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderLineRequest {
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub lines: Vec<CreateOrderLineRequest>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderLineResponse {
    pub product_id: i32,
    pub title: String,
    /// Unit price at the time the order was placed, e.g. "9.99"
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub date: String,
    pub net_amount: String,
    pub tax: String,
    pub total_amount: String,
    pub lines: Vec<OrderLineResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id,
            date: order.date.to_rfc3339(),
            net_amount: order.net_amount.to_string(),
            tax: order.tax.to_string(),
            total_amount: order.total_amount.to_string(),
            lines: order
                .lines
                .into_iter()
                .map(|l| OrderLineResponse {
                    product_id: l.product_id,
                    title: l.title,
                    price: l.price.to_string(),
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Places an order. Stock is checked and decremented, prices are taken from
/// the catalog and the order is stored, all in one database transaction.
/// If the client disconnects before the transaction commits, it is rolled
/// back.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Invalid customer id or order lines"),
        (status = 404, description = "Customer or product not found"),
        (status = 409, description = "Product out of inventory"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    orders: web::Data<OrderUseCases>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let lines: Vec<OrderLineInput> = body
        .lines
        .into_iter()
        .map(|l| OrderLineInput {
            product_id: l.product_id,
            quantity: l.quantity,
        })
        .collect();

    // Dropping this handler's future (client gone) cancels the transaction.
    let cancellation = Cancellation::new();
    let guard = cancellation.cancel_on_drop();

    let customer_id = body.customer_id;
    let result = web::block(move || orders.add_order(customer_id, lines, &cancellation))
        .await
        .map_err(|e| AppError::Internal(e.to_string()));
    guard.disarm();
    let order = result??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
///
/// Returns the order together with its lines.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Invalid order id"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    orders: web::Data<OrderUseCases>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || orders.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// DELETE /orders/{id}
///
/// Deletes the order and its lines. Stock is not returned to inventory.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Invalid order id"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    orders: web::Data<OrderUseCases>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    web::block(move || orders.delete_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}
