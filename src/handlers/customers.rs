use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::catalog::{Customer, NewCustomer};
use crate::errors::AppError;
use crate::{CustomerUseCases, OrderUseCases};

use super::orders::OrderResponse;
use super::ListParams;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            age: c.age,
        }
    }
}

/// GET /customers
#[utoipa::path(
    get,
    path = "/customers",
    params(
        ("limit" = Option<i64>, Query, description = "Items to return (default 20, max 100)"),
    ),
    responses(
        (status = 200, description = "Customers", body = [CustomerResponse]),
        (status = 400, description = "Invalid limit"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn list_customers(
    customers: web::Data<CustomerUseCases>,
    query: web::Query<ListParams>,
) -> Result<HttpResponse, AppError> {
    let limit = query.capped_limit();

    let result = web::block(move || customers.list_customers(limit))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<CustomerResponse> = result.into_iter().map(CustomerResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}

/// GET /customers/{id}
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerResponse),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    customers: web::Data<CustomerUseCases>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let customer = web::block(move || customers.get_customer(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CustomerResponse::from(customer)))
}

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created"),
        (status = 400, description = "Invalid customer fields"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    customers: web::Data<CustomerUseCases>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let new = NewCustomer {
        first_name: body.first_name,
        last_name: body.last_name,
        age: body.age,
    };

    let id = web::block(move || customers.add_customer(new))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(json!({ "id": id })))
}

/// DELETE /customers/{id}
///
/// Deleting a customer also deletes their orders.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    customers: web::Data<CustomerUseCases>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    web::block(move || customers.delete_customer(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /customers/{id}/orders
#[utoipa::path(
    get,
    path = "/customers/{id}/orders",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Orders of the customer", body = [OrderResponse]),
        (status = 404, description = "Customer not found or has no orders"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "customers"
)]
pub async fn get_customer_orders(
    orders: web::Data<OrderUseCases>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    let result = web::block(move || orders.get_customer_orders(customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let items: Vec<OrderResponse> = result.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(items))
}
