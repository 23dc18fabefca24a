// src/handlers/orders.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::order::{Order, OrderDetail, OrderItem, OrderStatus},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub customer_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Ravi Sharma")]
    pub customer_name: String,

    #[schema(example = "2024-02-01")]
    pub order_date: NaiveDate,

    #[schema(example = "pending")]
    pub status: Option<OrderStatus>,

    #[schema(example = 1499.00)]
    pub total: Decimal,

    #[validate(range(min = 0, message = "items count cannot be negative"))]
    #[schema(example = 3)]
    pub items_count: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub customer_id: Option<Uuid>,

    #[validate(length(min = 1, message = "required"))]
    pub customer_name: Option<String>,

    pub order_date: Option<NaiveDate>,
    pub status: Option<OrderStatus>,
    pub total: Option<Decimal>,

    #[validate(range(min = 0, message = "items count cannot be negative"))]
    pub items_count: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderItemPayload {
    pub inventory_id: Uuid,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Wireless Mouse")]
    pub product_name: String,

    #[validate(range(min = 1, message = "quantity must be positive"))]
    #[schema(example = 2)]
    pub quantity: i32,

    #[schema(example = 299.90)]
    pub price: Decimal,
}

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "Lista de pedidos, mais recentes primeiro", body = Vec<Order>)
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let orders = app_state.order_service.list(&app_state.db_pool).await?;

    Ok((StatusCode::OK, Json(orders)))
}

// GET /api/orders/status/{status}
#[utoipa::path(
    get,
    path = "/api/orders/status/{status}",
    tag = "Orders",
    responses(
        (status = 200, description = "Pedidos no estado informado", body = Vec<Order>)
    ),
    params(
        ("status" = OrderStatus, Path, description = "Estado do ciclo de vida")
    )
)]
pub async fn list_orders_by_status(
    State(app_state): State<AppState>,
    Path(status): Path<OrderStatus>,
) -> Result<impl IntoResponse, AppError> {
    let orders = app_state
        .order_service
        .list_by_status(&app_state.db_pool, status)
        .await?;

    Ok((StatusCode::OK, Json(orders)))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    responses(
        (status = 200, description = "Pedido encontrado", body = Order),
        (status = 404, description = "Pedido não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    )
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let order = app_state
        .order_service
        .get_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

// GET /api/orders/{id}/items
#[utoipa::path(
    get,
    path = "/api/orders/{id}/items",
    tag = "Orders",
    responses(
        (status = 200, description = "Pedido com suas linhas", body = OrderDetail),
        (status = 404, description = "Pedido não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    )
)]
pub async fn get_order_detail(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = app_state
        .order_service
        .get_detail(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Pedido criado", body = Order),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_order(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .order_service
        .create(
            &app_state.db_pool,
            payload.customer_id,
            &payload.customer_name,
            payload.order_date,
            payload.status,
            payload.total,
            payload.items_count,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

// POST /api/orders/{id}/items
#[utoipa::path(
    post,
    path = "/api/orders/{id}/items",
    tag = "Orders",
    request_body = AddOrderItemPayload,
    responses(
        (status = 201, description = "Linha adicionada ao pedido", body = OrderItem),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pedido não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    )
)]
pub async fn add_order_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddOrderItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .order_service
        .add_item(
            &app_state.db_pool,
            id,
            payload.inventory_id,
            &payload.product_name,
            payload.quantity,
            payload.price,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    request_body = UpdateOrderPayload,
    responses(
        (status = 200, description = "Pedido atualizado", body = Order),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Pedido não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    )
)]
pub async fn update_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let order = app_state
        .order_service
        .update(
            &app_state.db_pool,
            id,
            payload.customer_id,
            payload.customer_name.as_deref(),
            payload.order_date,
            payload.status,
            payload.total,
            payload.items_count,
        )
        .await?;

    Ok((StatusCode::OK, Json(order)))
}

// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    responses(
        (status = 204, description = "Pedido removido"),
        (status = 404, description = "Pedido não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do pedido")
    )
)]
pub async fn delete_order(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .order_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_create_payload_passes_validation() {
        let payload: CreateOrderPayload = serde_json::from_value(json!({
            "customerId": "550e8400-e29b-41d4-a716-446655440000",
            "customerName": "Ravi Sharma",
            "orderDate": "2024-02-01",
            "status": "pending",
            "total": 1499.00,
            "itemsCount": 3
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.status, Some(OrderStatus::Pending));
    }

    #[test]
    fn create_payload_rejects_negative_items_count() {
        let payload: CreateOrderPayload = serde_json::from_value(json!({
            "customerId": "550e8400-e29b-41d4-a716-446655440000",
            "customerName": "Ravi Sharma",
            "orderDate": "2024-02-01",
            "total": 1499.00,
            "itemsCount": -1
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("items_count"));
    }

    #[test]
    fn update_payload_accepts_a_new_customer_id() {
        let payload: UpdateOrderPayload = serde_json::from_value(json!({
            "customerId": "550e8400-e29b-41d4-a716-446655440000",
            "customerName": "New Owner"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert!(payload.customer_id.is_some());
        assert!(payload.order_date.is_none());
    }

    #[test]
    fn add_item_payload_rejects_non_positive_quantity() {
        let payload: AddOrderItemPayload = serde_json::from_value(json!({
            "inventoryId": "550e8400-e29b-41d4-a716-446655440000",
            "productName": "Wireless Mouse",
            "quantity": 0,
            "price": 299.90
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }
}
