// src/handlers/inventory.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::inventory::InventoryItem,
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryItemPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Wireless Mouse")]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "WM-0042")]
    pub sku: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Electronics")]
    pub category: String,

    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    #[schema(example = 25)]
    pub quantity: i32,

    #[validate(range(min = 0, message = "minimum quantity cannot be negative"))]
    #[schema(example = 5)]
    pub min_quantity: i32,

    #[schema(example = 299.90)]
    pub price: Decimal,
}

// O status nunca é aceito do cliente: o serviço deriva de quantity/min.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryItemPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub sku: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub category: Option<String>,

    #[validate(range(min = 0, message = "quantity cannot be negative"))]
    pub quantity: Option<i32>,

    #[validate(range(min = 0, message = "minimum quantity cannot be negative"))]
    pub min_quantity: Option<i32>,

    pub price: Option<Decimal>,
}

// GET /api/inventory
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    responses(
        (status = 200, description = "Lista de produtos, mais recentes primeiro", body = Vec<InventoryItem>)
    )
)]
pub async fn list_items(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state
        .inventory_service
        .list(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

// GET /api/inventory/low-stock
#[utoipa::path(
    get,
    path = "/api/inventory/low-stock",
    tag = "Inventory",
    responses(
        (status = 200, description = "Produtos em low-stock ou out-of-stock, mais críticos primeiro", body = Vec<InventoryItem>)
    )
)]
pub async fn list_low_stock(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = app_state
        .inventory_service
        .list_low_stock(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

// GET /api/inventory/{id}
#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    responses(
        (status = 200, description = "Produto encontrado", body = InventoryItem),
        (status = 404, description = "Produto não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn get_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let item = app_state
        .inventory_service
        .get_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

// POST /api/inventory
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = "Inventory",
    request_body = CreateInventoryItemPayload,
    responses(
        (status = 201, description = "Produto criado", body = InventoryItem),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "SKU já cadastrado")
    )
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateInventoryItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .inventory_service
        .create(
            &app_state.db_pool,
            &payload.name,
            &payload.sku,
            &payload.category,
            payload.quantity,
            payload.min_quantity,
            payload.price,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /api/inventory/{id}
#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    request_body = UpdateInventoryItemPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = InventoryItem),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Produto não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInventoryItemPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let item = app_state
        .inventory_service
        .update(
            &app_state.db_pool,
            id,
            payload.name.as_deref(),
            payload.sku.as_deref(),
            payload.category.as_deref(),
            payload.quantity,
            payload.min_quantity,
            payload.price,
        )
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

// DELETE /api/inventory/{id}
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do produto")
    )
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .inventory_service
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
        let payload: CreateInventoryItemPayload = serde_json::from_value(json!({
            "name": "Wireless Mouse",
            "sku": "WM-0042",
            "category": "Electronics",
            "quantity": 25,
            "minQuantity": 5,
            "price": 299.90
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_payload_rejects_negative_quantity() {
        let payload: CreateInventoryItemPayload = serde_json::from_value(json!({
            "name": "Wireless Mouse",
            "sku": "WM-0042",
            "category": "Electronics",
            "quantity": -1,
            "minQuantity": 5,
            "price": 299.90
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn update_payload_rejects_negative_minimum() {
        let payload: UpdateInventoryItemPayload = serde_json::from_value(json!({
            "minQuantity": -3
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("min_quantity"));
    }

    #[test]
    fn update_payload_has_no_status_field() {
        // status é derivado no serviço; se vier no JSON, é ignorado.
        let payload: UpdateInventoryItemPayload = serde_json::from_value(json!({
            "quantity": 0,
            "status": "in-stock"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.quantity, Some(0));
    }
}
