// src/handlers/customers.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::customer::{Customer, CustomerStatus},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerPayload {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    #[schema(example = "Ravi Sharma")]
    pub name: String,

    #[validate(email(message = "invalid email address"))]
    #[schema(example = "ravi@acme.in")]
    pub email: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "+91 98765 43210")]
    pub phone: String,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Acme Traders")]
    pub company: String,

    #[schema(example = "active")]
    pub status: Option<CustomerStatus>,
}

// Atualização com campos enumerados: nada de merge de objeto arbitrário.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerPayload {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "required"))]
    pub company: Option<String>,

    pub status: Option<CustomerStatus>,
}

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Lista de clientes, mais recentes primeiro", body = Vec<Customer>)
    )
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state
        .customer_service
        .list(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customers",
    responses(
        (status = 200, description = "Cliente encontrado", body = Customer),
        (status = 404, description = "Cliente não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    )
)]
pub async fn get_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let customer = app_state
        .customer_service
        .get_by_id(&app_state.db_pool, id)
        .await?;

    Ok((StatusCode::OK, Json(customer)))
}

// POST /api/customers
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body = CreateCustomerPayload,
    responses(
        (status = 201, description = "Cliente criado", body = Customer),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já cadastrado")
    )
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let customer = app_state
        .customer_service
        .create(
            &app_state.db_pool,
            &payload.name,
            &payload.email,
            &payload.phone,
            &payload.company,
            payload.status,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(customer)))
}

// PUT /api/customers/{id}
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customers",
    request_body = UpdateCustomerPayload,
    responses(
        (status = 200, description = "Cliente atualizado", body = Customer),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Cliente não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    )
)]
pub async fn update_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let customer = app_state
        .customer_service
        .update(
            &app_state.db_pool,
            id,
            payload.name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.company.as_deref(),
            payload.status,
        )
        .await?;

    Ok((StatusCode::OK, Json(customer)))
}

// DELETE /api/customers/{id}
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    responses(
        (status = 204, description = "Cliente removido"),
        (status = 404, description = "Cliente não existe")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do cliente")
    )
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .customer_service
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
        let payload: CreateCustomerPayload = serde_json::from_value(json!({
            "name": "Ravi Sharma",
            "email": "ravi@acme.in",
            "phone": "+91 98765 43210",
            "company": "Acme Traders",
            "status": "vip"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.status, Some(CustomerStatus::Vip));
    }

    #[test]
    fn create_payload_rejects_short_name_and_bad_email() {
        let payload: CreateCustomerPayload = serde_json::from_value(json!({
            "name": "R",
            "email": "not-an-email",
            "phone": "123",
            "company": "Acme"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn update_payload_rejects_invalid_email_even_when_partial() {
        let payload: UpdateCustomerPayload = serde_json::from_value(json!({
            "email": "not-an-email"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn empty_update_payload_is_valid() {
        let payload: UpdateCustomerPayload = serde_json::from_value(json!({})).unwrap();

        assert!(payload.validate().is_ok());
        assert!(payload.name.is_none());
        assert!(payload.status.is_none());
    }
}
