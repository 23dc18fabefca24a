// src/models/inventory.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Mapeia o CREATE TYPE inventory_status do banco
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, ToSchema)]
#[sqlx(type_name = "inventory_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum InventoryStatus {
    InStock,
    LowStock,
    OutOfStock,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub sku: String,
    pub category: String,

    pub quantity: i32,
    pub min_quantity: i32,
    pub price: Decimal,

    // Derivado de quantity x min_quantity no serviço, nunca aceito do cliente.
    pub status: InventoryStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
