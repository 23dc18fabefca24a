// src/db/inventory_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::inventory::{InventoryItem, InventoryStatus},
};

const INVENTORY_COLUMNS: &str = r#"
    id, name, sku, category,
    quantity, min_quantity, price,
    status, created_at, updated_at
"#;

#[derive(Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista todos os produtos, mais recentes primeiro.
    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM inventory ORDER BY created_at DESC"
        ))
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    /// Produtos com estoque baixo ou zerado, mais críticos primeiro.
    pub async fn list_low_stock<'e, E>(&self, executor: E) -> Result<Vec<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            SELECT {INVENTORY_COLUMNS}
            FROM inventory
            WHERE status IN ('low-stock', 'out-of-stock')
            ORDER BY quantity ASC
            "#
        ))
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<InventoryItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            "SELECT {INVENTORY_COLUMNS} FROM inventory WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Inventory item"))?;

        Ok(item)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        sku: &str,
        category: &str,
        quantity: i32,
        min_quantity: i32,
        price: Decimal,
        status: InventoryStatus,
    ) -> Result<InventoryItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            INSERT INTO inventory (name, sku, category, quantity, min_quantity, price, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {INVENTORY_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(sku)
        .bind(category)
        .bind(quantity)
        .bind(min_quantity)
        .bind(price)
        .bind(status)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "SKU '{sku}' is already registered."
                    ));
                }
            }
            e.into()
        })?;

        Ok(item)
    }

    /// Atualização parcial; o status recalculado vem do serviço.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        name: Option<&str>,
        sku: Option<&str>,
        category: Option<&str>,
        quantity: i32,
        min_quantity: i32,
        price: Option<Decimal>,
        status: InventoryStatus,
    ) -> Result<InventoryItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, InventoryItem>(&format!(
            r#"
            UPDATE inventory
            SET name = COALESCE($2, name),
                sku = COALESCE($3, sku),
                category = COALESCE($4, category),
                quantity = $5,
                min_quantity = $6,
                price = COALESCE($7, price),
                status = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {INVENTORY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(sku)
        .bind(category)
        .bind(quantity)
        .bind(min_quantity)
        .bind(price)
        .bind(status)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "SKU '{}' is already registered.",
                        sku.unwrap_or("?")
                    ));
                }
            }
            e.into()
        })?
        .ok_or(AppError::NotFound("Inventory item"))?;

        Ok(item)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM inventory WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Inventory item"));
        }

        Ok(())
    }
}
