// src/db/order_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::order::{Order, OrderItem, OrderStatus},
};

const ORDER_COLUMNS: &str = r#"
    id, customer_id, customer_name, order_date,
    status, total, items_count,
    created_at, updated_at
"#;

const ORDER_ITEM_COLUMNS: &str = r#"
    id, order_id, inventory_id, product_name,
    quantity, price, created_at
"#;

#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista todos os pedidos, mais recentes primeiro.
    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC"
        ))
        .fetch_all(executor)
        .await?;

        Ok(orders)
    }

    pub async fn list_by_status<'e, E>(
        &self,
        executor: E,
        status: OrderStatus,
    ) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let orders = sqlx::query_as::<_, Order>(&format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE status = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(status)
        .fetch_all(executor)
        .await?;

        Ok(orders)
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

        Ok(order)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
        customer_name: &str,
        order_date: NaiveDate,
        status: OrderStatus,
        total: Decimal,
        items_count: i32,
    ) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            INSERT INTO orders (customer_id, customer_name, order_date, status, total, items_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(customer_id)
        .bind(customer_name)
        .bind(order_date)
        .bind(status)
        .bind(total)
        .bind(items_count)
        .fetch_one(executor)
        .await?;

        Ok(order)
    }

    /// Atualização parcial com campos enumerados explicitamente.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        customer_id: Option<Uuid>,
        customer_name: Option<&str>,
        order_date: Option<NaiveDate>,
        status: Option<OrderStatus>,
        total: Option<Decimal>,
        items_count: Option<i32>,
    ) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let order = sqlx::query_as::<_, Order>(&format!(
            r#"
            UPDATE orders
            SET customer_id = COALESCE($2, customer_id),
                customer_name = COALESCE($3, customer_name),
                order_date = COALESCE($4, order_date),
                status = COALESCE($5, status),
                total = COALESCE($6, total),
                items_count = COALESCE($7, items_count),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(customer_id)
        .bind(customer_name)
        .bind(order_date)
        .bind(status)
        .bind(total)
        .bind(items_count)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Order"))?;

        Ok(order)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Order"));
        }

        Ok(())
    }

    // --- Itens do pedido ---

    pub async fn list_items<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
    ) -> Result<Vec<OrderItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let items = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            SELECT {ORDER_ITEM_COLUMNS}
            FROM order_items
            WHERE order_id = $1
            ORDER BY created_at ASC
            "#
        ))
        .bind(order_id)
        .fetch_all(executor)
        .await?;

        Ok(items)
    }

    pub async fn create_item<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
        inventory_id: Uuid,
        product_name: &str,
        quantity: i32,
        price: Decimal,
    ) -> Result<OrderItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, OrderItem>(&format!(
            r#"
            INSERT INTO order_items (order_id, inventory_id, product_name, quantity, price)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ORDER_ITEM_COLUMNS}
            "#
        ))
        .bind(order_id)
        .bind(inventory_id)
        .bind(product_name)
        .bind(quantity)
        .bind(price)
        .fetch_one(executor)
        .await?;

        Ok(item)
    }
}
