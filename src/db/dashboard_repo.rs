// src/db/dashboard_repo.rs

use chrono::NaiveDate;
use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::dashboard::{CustomerStatRow, InventoryStatRow, OrderSalesRow, OrderStatRow},
};

/// Leituras cruas para o dashboard. Cada método é uma ida ao banco;
/// quem decide a ordem (e aceita a janela entre elas) é o serviço.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_customer_stats<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<CustomerStatRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, CustomerStatRow>(
            "SELECT total_orders, total_spent FROM customers",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    pub async fn list_order_stats<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<OrderStatRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, OrderStatRow>("SELECT total, status FROM orders")
            .fetch_all(executor)
            .await?;

        Ok(rows)
    }

    pub async fn list_inventory_stats<'e, E>(
        &self,
        executor: E,
    ) -> Result<Vec<InventoryStatRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, InventoryStatRow>(
            "SELECT quantity, price, status FROM inventory",
        )
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }

    /// Pedidos a partir de uma data, ascendente — insumo do gráfico mensal.
    pub async fn list_sales_since<'e, E>(
        &self,
        executor: E,
        since: NaiveDate,
    ) -> Result<Vec<OrderSalesRow>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let rows = sqlx::query_as::<_, OrderSalesRow>(
            r#"
            SELECT order_date, total
            FROM orders
            WHERE order_date >= $1
            ORDER BY order_date ASC
            "#,
        )
        .bind(since)
        .fetch_all(executor)
        .await?;

        Ok(rows)
    }
}
