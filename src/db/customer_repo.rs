// src/db/customer_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::customer::{Customer, CustomerStatus},
};

const CUSTOMER_COLUMNS: &str = r#"
    id, name, email, phone, company,
    total_orders, total_spent, last_order,
    status, created_at, updated_at
"#;

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista todos os clientes, mais recentes primeiro.
    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY created_at DESC"
        ))
        .fetch_all(executor)
        .await?;

        Ok(customers)
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(AppError::NotFound("Customer"))?;

        Ok(customer)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        email: &str,
        phone: &str,
        company: &str,
        status: CustomerStatus,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (name, email, phone, company, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(company)
        .bind(status)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            // Tratamento de erro de chave duplicada
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "Email '{email}' is already in use."
                    ));
                }
            }
            e.into()
        })?;

        Ok(customer)
    }

    /// Atualização parcial com campos enumerados explicitamente.
    /// Campos em None preservam o valor atual (COALESCE).
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        company: Option<&str>,
        status: Option<CustomerStatus>,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            r#"
            UPDATE customers
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                company = COALESCE($5, company),
                status = COALESCE($6, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(company)
        .bind(status)
        .fetch_optional(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::UniqueConstraintViolation(format!(
                        "Email '{}' is already in use.",
                        email.unwrap_or("?")
                    ));
                }
            }
            e.into()
        })?
        .ok_or(AppError::NotFound("Customer"))?;

        Ok(customer)
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer"));
        }

        Ok(())
    }
}
