// src/services/customer_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CustomerRepository,
    models::customer::{Customer, CustomerStatus},
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Customer>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_by_id(executor, id).await
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        name: &str,
        email: &str,
        phone: &str,
        company: &str,
        status: Option<CustomerStatus>,
    ) -> Result<Customer, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        // Clientes novos entram como 'active', salvo pedido explícito.
        let status = status.unwrap_or(CustomerStatus::Active);

        self.repo
            .create(executor, name, email, phone, company, status)
            .await
    }

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
        self.repo
            .update(executor, id, name, email, phone, company, status)
            .await
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }
}
