// src/services/order_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::OrderRepository,
    models::order::{Order, OrderDetail, OrderItem, OrderStatus},
};

#[derive(Clone)]
pub struct OrderService {
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(repo: OrderRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn list_by_status<'e, E>(
        &self,
        executor: E,
        status: OrderStatus,
    ) -> Result<Vec<Order>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_by_status(executor, status).await
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_by_id(executor, id).await
    }

    /// Pedido + itens em duas leituras: o pedido primeiro (404 se não
    /// existir), depois as linhas.
    pub async fn get_detail<'e, E>(&self, executor: E, id: Uuid) -> Result<OrderDetail, AppError>
    where
        E: Executor<'e, Database = Postgres> + Copy,
    {
        let order = self.repo.get_by_id(executor, id).await?;
        let items = self.repo.list_items(executor, id).await?;

        Ok(OrderDetail { order, items })
    }

    /// Criação de pedido. Os contadores desnormalizados do cliente
    /// (total_orders/total_spent) NÃO são tocados aqui — ver DESIGN.md.
    pub async fn create<'e, E>(
        &self,
        executor: E,
        customer_id: Uuid,
        customer_name: &str,
        order_date: NaiveDate,
        status: Option<OrderStatus>,
        total: Decimal,
        items_count: i32,
    ) -> Result<Order, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let status = status.unwrap_or(OrderStatus::Pending);

        self.repo
            .create(executor, customer_id, customer_name, order_date, status, total, items_count)
            .await
    }

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
        self.repo
            .update(
                executor,
                id,
                customer_id,
                customer_name,
                order_date,
                status,
                total,
                items_count,
            )
            .await
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }

    pub async fn add_item<'e, E>(
        &self,
        executor: E,
        order_id: Uuid,
        inventory_id: Uuid,
        product_name: &str,
        quantity: i32,
        price: Decimal,
    ) -> Result<OrderItem, AppError>
    where
        E: Executor<'e, Database = Postgres> + Copy,
    {
        // Garante 404 limpo em vez de violação de FK.
        let order = self.repo.get_by_id(executor, order_id).await?;

        self.repo
            .create_item(executor, order.id, inventory_id, product_name, quantity, price)
            .await
    }
}
