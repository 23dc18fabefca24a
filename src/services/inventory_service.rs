// src/services/inventory_service.rs

use rust_decimal::Decimal;
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::InventoryRepository,
    models::inventory::{InventoryItem, InventoryStatus},
};

#[derive(Clone)]
pub struct InventoryService {
    repo: InventoryRepository,
}

impl InventoryService {
    pub fn new(repo: InventoryRepository) -> Self {
        Self { repo }
    }

    pub async fn list<'e, E>(&self, executor: E) -> Result<Vec<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list(executor).await
    }

    pub async fn list_low_stock<'e, E>(&self, executor: E) -> Result<Vec<InventoryItem>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_low_stock(executor).await
    }

    pub async fn get_by_id<'e, E>(&self, executor: E, id: Uuid) -> Result<InventoryItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.get_by_id(executor, id).await
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
    ) -> Result<InventoryItem, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let status = derive_status(quantity, min_quantity);

        self.repo
            .create(executor, name, sku, category, quantity, min_quantity, price, status)
            .await
    }

    /// Atualização parcial. Se quantidade ou mínimo mudarem, o status é
    /// recalculado sobre os valores finais — o cliente nunca dita status.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        name: Option<&str>,
        sku: Option<&str>,
        category: Option<&str>,
        quantity: Option<i32>,
        min_quantity: Option<i32>,
        price: Option<Decimal>,
    ) -> Result<InventoryItem, AppError>
    where
        E: Executor<'e, Database = Postgres> + Copy,
    {
        let current = self.repo.get_by_id(executor, id).await?;

        let new_quantity = quantity.unwrap_or(current.quantity);
        let new_min_quantity = min_quantity.unwrap_or(current.min_quantity);
        let status = derive_status(new_quantity, new_min_quantity);

        self.repo
            .update(
                executor,
                id,
                name,
                sku,
                category,
                new_quantity,
                new_min_quantity,
                price,
                status,
            )
            .await
    }

    pub async fn delete<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete(executor, id).await
    }
}

/// Status de estoque em função da quantidade e do mínimo configurado.
fn derive_status(quantity: i32, min_quantity: i32) -> InventoryStatus {
    if quantity <= 0 {
        InventoryStatus::OutOfStock
    } else if quantity <= min_quantity {
        InventoryStatus::LowStock
    } else {
        InventoryStatus::InStock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_out_of_stock() {
        assert_eq!(derive_status(0, 5), InventoryStatus::OutOfStock);
        assert_eq!(derive_status(0, 0), InventoryStatus::OutOfStock);
    }

    #[test]
    fn quantity_at_or_below_minimum_is_low_stock() {
        assert_eq!(derive_status(3, 5), InventoryStatus::LowStock);
        assert_eq!(derive_status(5, 5), InventoryStatus::LowStock);
    }

    #[test]
    fn quantity_above_minimum_is_in_stock() {
        assert_eq!(derive_status(6, 5), InventoryStatus::InStock);
        assert_eq!(derive_status(1, 0), InventoryStatus::InStock);
    }
}
