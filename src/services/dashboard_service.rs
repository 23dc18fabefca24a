// src/services/dashboard_service.rs

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::{Executor, Postgres};

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{
        CustomerStatRow, DashboardSummary, InventoryStatRow, OrderSalesRow, SalesChartEntry,
    },
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    /// Resumo geral: busca o snapshot e reduz em memória.
    ///
    /// As três leituras são sequenciais e NÃO transacionais: uma escrita
    /// entre elas pode misturar dois instantes no mesmo resumo. Janela
    /// aceita — ver DESIGN.md. Qualquer leitura que falhe aborta o todo.
    pub async fn get_summary<'e, E>(&self, executor: E) -> Result<DashboardSummary, AppError>
    where
        E: Executor<'e, Database = Postgres> + Copy,
    {
        let customers = self.repo.list_customer_stats(executor).await?;

        // Pedidos fazem parte do snapshot mas ainda não alimentam card
        // nenhum: os totais vêm dos contadores desnormalizados do cliente.
        let _orders = self.repo.list_order_stats(executor).await?;

        let inventory = self.repo.list_inventory_stats(executor).await?;

        Ok(summarize(&customers, &inventory))
    }

    /// Série mensal de vendas do ano corrente.
    pub async fn get_sales_chart<'e, E>(&self, executor: E) -> Result<Vec<SalesChartEntry>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let year_start = NaiveDate::from_ymd_opt(Utc::now().year(), 1, 1)
            .ok_or_else(|| anyhow::anyhow!("data inicial do ano inválida"))?;

        let rows = self.repo.list_sales_since(executor, year_start).await?;

        Ok(bucketize_by_month(&rows))
    }
}

/// Redução pura do snapshot para os cards do dashboard.
/// Numéricos nulos valem zero; nenhum campo é rejeitado.
fn summarize(customers: &[CustomerStatRow], inventory: &[InventoryStatRow]) -> DashboardSummary {
    let total_revenue: Decimal = customers
        .iter()
        .map(|c| c.total_spent.unwrap_or(Decimal::ZERO))
        .sum();

    let total_orders: i64 = customers
        .iter()
        .map(|c| i64::from(c.total_orders.unwrap_or(0)))
        .sum();

    let active_customers = customers
        .iter()
        .filter(|c| c.total_orders.unwrap_or(0) > 0)
        .count() as i64;

    let low_stock_items = inventory
        .iter()
        .filter(|i| {
            matches!(
                i.status,
                crate::models::inventory::InventoryStatus::LowStock
                    | crate::models::inventory::InventoryStatus::OutOfStock
            )
        })
        .count() as i64;

    let total_inventory_value: Decimal = inventory
        .iter()
        .map(|i| Decimal::from(i.quantity.unwrap_or(0)) * i.price.unwrap_or(Decimal::ZERO))
        .sum();

    DashboardSummary {
        total_revenue,
        total_orders,
        active_customers,
        inventory_items: inventory.len() as i64,
        low_stock_items,
        total_inventory_value,
    }
}

/// Agrupa pedidos (já ordenados por data ascendente) por mês calendário.
///
/// A chave é a abreviação inglesa de 3 letras. Os buckets saem na ordem da
/// primeira ocorrência de cada mês; meses sem pedido não aparecem. O total
/// do mês é arredondado para inteiro só na saída (meio-ponto afasta do zero).
fn bucketize_by_month(rows: &[OrderSalesRow]) -> Vec<SalesChartEntry> {
    // No máximo 12 entradas, busca linear basta.
    let mut buckets: Vec<(String, Decimal, i64)> = Vec::new();

    for row in rows {
        let label = row.order_date.format("%b").to_string();
        let total = row.total.unwrap_or(Decimal::ZERO);

        match buckets.iter_mut().find(|(month, _, _)| *month == label) {
            Some((_, sales, orders)) => {
                *sales += total;
                *orders += 1;
            }
            None => buckets.push((label, total, 1)),
        }
    }

    buckets
        .into_iter()
        .map(|(month, sales, orders)| SalesChartEntry {
            month,
            sales: sales
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(0),
            orders,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::InventoryStatus;

    fn customer(total_orders: i32, total_spent: i64) -> CustomerStatRow {
        CustomerStatRow {
            total_orders: Some(total_orders),
            total_spent: Some(Decimal::from(total_spent)),
        }
    }

    fn stock(quantity: i32, price: i64, status: InventoryStatus) -> InventoryStatRow {
        InventoryStatRow {
            quantity: Some(quantity),
            price: Some(Decimal::from(price)),
            status,
        }
    }

    fn sale(date: &str, total: i64) -> OrderSalesRow {
        OrderSalesRow {
            order_date: date.parse().unwrap(),
            total: Some(Decimal::from(total)),
        }
    }

    #[test]
    fn summary_of_empty_snapshot_is_all_zeroes() {
        let summary = summarize(&[], &[]);

        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.active_customers, 0);
        assert_eq!(summary.inventory_items, 0);
        assert_eq!(summary.low_stock_items, 0);
        assert_eq!(summary.total_inventory_value, Decimal::ZERO);
    }

    #[test]
    fn summary_counts_only_customers_with_orders_as_active() {
        let customers = vec![customer(3, 150), customer(0, 0)];
        let summary = summarize(&customers, &[]);

        assert_eq!(summary.active_customers, 1);
        assert_eq!(summary.total_revenue, Decimal::from(150));
        assert_eq!(summary.total_orders, 3);
    }

    #[test]
    fn summary_treats_null_numerics_as_zero() {
        let customers = vec![CustomerStatRow {
            total_orders: None,
            total_spent: None,
        }];
        let inventory = vec![InventoryStatRow {
            quantity: None,
            price: None,
            status: InventoryStatus::InStock,
        }];

        let summary = summarize(&customers, &inventory);

        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.active_customers, 0);
        assert_eq!(summary.inventory_items, 1);
        assert_eq!(summary.total_inventory_value, Decimal::ZERO);
    }

    #[test]
    fn summary_inventory_value_is_order_independent() {
        let mut inventory = vec![
            stock(10, 5, InventoryStatus::InStock),
            stock(2, 100, InventoryStatus::LowStock),
            stock(0, 7, InventoryStatus::OutOfStock),
        ];
        let forward = summarize(&[], &inventory);
        inventory.reverse();
        let backward = summarize(&[], &inventory);

        assert_eq!(forward.total_inventory_value, Decimal::from(250));
        assert_eq!(forward, backward);
        assert_eq!(forward.low_stock_items, 2);
        assert_eq!(forward.inventory_items, 3);
    }

    #[test]
    fn summary_is_idempotent_over_the_same_snapshot() {
        let customers = vec![customer(2, 80), customer(5, 410)];
        let inventory = vec![stock(3, 20, InventoryStatus::InStock)];

        assert_eq!(
            summarize(&customers, &inventory),
            summarize(&customers, &inventory)
        );
    }

    #[test]
    fn buckets_group_by_month_in_chronological_order() {
        let rows = vec![
            sale("2024-01-05", 100),
            sale("2024-01-20", 50),
            sale("2024-02-01", 30),
        ];

        let buckets = bucketize_by_month(&rows);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].month, "Jan");
        assert_eq!(buckets[0].sales, 150);
        assert_eq!(buckets[0].orders, 2);
        assert_eq!(buckets[1].month, "Feb");
        assert_eq!(buckets[1].sales, 30);
        assert_eq!(buckets[1].orders, 1);
    }

    #[test]
    fn bucket_order_counts_sum_to_input_size() {
        let rows = vec![
            sale("2024-03-01", 10),
            sale("2024-03-15", 10),
            sale("2024-05-02", 10),
            sale("2024-05-09", 10),
            sale("2024-11-30", 10),
        ];

        let buckets = bucketize_by_month(&rows);

        assert!(buckets.len() <= 12);
        let total: i64 = buckets.iter().map(|b| b.orders).sum();
        assert_eq!(total, rows.len() as i64);
    }

    #[test]
    fn months_without_orders_are_absent() {
        let rows = vec![sale("2024-01-10", 5), sale("2024-12-25", 5)];

        let buckets = bucketize_by_month(&rows);

        let labels: Vec<&str> = buckets.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Dec"]);
    }

    #[test]
    fn sales_are_rounded_half_away_from_zero_at_output() {
        let rows = vec![OrderSalesRow {
            order_date: "2024-04-01".parse().unwrap(),
            total: Some(Decimal::new(1005, 1)), // 100.5
        }];

        let buckets = bucketize_by_month(&rows);

        assert_eq!(buckets[0].sales, 101);
    }

    #[test]
    fn null_order_totals_count_as_zero_sales_but_still_count_orders() {
        let rows = vec![
            OrderSalesRow {
                order_date: "2024-06-03".parse().unwrap(),
                total: None,
            },
            sale("2024-06-04", 40),
        ];

        let buckets = bucketize_by_month(&rows);

        assert_eq!(buckets[0].sales, 40);
        assert_eq!(buckets[0].orders, 2);
    }

    #[test]
    fn empty_input_produces_no_buckets() {
        assert!(bucketize_by_month(&[]).is_empty());
    }
}
