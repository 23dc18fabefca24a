// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::inventory::InventoryStatus;
use crate::models::order::OrderStatus;

// 1. Resumo Geral (Os Cards do Topo)
#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: Decimal,       // Soma de total_spent dos clientes
    pub total_orders: i64,            // Soma do contador total_orders dos clientes
    pub active_customers: i64,        // Clientes com total_orders > 0
    pub inventory_items: i64,         // Quantidade de produtos cadastrados
    pub low_stock_items: i64,         // Produtos em low-stock ou out-of-stock
    pub total_inventory_value: Decimal, // Soma de quantity * price
}

// 2. Gráfico de Vendas (ano corrente, agrupado por mês)
#[derive(Debug, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesChartEntry {
    pub month: String, // Abreviação de 3 letras ("Jan", "Feb", ...)
    pub sales: i64,    // Total vendido no mês, arredondado para inteiro
    pub orders: i64,   // Quantidade de pedidos no mês
}

// --- Linhas cruas do snapshot (só as colunas que a redução usa) ---

// Numéricos nulos/ausentes valem zero na redução, nunca viram erro.
#[derive(Debug, FromRow)]
pub struct CustomerStatRow {
    pub total_orders: Option<i32>,
    pub total_spent: Option<Decimal>,
}

#[derive(Debug, FromRow)]
pub struct OrderStatRow {
    pub total: Option<Decimal>,
    pub status: OrderStatus,
}

#[derive(Debug, FromRow)]
pub struct InventoryStatRow {
    pub quantity: Option<i32>,
    pub price: Option<Decimal>,
    pub status: InventoryStatus,
}

#[derive(Debug, FromRow)]
pub struct OrderSalesRow {
    pub order_date: NaiveDate,
    pub total: Option<Decimal>,
}
