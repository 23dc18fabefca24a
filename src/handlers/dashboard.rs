// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{DashboardSummary, SalesChartEntry},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo do snapshot atual (receita, pedidos, clientes, estoque)", body = DashboardSummary),
        (status = 500, description = "Falha de leitura no banco aborta o resumo inteiro")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .dashboard_service
        .get_summary(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/sales-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/sales-chart",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Vendas do ano corrente agrupadas por mês", body = Vec<SalesChartEntry>)
    )
)]
pub async fn get_sales_chart(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let chart = app_state
        .dashboard_service
        .get_sales_chart(&app_state.db_pool)
        .await?;

    Ok((StatusCode::OK, Json(chart)))
}
