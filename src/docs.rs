// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::get_customer,
        handlers::customers::create_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,

        // --- Inventory ---
        handlers::inventory::list_items,
        handlers::inventory::list_low_stock,
        handlers::inventory::get_item,
        handlers::inventory::create_item,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,

        // --- Orders ---
        handlers::orders::list_orders,
        handlers::orders::list_orders_by_status,
        handlers::orders::get_order,
        handlers::orders::get_order_detail,
        handlers::orders::create_order,
        handlers::orders::add_order_item,
        handlers::orders::update_order,
        handlers::orders::delete_order,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_sales_chart,

        // --- Chat ---
        handlers::chat::chat,
        handlers::chat::test_openai,
    ),
    components(
        schemas(
            // --- Customers ---
            models::customer::CustomerStatus,
            models::customer::Customer,
            handlers::customers::CreateCustomerPayload,
            handlers::customers::UpdateCustomerPayload,

            // --- Inventory ---
            models::inventory::InventoryStatus,
            models::inventory::InventoryItem,
            handlers::inventory::CreateInventoryItemPayload,
            handlers::inventory::UpdateInventoryItemPayload,

            // --- Orders ---
            models::order::OrderStatus,
            models::order::Order,
            models::order::OrderItem,
            models::order::OrderDetail,
            handlers::orders::CreateOrderPayload,
            handlers::orders::UpdateOrderPayload,
            handlers::orders::AddOrderItemPayload,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::SalesChartEntry,

            // --- Chat ---
            models::chat::ChatMessage,
            models::chat::ChatRequest,
            models::chat::ChatReply,
            models::chat::ChatConnectivityReport,
        )
    ),
    tags(
        (name = "Customers", description = "Gestão de Clientes"),
        (name = "Inventory", description = "Gestão de Estoque e Produtos"),
        (name = "Orders", description = "Gestão de Pedidos e Itens"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Chat", description = "Assistente de IA com fallback fixo")
    )
)]
pub struct ApiDoc;
