// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{CustomerRepository, DashboardRepository, InventoryRepository, OrderRepository},
    services::{
        chat_service::{ChatConfig, ChatService},
        customer_service::CustomerService,
        dashboard_service::DashboardService,
        inventory_service::InventoryService,
        order_service::OrderService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub customer_service: CustomerService,
    pub inventory_service: InventoryService,
    pub order_service: OrderService,
    pub dashboard_service: DashboardService,
    pub chat_service: ChatService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let customer_service = CustomerService::new(CustomerRepository::new(db_pool.clone()));
        let inventory_service = InventoryService::new(InventoryRepository::new(db_pool.clone()));
        let order_service = OrderService::new(OrderRepository::new(db_pool.clone()));
        let dashboard_service = DashboardService::new(DashboardRepository::new(db_pool.clone()));

        // Sem OPENAI_API_KEY o chat opera só com as respostas fixas.
        let chat_config = ChatConfig::from_env();
        if chat_config.api_key.is_none() {
            tracing::warn!(
                "OPENAI_API_KEY ausente: o chat vai responder apenas com o fallback fixo."
            );
        }
        let chat_service = ChatService::new(chat_config)?;

        Ok(Self {
            db_pool,
            customer_service,
            inventory_service,
            order_service,
            dashboard_service,
            chat_service,
        })
    }
}
