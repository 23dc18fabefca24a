pub mod chat_service;
pub mod customer_service;
pub mod dashboard_service;
pub mod inventory_service;
pub mod order_service;
