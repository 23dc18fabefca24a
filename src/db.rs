pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod inventory_repo;
pub use inventory_repo::InventoryRepository;
pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
