pub mod chat;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod orders;
