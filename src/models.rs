pub mod chat;
pub mod customer;
pub mod dashboard;
pub mod inventory;
pub mod order;
