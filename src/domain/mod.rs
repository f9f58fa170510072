//! Domain layer - core business logic and entities

pub mod dashboard;
pub mod pool;
pub mod table;
