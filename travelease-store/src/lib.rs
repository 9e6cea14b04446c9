pub mod app_config;
pub mod booking_repo;
pub mod catalog_repo;
pub mod contact_repo;
pub mod memory;
pub mod seed;

pub use memory::{MemoryStore, Stored, Table, Tables};
