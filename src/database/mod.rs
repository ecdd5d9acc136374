pub mod manager;
pub mod models;
pub mod query_builder;
pub mod store;
pub mod postgres;
pub mod memory;

pub use manager::{DatabaseManager, DatabaseError};
pub use store::{CaseLawStore, GroupCount, GroupField};
pub use postgres::PgCaseLawStore;
pub use memory::MemoryStore;
