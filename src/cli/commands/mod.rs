pub mod health;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
