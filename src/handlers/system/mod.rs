pub mod health;
pub mod root;

pub use health::{health, not_found, test_db};
pub use root::root;
