pub mod types;
pub mod builder;
pub mod filter_where;
pub mod filter_order;
pub mod error;

pub use types::*;
pub use builder::{build, ALL_SENTINEL};
pub use error::FilterError;
