pub mod list;
pub mod search;
pub mod show;
pub mod stats;
pub mod utils;

// Re-export handler functions for use in routing
pub use list::get as list_get;
pub use search::get as search_get;
pub use show::get as show_get;
pub use stats::get as stats_get;
