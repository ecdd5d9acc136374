pub mod case_law_service;

pub use case_law_service::{CaseLawError, CaseLawService, CaseLawStats, ListRequest};
