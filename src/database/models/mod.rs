pub mod case_law;
pub mod case_detail;

pub use case_law::CaseLawRow;
pub use case_detail::CaseDetailRow;
