use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unsupported sort column: {0}")]
    UnsupportedColumn(String),

    #[error("Invalid sort direction: {0}")]
    InvalidDirection(String),
}
