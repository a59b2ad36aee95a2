use hw_core::HwError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search configuration: {0}")]
    Config(#[from] HwError),
}

pub type SearchResult<T> = Result<T, SearchError>;
