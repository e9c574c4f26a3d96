use thiserror::Error;

/// Errors raised while building a catalog from a seed table.
///
/// Reads and toggles on a built store never fail; lookup misses are `None`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("seed entry {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate movie id {0} in seed")]
    DuplicateId(String),
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}
