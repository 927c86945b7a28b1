use thiserror::Error;

/// Why a catalog fetch failed.
///
/// The variants exist for logs. The display layer only ever sees
/// `FetchState::Failed`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog endpoint {0:?}: {1}")]
    InvalidEndpoint(String, String),
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog service error ({0}): {1}")]
    Status(u16, String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("catalog unavailable")]
    Unavailable,
}
