use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy of the resolution core.
///
/// None of these is fatal to the host process; commands render them as
/// informational messages.
#[derive(Debug, Error)]
pub enum Error {
    /// No stored record matched any lookup variant of the supplied id.
    #[error("no record found (tried: {})", .tried.join(", "))]
    NotFound { tried: Vec<String> },

    /// A required text input was blank; rejected before any lookup.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// The vector store or model provider could not be reached.
    #[error("upstream unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}
