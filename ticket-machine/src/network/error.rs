//! Network error types.

/// Errors from adding, finding or editing stations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A station with the same name (ignoring case) is already registered
    #[error("station already exists: {0}")]
    DuplicateStation(String),

    /// No station with this name (ignoring case)
    #[error("station not found: {0}")]
    StationNotFound(String),

    /// Station names must contain something other than whitespace
    #[error("station name cannot be empty")]
    EmptyName,
}
