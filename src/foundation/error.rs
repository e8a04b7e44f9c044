use crate::domain::model::Location;

/// Convenience result type used across the placement engine.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// Error taxonomy of the arrow positioning pipeline.
///
/// Only [`PlacementError::MalformedPictograph`], [`PlacementError::Validation`] and
/// [`PlacementError::Serde`] ever reach callers of the pipeline. The remaining variants describe
/// conditions the pipeline recovers from; they are constructed so the recovery can be logged
/// with a stable message.
#[derive(thiserror::Error, Debug)]
pub enum PlacementError {
    /// A location calculator had no entry for a start/end combination.
    #[error("missing location pair: {start} -> {end}")]
    MissingLocationPair {
        /// Start location of the motion.
        start: Location,
        /// End location of the motion.
        end: Location,
    },

    /// A placement table was absent or did not contain the queried key.
    #[error("missing placement data: {0}")]
    MissingPlacementData(String),

    /// The two motions disagree on cardinal/intercardinal membership.
    #[error("inconsistent grid mode: {0}")]
    InconsistentGridMode(String),

    /// Motion fields failed validation before the pipeline ran.
    #[error("invalid motion: {0}")]
    InvalidMotion(String),

    /// Pictograph data is structurally unusable for letter-specific logic.
    #[error("malformed pictograph: {0}")]
    MalformedPictograph(String),

    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing placement documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacementError {
    /// Build a [`PlacementError::MissingLocationPair`] value.
    pub fn missing_location_pair(start: Location, end: Location) -> Self {
        Self::MissingLocationPair { start, end }
    }

    /// Build a [`PlacementError::MissingPlacementData`] value.
    pub fn missing_placement_data(msg: impl Into<String>) -> Self {
        Self::MissingPlacementData(msg.into())
    }

    /// Build a [`PlacementError::InconsistentGridMode`] value.
    pub fn inconsistent_grid_mode(msg: impl Into<String>) -> Self {
        Self::InconsistentGridMode(msg.into())
    }

    /// Build a [`PlacementError::InvalidMotion`] value.
    pub fn invalid_motion(msg: impl Into<String>) -> Self {
        Self::InvalidMotion(msg.into())
    }

    /// Build a [`PlacementError::MalformedPictograph`] value.
    pub fn malformed_pictograph(msg: impl Into<String>) -> Self {
        Self::MalformedPictograph(msg.into())
    }

    /// Build a [`PlacementError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlacementError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
