//! Rendering error types

use super::surface::SurfaceId;
use thiserror::Error;

/// Errors raised while writing views to display surfaces
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A required display surface is not available
    #[error("Display surface not found: {0}")]
    MissingSurface(SurfaceId),
}

/// Result type alias for rendering
pub type RenderResult<T> = Result<T, RenderError>;
