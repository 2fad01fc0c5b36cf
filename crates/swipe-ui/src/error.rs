//! Navigator error types.

use thiserror::Error;

/// Attachment failure. The only fallible navigator operation is
/// construction; everything at runtime clamps or no-ops instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachError {
    /// The renderer reports no child sequence to manage.
    #[error("container has no slides to manage")]
    NoSlides,
}
