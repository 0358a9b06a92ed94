//! Error types for display enumeration and mode switching

use thiserror::Error;

use crate::types::DeviceId;

/// Result type alias for display operations
pub type Result<T> = std::result::Result<T, DisplayError>;

/// Errors surfaced to callers.
///
/// Enumeration problems are never reported here; a device the OS cannot
/// describe is simply left out of the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The handle does not belong to the registry it was passed to
    #[error("unknown display device {0}: not present in the device registry")]
    UnknownDevice(DeviceId),

    /// No native display backend exists for this platform
    #[error("display mode switching is not supported on this platform")]
    Unsupported,
}
