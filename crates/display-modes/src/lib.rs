//! Display device enumeration and resolution switching.
//!
//! This crate lists the physical displays attached to the desktop, the
//! modes each one supports, and lets callers switch a display to one of
//! those modes or restore its stored default.
//!
//! - [`DisplayManager::new`] enumerates a [`DisplayBackend`] exactly once and
//!   keeps the resulting device list for its whole lifetime.
//! - [`system_displays`] is the process-wide registry for the native backend,
//!   enumerated lazily on first use.
//! - [`DisplayManager::try_change_resolution`] and
//!   [`DisplayManager::try_restore_resolution`] forward a single request to
//!   the OS and report whether it succeeded.
//!
//! Limitations:
//! - Only Windows has a native backend. Elsewhere [`system_displays`]
//!   returns [`DisplayError::Unsupported`].
//! - Hot-plug and changes made by other processes are not observed.
//! - Requested modes are not validated beyond what the OS enforces.

pub mod backend;
pub mod enumerator;
pub mod errors;
pub mod platforms;
pub mod registry;
pub mod switcher;
pub mod types;
#[cfg(test)]
mod tests;

pub use backend::{ChangeStatus, DisplayBackend, ModeChange, ModeSelector, RawDevice, RawMode};
pub use enumerator::enumerate_devices;
pub use errors::{DisplayError, Result};
pub use registry::{system_displays, DisplayManager, SystemBackend, SystemDisplays};
pub use types::{DeviceId, DisplayDevice, DisplayResolution, Rect};
