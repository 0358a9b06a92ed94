//! The device registry: a backend plus the devices it reported, built once.

use tracing::{info, instrument};

use crate::backend::DisplayBackend;
use crate::enumerator::enumerate_devices;
use crate::errors::{DisplayError, Result};
use crate::types::{DeviceId, DisplayDevice};

/// Owns a backend and the immutable list of devices enumerated from it.
///
/// The list is never refreshed: displays plugged in or reconfigured by other
/// processes after construction are not observed. Build a new manager to
/// pick them up.
#[derive(Debug)]
pub struct DisplayManager<B> {
    pub(crate) backend: B,
    devices: Vec<DisplayDevice>,
}

impl<B: DisplayBackend> DisplayManager<B> {
    /// Enumerate the backend's devices once and keep the result.
    #[instrument(skip(backend))]
    pub fn new(backend: B) -> Self {
        let devices = enumerate_devices(&backend);
        info!(count = devices.len(), "display devices enumerated");
        Self { backend, devices }
    }

    pub fn devices(&self) -> &[DisplayDevice] {
        &self.devices
    }

    /// Look up a device by handle.
    pub fn device(&self, id: DeviceId) -> Result<&DisplayDevice> {
        self.devices
            .get(id.0)
            .ok_or(DisplayError::UnknownDevice(id))
    }

    /// The first device the OS flagged as primary.
    pub fn primary(&self) -> Option<&DisplayDevice> {
        self.devices.iter().find(|d| d.is_primary())
    }

    /// The backend the devices were enumerated from. Callers wrapping a
    /// recording or instrumented backend read it back through here.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(target_os = "windows")]
pub type SystemBackend = crate::platforms::windows::Win32Backend;

#[cfg(not(target_os = "windows"))]
pub type SystemBackend = crate::platforms::unsupported::UnsupportedBackend;

/// Process-wide registry for the native backend.
pub type SystemDisplays = DisplayManager<SystemBackend>;

#[cfg(target_os = "windows")]
static SYSTEM_DISPLAYS: once_cell::sync::Lazy<SystemDisplays> =
    once_cell::sync::Lazy::new(|| DisplayManager::new(crate::platforms::windows::Win32Backend));

/// The native registry, enumerated on first call and shared afterwards.
#[cfg(target_os = "windows")]
pub fn system_displays() -> Result<&'static SystemDisplays> {
    Ok(&SYSTEM_DISPLAYS)
}

/// The native registry, enumerated on first call and shared afterwards.
#[cfg(not(target_os = "windows"))]
pub fn system_displays() -> Result<&'static SystemDisplays> {
    Err(DisplayError::Unsupported)
}
