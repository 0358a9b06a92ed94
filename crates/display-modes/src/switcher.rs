//! Applying and restoring display modes on registered devices.

use tracing::{info, instrument, warn};

use crate::backend::{DisplayBackend, ModeChange};
use crate::errors::Result;
use crate::registry::DisplayManager;
use crate::types::{DeviceId, DisplayResolution};

impl<B: DisplayBackend> DisplayManager<B> {
    /// Ask the OS to switch `id` to `resolution`, or back to its stored
    /// default when `resolution` is `None`.
    ///
    /// Returns `Ok(true)` only when the OS reports success. Every other
    /// status, including "restart required", is `Ok(false)`. Fails with
    /// [`crate::DisplayError::UnknownDevice`] when `id` is not in this registry.
    #[instrument(skip(self))]
    pub fn try_change_resolution(
        &self,
        id: DeviceId,
        resolution: Option<&DisplayResolution>,
    ) -> Result<bool> {
        let device = self.device(id)?;
        let request = resolution.map(ModeChange::from);

        let status = self
            .backend
            .change_settings(device.device_name(), request.as_ref());

        if status.is_success() {
            info!(device = device.device_name(), "display mode changed");
        } else {
            warn!(
                device = device.device_name(),
                code = status.code(),
                %status,
                "display mode change rejected"
            );
        }
        Ok(status.is_success())
    }

    /// Restore the device's default mode from the persistent configuration.
    pub fn try_restore_resolution(&self, id: DeviceId) -> Result<bool> {
        self.try_change_resolution(id, None)
    }
}
