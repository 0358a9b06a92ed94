//! Walks the devices reported by a [`DisplayBackend`] and keeps the usable ones.

use tracing::{debug, instrument};

use crate::backend::{DisplayBackend, ModeSelector, RawDevice};
use crate::types::{DeviceId, DisplayDevice, DisplayResolution};

/// Build the device list.
///
/// A device is kept only when it is attached to the desktop, has a current
/// mode with nonzero color depth, and reports at least one valid mode.
/// Enumeration stops at the first index the backend does not answer for.
///
/// A device with valid modes but no usable current mode is dropped too. That
/// loses visibility of such devices and is kept for compatibility with
/// existing callers.
#[instrument(skip(backend))]
pub fn enumerate_devices<B: DisplayBackend + ?Sized>(backend: &B) -> Vec<DisplayDevice> {
    let mut devices = Vec::new();
    let mut index = 0u32;

    while let Some(raw) = backend.enum_device(index) {
        index += 1;

        if !raw.attached_to_desktop {
            debug!(device = %raw.name, "skipping device not attached to desktop");
            continue;
        }

        let current = probe_current_mode(backend, &raw);
        let resolutions = collect_modes(backend, &raw.name);

        let Some((current, primary)) = current else {
            debug!(device = %raw.name, "skipping device without a usable current mode");
            continue;
        };
        if resolutions.is_empty() {
            debug!(device = %raw.name, "skipping device without valid modes");
            continue;
        }

        let id = DeviceId(devices.len());
        debug!(
            %id,
            device = %raw.name,
            %current,
            primary,
            modes = resolutions.len(),
            "registered display device"
        );
        devices.push(DisplayDevice::new(
            id,
            raw.name,
            raw.description,
            current,
            primary,
            resolutions,
        ));
    }

    debug!(count = devices.len(), probed = index, "display enumeration finished");
    devices
}

/// The device's current mode and primary flag, falling back to the stored
/// registry mode when the current one is unavailable.
fn probe_current_mode<B: DisplayBackend + ?Sized>(
    backend: &B,
    raw: &RawDevice,
) -> Option<(DisplayResolution, bool)> {
    let mode = backend
        .enum_settings(&raw.name, ModeSelector::Current)
        .or_else(|| backend.enum_settings(&raw.name, ModeSelector::Registry))?;

    mode.is_valid().then(|| (mode.to_resolution(), raw.primary))
}

/// Every mode the device reports, minus zero-depth placeholders.
fn collect_modes<B: DisplayBackend + ?Sized>(
    backend: &B,
    device_name: &str,
) -> Vec<DisplayResolution> {
    let mut modes = Vec::new();
    let mut index = 0u32;
    while let Some(mode) = backend.enum_settings(device_name, ModeSelector::Index(index)) {
        index += 1;
        // Some virtual devices (e.g. \\.\DISPLAYV1) report a single 0 bpp mode
        if !mode.is_valid() {
            continue;
        }
        modes.push(mode.to_resolution());
    }
    modes
}
