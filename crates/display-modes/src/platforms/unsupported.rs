//! Placeholder backend for platforms without a native implementation.

use crate::backend::{ChangeStatus, DisplayBackend, ModeChange, ModeSelector, RawDevice, RawMode};

/// Uninhabited: no value of this type can exist, so [`crate::system_displays`]
/// can only report [`crate::DisplayError::Unsupported`] here.
#[derive(Debug, Clone, Copy)]
pub enum UnsupportedBackend {}

impl DisplayBackend for UnsupportedBackend {
    fn enum_device(&self, _index: u32) -> Option<RawDevice> {
        match *self {}
    }

    fn enum_settings(&self, _device_name: &str, _selector: ModeSelector) -> Option<RawMode> {
        match *self {}
    }

    fn change_settings(&self, _device_name: &str, _mode: Option<&ModeChange>) -> ChangeStatus {
        match *self {}
    }
}
