//! The boundary with the operating system's display-configuration facility.
//!
//! Everything above this trait is platform independent and is driven by
//! the three calls below.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::DisplayResolution;

/// Device record returned by [`DisplayBackend::enum_device`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDevice {
    pub name: String,
    pub description: String,
    pub attached_to_desktop: bool,
    pub primary: bool,
}

/// Mode record returned by [`DisplayBackend::enum_settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawMode {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub refresh_rate: u32,
}

impl RawMode {
    /// Modes with zero color depth are placeholders, not renderable modes.
    pub fn is_valid(&self) -> bool {
        self.bits_per_pixel > 0
    }

    pub fn to_resolution(self) -> DisplayResolution {
        DisplayResolution::new(
            self.x,
            self.y,
            self.width,
            self.height,
            self.bits_per_pixel,
            self.refresh_rate,
        )
    }
}

/// Which mode [`DisplayBackend::enum_settings`] should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelector {
    /// The mode the device is running right now.
    Current,
    /// The mode stored in the persistent display configuration.
    Registry,
    /// Zero-based index into the device's mode list.
    Index(u32),
}

/// A mode-change request. Only these four fields are applied; the position
/// and every other property of the target mode are left to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub refresh_rate: u32,
}

impl From<&DisplayResolution> for ModeChange {
    fn from(resolution: &DisplayResolution) -> Self {
        Self {
            width: resolution.width(),
            height: resolution.height(),
            bits_per_pixel: resolution.bits_per_pixel(),
            refresh_rate: resolution.refresh_rate(),
        }
    }
}

/// Status code of a mode-change call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeStatus {
    Successful,
    Restart,
    Failed,
    BadMode,
    NotUpdated,
    BadFlags,
    BadParam,
    BadDualView,
    Other(i32),
}

impl ChangeStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Successful,
            1 => Self::Restart,
            -1 => Self::Failed,
            -2 => Self::BadMode,
            -3 => Self::NotUpdated,
            -4 => Self::BadFlags,
            -5 => Self::BadParam,
            -6 => Self::BadDualView,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Successful => 0,
            Self::Restart => 1,
            Self::Failed => -1,
            Self::BadMode => -2,
            Self::NotUpdated => -3,
            Self::BadFlags => -4,
            Self::BadParam => -5,
            Self::BadDualView => -6,
            Self::Other(code) => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Successful)
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => write!(f, "successful"),
            Self::Restart => write!(f, "restart required"),
            Self::Failed => write!(f, "driver failed the requested mode"),
            Self::BadMode => write!(f, "mode not supported"),
            Self::NotUpdated => write!(f, "settings could not be written to the registry"),
            Self::BadFlags => write!(f, "invalid flags"),
            Self::BadParam => write!(f, "invalid parameter"),
            Self::BadDualView => write!(f, "dual-view capable system"),
            Self::Other(code) => write!(f, "unknown status {code}"),
        }
    }
}

/// Blocking access to the native display-configuration API.
///
/// Implementations report "no more items" and any OS failure the same way,
/// by returning `None`.
pub trait DisplayBackend {
    /// The device at `index`, or `None` past the last device.
    fn enum_device(&self, index: u32) -> Option<RawDevice>;

    /// A mode of the named device, or `None` when unavailable or exhausted.
    fn enum_settings(&self, device_name: &str, selector: ModeSelector) -> Option<RawMode>;

    /// Apply `mode` to the named device, or restore its stored default when
    /// `mode` is `None`.
    fn change_settings(&self, device_name: &str, mode: Option<&ModeChange>) -> ChangeStatus;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for &B {
    fn enum_device(&self, index: u32) -> Option<RawDevice> {
        (**self).enum_device(index)
    }

    fn enum_settings(&self, device_name: &str, selector: ModeSelector) -> Option<RawMode> {
        (**self).enum_settings(device_name, selector)
    }

    fn change_settings(&self, device_name: &str, mode: Option<&ModeChange>) -> ChangeStatus {
        (**self).change_settings(device_name, mode)
    }
}
