//! Value types describing display devices and the modes they support.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rectangle in virtual-desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }
}

/// One way a device can render: position, size, color depth and refresh rate.
///
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayResolution {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    bits_per_pixel: u32,
    refresh_rate: u32,
}

impl DisplayResolution {
    pub fn new(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        bits_per_pixel: u32,
        refresh_rate: u32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            bits_per_pixel,
            refresh_rate,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Refresh rate in Hz.
    pub fn refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    /// The rectangle this resolution occupies on the virtual desktop.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl fmt::Display for DisplayResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}@{} Hz, {} bpp",
            self.width, self.height, self.refresh_rate, self.bits_per_pixel
        )
    }
}

/// Handle to a device, valid for the registry that produced it.
///
/// The value is the device's position in that registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(pub usize);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A physical display attached to the desktop, as seen at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDevice {
    id: DeviceId,
    /// OS identifier used to reissue mode changes, e.g. `\\.\DISPLAY1`.
    device_name: String,
    description: String,
    current_resolution: DisplayResolution,
    primary: bool,
    resolutions: Vec<DisplayResolution>,
    bounds: Rect,
}

impl DisplayDevice {
    pub(crate) fn new(
        id: DeviceId,
        device_name: String,
        description: String,
        current_resolution: DisplayResolution,
        primary: bool,
        resolutions: Vec<DisplayResolution>,
    ) -> Self {
        debug_assert!(!resolutions.is_empty());
        Self {
            id,
            device_name,
            description,
            bounds: current_resolution.bounds(),
            current_resolution,
            primary,
            resolutions,
        }
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Adapter description reported by the OS (e.g. the GPU name).
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn current_resolution(&self) -> &DisplayResolution {
        &self.current_resolution
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// Every mode the device reported with a nonzero color depth, in OS order.
    pub fn resolutions(&self) -> &[DisplayResolution] {
        &self.resolutions
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Pick a supported resolution by its properties.
    ///
    /// A zero argument means "same as the current resolution". Returns the
    /// first supported mode matching every requested property, or the current
    /// resolution when none does.
    pub fn select_resolution(
        &self,
        width: u32,
        height: u32,
        bits_per_pixel: u32,
        refresh_rate: u32,
    ) -> DisplayResolution {
        let current = &self.current_resolution;
        let or_current = |requested: u32, current: u32| {
            if requested == 0 {
                current
            } else {
                requested
            }
        };
        let width = or_current(width, current.width);
        let height = or_current(height, current.height);
        let bits_per_pixel = or_current(bits_per_pixel, current.bits_per_pixel);
        let refresh_rate = or_current(refresh_rate, current.refresh_rate);

        self.resolutions
            .iter()
            .find(|r| {
                r.width == width
                    && r.height == height
                    && r.bits_per_pixel == bits_per_pixel
                    && r.refresh_rate == refresh_rate
            })
            .copied()
            .unwrap_or(*current)
    }
}

impl fmt::Display for DisplayDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}){}: {}",
            self.id,
            self.device_name,
            self.description,
            if self.primary { " [primary]" } else { "" },
            self.current_resolution
        )
    }
}
