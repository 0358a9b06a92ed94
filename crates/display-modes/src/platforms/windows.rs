#![cfg(target_os = "windows")]

//! Win32 backend built on the GDI display-settings API.

use std::ffi::OsStr;
use std::mem;
use std::os::windows::ffi::OsStrExt;
use tracing::trace;
use windows::core::PCWSTR;
use windows::Win32::Graphics::Gdi::{
    ChangeDisplaySettingsExW, EnumDisplayDevicesW, EnumDisplaySettingsW, CDS_FULLSCREEN, DEVMODEW,
    DISPLAY_DEVICEW, DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DISPLAY_DEVICE_PRIMARY_DEVICE,
    DM_BITSPERPEL, DM_DISPLAYFREQUENCY, DM_PELSHEIGHT, DM_PELSWIDTH, ENUM_CURRENT_SETTINGS,
    ENUM_DISPLAY_SETTINGS_MODE, ENUM_REGISTRY_SETTINGS,
};

use crate::backend::{ChangeStatus, DisplayBackend, ModeChange, ModeSelector, RawDevice, RawMode};

/// Talks to `EnumDisplayDevicesW`, `EnumDisplaySettingsW` and
/// `ChangeDisplaySettingsExW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Backend;

fn to_wide(s: &str) -> Vec<u16> {
    OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

impl DisplayBackend for Win32Backend {
    fn enum_device(&self, index: u32) -> Option<RawDevice> {
        unsafe {
            let mut device: DISPLAY_DEVICEW = mem::zeroed();
            device.cb = mem::size_of::<DISPLAY_DEVICEW>() as u32;
            if !EnumDisplayDevicesW(PCWSTR::null(), index, &mut device, 0).as_bool() {
                return None;
            }

            let flags = device.StateFlags.0;
            Some(RawDevice {
                name: from_wide(&device.DeviceName),
                description: from_wide(&device.DeviceString),
                attached_to_desktop: flags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP.0 != 0,
                primary: flags & DISPLAY_DEVICE_PRIMARY_DEVICE.0 != 0,
            })
        }
    }

    fn enum_settings(&self, device_name: &str, selector: ModeSelector) -> Option<RawMode> {
        let mode_num = match selector {
            ModeSelector::Current => ENUM_CURRENT_SETTINGS,
            ModeSelector::Registry => ENUM_REGISTRY_SETTINGS,
            ModeSelector::Index(i) => ENUM_DISPLAY_SETTINGS_MODE(i),
        };
        let name_w = to_wide(device_name);

        unsafe {
            let mut devmode: DEVMODEW = mem::zeroed();
            devmode.dmSize = mem::size_of::<DEVMODEW>() as u16;
            if !EnumDisplaySettingsW(PCWSTR(name_w.as_ptr()), mode_num, &mut devmode).as_bool() {
                return None;
            }

            // Display devices use the second arm of the printer/display union
            let position = devmode.Anonymous1.Anonymous2.dmPosition;
            Some(RawMode {
                x: position.x,
                y: position.y,
                width: devmode.dmPelsWidth,
                height: devmode.dmPelsHeight,
                bits_per_pixel: devmode.dmBitsPerPel,
                refresh_rate: devmode.dmDisplayFrequency,
            })
        }
    }

    fn change_settings(&self, device_name: &str, mode: Option<&ModeChange>) -> ChangeStatus {
        let name_w = to_wide(device_name);

        let devmode = mode.map(|m| {
            // SAFETY: DEVMODEW is a plain C struct; all-zero is a valid value.
            let mut devmode: DEVMODEW = unsafe { mem::zeroed() };
            devmode.dmSize = mem::size_of::<DEVMODEW>() as u16;
            devmode.dmPelsWidth = m.width;
            devmode.dmPelsHeight = m.height;
            devmode.dmBitsPerPel = m.bits_per_pixel;
            devmode.dmDisplayFrequency = m.refresh_rate;
            devmode.dmFields = DM_BITSPERPEL | DM_PELSWIDTH | DM_PELSHEIGHT | DM_DISPLAYFREQUENCY;
            devmode
        });

        let result = unsafe {
            ChangeDisplaySettingsExW(
                PCWSTR(name_w.as_ptr()),
                devmode.as_ref().map(|d| d as *const DEVMODEW),
                None,
                CDS_FULLSCREEN,
                None,
            )
        };
        trace!(device = device_name, code = result.0, "ChangeDisplaySettingsExW");
        ChangeStatus::from_code(result.0)
    }
}
