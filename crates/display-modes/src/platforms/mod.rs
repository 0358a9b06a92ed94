//! Native [`crate::DisplayBackend`] implementations.

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

#[cfg(target_os = "windows")]
pub use windows::Win32Backend;

#[cfg(not(target_os = "windows"))]
pub use unsupported::UnsupportedBackend;
