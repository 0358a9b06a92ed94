//! Tests for device enumeration

use super::fake_backend::{mode, mode_at, FakeBackend, FakeDevice};
use crate::enumerator::enumerate_devices;
use crate::registry::DisplayManager;
use crate::types::{DeviceId, DisplayResolution, Rect};

#[test]
fn test_enumerates_attached_devices_in_order() {
    let backend = FakeBackend::new(vec![
        FakeDevice::attached(
            r"\\.\DISPLAY1",
            vec![mode(1920, 1080, 32, 60), mode(1280, 720, 32, 60)],
        )
        .primary(),
        FakeDevice::attached(r"\\.\DISPLAY2", vec![mode_at(1920, 0, 2560, 1440)]),
    ]);

    let devices = enumerate_devices(&backend);

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id(), DeviceId(0));
    assert_eq!(devices[0].device_name(), r"\\.\DISPLAY1");
    assert_eq!(devices[0].description(), r"\\.\DISPLAY1 adapter");
    assert!(devices[0].is_primary());
    assert_eq!(devices[0].resolutions().len(), 2);
    assert_eq!(
        *devices[0].current_resolution(),
        DisplayResolution::new(0, 0, 1920, 1080, 32, 60)
    );

    assert_eq!(devices[1].id(), DeviceId(1));
    assert!(!devices[1].is_primary());
    assert_eq!(devices[1].bounds(), Rect::new(1920, 0, 2560, 1440));
}

#[test]
fn test_no_devices_yields_empty_registry() {
    let backend = FakeBackend::new(vec![]);
    assert!(enumerate_devices(&backend).is_empty());
}

#[test]
fn test_skips_device_not_attached_to_desktop() {
    let backend = FakeBackend::new(vec![
        FakeDevice::attached("A", vec![mode(1920, 1080, 32, 60)]),
        FakeDevice::attached("B", vec![mode(1920, 1080, 32, 60)]).detached(),
        FakeDevice::attached("C", vec![mode(1920, 1080, 32, 60)]),
    ]);

    let devices = enumerate_devices(&backend);

    let names: Vec<_> = devices.iter().map(|d| d.device_name()).collect();
    assert_eq!(names, vec!["A", "C"]);
    // Handles stay dense after a skip
    assert_eq!(devices[1].id(), DeviceId(1));
}

#[test]
fn test_zero_depth_modes_are_filtered() {
    let backend = FakeBackend::new(vec![FakeDevice::attached(
        "A",
        vec![
            mode(1920, 1080, 32, 60),
            mode(1920, 1080, 0, 60),
            mode(1024, 768, 16, 75),
        ],
    )]);

    let devices = enumerate_devices(&backend);

    assert_eq!(devices.len(), 1);
    let depths: Vec<_> = devices[0]
        .resolutions()
        .iter()
        .map(|r| r.bits_per_pixel())
        .collect();
    assert_eq!(depths, vec![32, 16]);
}

#[test]
fn test_device_with_single_degenerate_mode_is_excluded() {
    // Mirrors virtual devices that report one 0 bpp mode
    let backend = FakeBackend::new(vec![FakeDevice::attached(
        r"\\.\DISPLAYV1",
        vec![mode(640, 480, 0, 0)],
    )]);

    assert!(enumerate_devices(&backend).is_empty());
}

#[test]
fn test_device_with_valid_current_but_no_valid_modes_is_excluded() {
    let backend = FakeBackend::new(vec![FakeDevice::attached("A", vec![mode(800, 600, 0, 60)])
        .with_current(Some(mode(800, 600, 32, 60)))]);

    assert!(enumerate_devices(&backend).is_empty());
}

#[test]
fn test_current_mode_falls_back_to_registry_mode() {
    let backend = FakeBackend::new(vec![FakeDevice::attached(
        "A",
        vec![mode(1920, 1080, 32, 60), mode(1280, 1024, 32, 75)],
    )
    .with_current(None)
    .with_registry(Some(mode(1280, 1024, 32, 75)))]);

    let devices = enumerate_devices(&backend);

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].current_resolution().width(), 1280);
    assert_eq!(devices[0].current_resolution().refresh_rate(), 75);
}

#[test]
fn test_zero_depth_current_mode_does_not_consult_registry() {
    let backend = FakeBackend::new(vec![FakeDevice::attached("A", vec![mode(1920, 1080, 32, 60)])
        .with_current(Some(mode(1920, 1080, 0, 60)))
        .with_registry(Some(mode(1920, 1080, 32, 60)))]);

    assert!(enumerate_devices(&backend).is_empty());
}

#[test]
fn test_device_without_current_mode_is_dropped_despite_valid_modes() {
    let backend = FakeBackend::new(vec![FakeDevice::attached(
        "A",
        vec![mode(1920, 1080, 32, 60)],
    )
    .with_current(None)
    .with_registry(None)]);

    assert!(enumerate_devices(&backend).is_empty());
}

#[test]
fn test_probe_state_does_not_leak_between_devices() {
    // A has a usable current mode but no valid modes and is dropped; B has
    // valid modes but no current mode and must not inherit A's.
    let backend = FakeBackend::new(vec![
        FakeDevice::attached("A", vec![])
            .with_current(Some(mode(1920, 1080, 32, 60)))
            .primary(),
        FakeDevice::attached("B", vec![mode(1280, 720, 32, 60)]).with_current(None),
    ]);

    assert!(enumerate_devices(&backend).is_empty());
}

#[test]
fn test_primary_flag_does_not_leak_to_next_device() {
    let backend = FakeBackend::new(vec![
        FakeDevice::attached("A", vec![])
            .with_current(Some(mode(1920, 1080, 32, 60)))
            .primary(),
        FakeDevice::attached("B", vec![mode(1280, 720, 32, 60)]),
    ]);

    let devices = enumerate_devices(&backend);

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].device_name(), "B");
    assert!(!devices[0].is_primary());
}

#[test]
fn test_primary_flags_pass_through_unchanged() {
    let backend = FakeBackend::new(vec![
        FakeDevice::attached("A", vec![mode(1920, 1080, 32, 60)]).primary(),
        FakeDevice::attached("B", vec![mode(1920, 1080, 32, 60)]).primary(),
        FakeDevice::attached("C", vec![mode(1920, 1080, 32, 60)]),
    ]);

    let manager = DisplayManager::new(backend);

    let flags: Vec<_> = manager.devices().iter().map(|d| d.is_primary()).collect();
    assert_eq!(flags, vec![true, true, false]);
    assert_eq!(manager.primary().map(|d| d.device_name()), Some("A"));
}

#[test]
fn test_every_registered_device_has_valid_current_and_modes() {
    let backend = FakeBackend::new(vec![
        FakeDevice::attached("A", vec![mode(1920, 1080, 32, 60), mode(0, 0, 0, 0)]),
        FakeDevice::attached("B", vec![mode(0, 0, 0, 0)]),
        FakeDevice::attached("C", vec![mode(1024, 768, 16, 60)])
            .with_current(None)
            .with_registry(Some(mode(1024, 768, 16, 60))),
        FakeDevice::attached("D", vec![]),
    ]);

    let devices = enumerate_devices(&backend);

    assert_eq!(devices.len(), 2);
    for device in &devices {
        assert!(!device.resolutions().is_empty());
        assert!(device.current_resolution().bits_per_pixel() > 0);
        assert_eq!(device.bounds(), device.current_resolution().bounds());
    }
}

#[test]
fn test_manager_without_primary_device() {
    let backend = FakeBackend::new(vec![FakeDevice::attached(
        "A",
        vec![mode(1920, 1080, 32, 60)],
    )]);

    let manager = DisplayManager::new(backend);
    assert!(manager.primary().is_none());
}
