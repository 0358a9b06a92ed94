use anyhow::{bail, Context, Result};
use display_modes::{DeviceId, DisplayBackend, DisplayManager, DisplayResolution};
use tracing::{debug, info};

use crate::cli::{ListArgs, RestoreArgs, SetArgs};

/// Outcome of a command, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
}

pub fn handle_list<B: DisplayBackend>(
    displays: &DisplayManager<B>,
    args: &ListArgs,
) -> Result<Outcome> {
    if args.json {
        let json = serde_json::to_string_pretty(displays.devices())
            .context("Failed to serialize display devices")?;
        println!("{json}");
        return Ok(Outcome::Done);
    }

    if displays.devices().is_empty() {
        println!("No display devices found");
        return Ok(Outcome::Done);
    }

    for device in displays.devices() {
        let b = device.bounds();
        println!("{device}");
        println!("    bounds: {}x{} at ({}, {})", b.width, b.height, b.x, b.y);
        if args.modes {
            for res in device.resolutions() {
                println!("    - {res}");
            }
        } else {
            println!("    {} supported mode(s)", device.resolutions().len());
        }
    }
    Ok(Outcome::Done)
}

pub fn handle_set<B: DisplayBackend>(
    displays: &DisplayManager<B>,
    args: &SetArgs,
) -> Result<Outcome> {
    let id = DeviceId(args.device);
    let device = displays.device(id)?;
    let target = device.select_resolution(args.width, args.height, args.bpp, args.refresh);
    debug!(device = device.device_name(), %target, "selected resolution");

    if !satisfies_request(args, &target) {
        bail!(
            "{}: no supported mode matches width={} height={} bpp={} refresh={} (0 = current)",
            device.device_name(),
            args.width,
            args.height,
            args.bpp,
            args.refresh
        );
    }

    if displays.try_change_resolution(id, Some(&target))? {
        info!("{} switched to {target}", device.device_name());
        println!("{}: {target}", device.device_name());
        Ok(Outcome::Done)
    } else {
        eprintln!("{}: the OS rejected {target}", device.device_name());
        Ok(Outcome::Rejected)
    }
}

/// Every non-zero field of the request must be honoured by `target`;
/// `select_resolution` hands back the current mode when nothing matches.
fn satisfies_request(args: &SetArgs, target: &DisplayResolution) -> bool {
    let honoured = |requested: u32, actual: u32| requested == 0 || requested == actual;
    honoured(args.width, target.width())
        && honoured(args.height, target.height())
        && honoured(args.bpp, target.bits_per_pixel())
        && honoured(args.refresh, target.refresh_rate())
}

pub fn handle_restore<B: DisplayBackend>(
    displays: &DisplayManager<B>,
    args: &RestoreArgs,
) -> Result<Outcome> {
    let id = DeviceId(args.device);
    let device = displays.device(id)?;

    if displays.try_restore_resolution(id)? {
        println!("{}: default resolution restored", device.device_name());
        Ok(Outcome::Done)
    } else {
        eprintln!("{}: the OS rejected the restore", device.device_name());
        Ok(Outcome::Rejected)
    }
}
