//! Capability probing through the `evdev` crate.
//!
//! Opening an `evdev::Device` reads the node's `EVIOCGBIT` capability bitmaps
//! without grabbing it; the handle is dropped again as soon as the bits are
//! copied out.

use crate::device::{Capabilities, CapabilityProbe};
use evdev::{Key, RelativeAxisType};
use std::io;
use std::path::Path;

/// [`CapabilityProbe`] backed by the kernel's evdev ioctls.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvdevProbe;

impl CapabilityProbe for EvdevProbe {
    fn probe(&self, path: &Path) -> io::Result<Capabilities> {
        let device = evdev::Device::open(path)?;

        let event_types: Vec<u16> = device.supported_events().iter().map(|t| t.0).collect();

        let relative_xy = device.supported_relative_axes().map_or(false, |axes| {
            axes.contains(RelativeAxisType::REL_X) && axes.contains(RelativeAxisType::REL_Y)
        });

        let primary_button = device
            .supported_keys()
            .map_or(false, |keys| keys.contains(Key::BTN_LEFT));

        Ok(Capabilities {
            name: device.name().map(str::to_owned),
            event_types,
            relative_xy,
            primary_button,
        })
    }
}
