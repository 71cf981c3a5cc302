//! Linux evdev backend.
//!
//! - **Discovery** of pointer nodes under `/dev/input` ([`DeviceCatalog`])
//! - **Capability probing** through the `evdev` crate ([`EvdevProbe`], `evdev` feature)
//! - **Blocking reads** of raw `input_event` records ([`MouseDevice`])
//!
//! Most users want [`MouseDevice::open`] with a [`DeviceSelector`](crate::DeviceSelector)
//! and then a loop over [`EventSource::next_event`](crate::EventSource::next_event).

pub mod discovery;
#[cfg(feature = "evdev")]
#[cfg_attr(docsrs, doc(cfg(feature = "evdev")))]
pub mod evdev_probe;
pub mod mouse_device;

pub use discovery::{DeviceCatalog, DEFAULT_INPUT_DIR};
#[cfg(feature = "evdev")]
pub use evdev_probe::EvdevProbe;
pub use mouse_device::MouseDevice;
