//! mouse-reader: mouse/trackball input as named key events (Linux evdev).
//!
//! Finds a pointer device under `/dev/input` (or opens a given node), reads its
//! fixed-size `input_event` records with blocking reads, decodes them into
//! `(type, code, value)` plus a display name, and hands them to sinks as
//! [`KeyMessage`]s.
//!
//! ```no_run
//! use mouse_reader::{DeviceSelector, EventSource, JsonLinesSink, MouseDevice, Publisher};
//!
//! let mut mouse = MouseDevice::open(DeviceSelector::AutoDiscover);
//! if !mouse.is_readable() {
//!     eprintln!("no mouse");
//!     std::process::exit(1);
//! }
//! let mut publisher = Publisher::new();
//! publisher.add_sink(JsonLinesSink::new(std::io::stdout()));
//! publisher.run(&mut mouse).ok();
//! ```

#[cfg(not(target_os = "linux"))]
compile_error!("mouse-reader reads evdev nodes and only builds on Linux");

pub mod backends;
pub mod codec;
pub mod config;
pub mod device;
pub mod event;
pub mod logger;
pub mod metadata;
pub mod publisher;

pub use backends::linux::{DeviceCatalog, MouseDevice};
#[cfg(feature = "evdev")]
pub use backends::linux::EvdevProbe;
pub use backends::virtual_input::VirtualMouse;
pub use codec::{decode, encode, name_of, DecodeError, RECORD_SIZE, UNKNOWN_NAME};
pub use config::{Config, ConfigError, OutputFormat};
pub use device::*;
pub use event::*;
pub use logger::LogSink;
pub use metadata::*;
pub use publisher::*;
