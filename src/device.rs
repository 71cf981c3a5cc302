//! Core device traits and selection types.
//!
//! - [`EventSource`] is what the publisher reads from. [`MouseDevice`] and
//!   [`VirtualMouse`] implement it.
//! - [`CapabilityProbe`] answers "which event types does this node report"
//!   for discovery, without grabbing the device.
//! - [`DeviceSelector`] says how a [`MouseDevice`] picks its node.
//!
//! [`MouseDevice`]: crate::backends::linux::MouseDevice
//! [`VirtualMouse`]: crate::backends::virtual_input::VirtualMouse

use crate::codec::DecodeError;
use crate::event::{DecodedEvent, EV_KEY, EV_REL};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of [`EventSource::next_event`].
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The device never opened (not found or refused).
    #[error("device is not open")]
    NotOpen,
    /// The device was closed; the session is over.
    #[error("device is closed")]
    Closed,
    /// The kernel delivered a record of the wrong width.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// `read(2)` failed (typically `ENODEV` after an unplug).
    #[error("read from {path} failed")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Why a device ended up not readable at construction.
///
/// Both variants look the same to callers (`is_readable() == false`); this is
/// kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenFailure {
    /// Auto-discovery found no pointer-capable node.
    DeviceNotFound,
    /// A path was chosen but the OS refused to open it.
    OpenFailed { path: PathBuf, reason: String },
}

impl std::fmt::Display for OpenFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenFailure::DeviceNotFound => f.write_str("no pointer device found"),
            OpenFailure::OpenFailed { path, reason } => {
                write!(f, "cannot open {}: {}", path.display(), reason)
            }
        }
    }
}

/// How a device node is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceSelector {
    /// Open exactly this path.
    Explicit(PathBuf),
    /// Take the first pointer device the catalog finds.
    AutoDiscover,
}

impl DeviceSelector {
    /// Interpret a path hint; only an empty hint means auto-discover. The hint
    /// is used verbatim, whitespace included.
    pub fn from_hint(hint: &str) -> Self {
        if hint.is_empty() {
            DeviceSelector::AutoDiscover
        } else {
            DeviceSelector::Explicit(PathBuf::from(hint))
        }
    }
}

impl From<Option<String>> for DeviceSelector {
    fn from(hint: Option<String>) -> Self {
        hint.as_deref().map_or(DeviceSelector::AutoDiscover, Self::from_hint)
    }
}

/// Anything that yields decoded input events one at a time.
pub trait EventSource {
    /// Block until the next event is available.
    ///
    /// [`DeviceError::Closed`] marks an orderly end of the stream; every other
    /// error ends the session as a fault.
    fn next_event(&mut self) -> Result<DecodedEvent, DeviceError>;

    /// Human-friendly label for logs.
    fn name(&self) -> &str;
}

/// Capability set reported by one input node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Device name as reported by the driver.
    pub name: Option<String>,
    /// Supported event types (`EV_*` values), ascending.
    pub event_types: Vec<u16>,
    /// Both `REL_X` and `REL_Y` are present.
    pub relative_xy: bool,
    /// `BTN_LEFT` is present.
    pub primary_button: bool,
}

impl Capabilities {
    /// Whether the node reports events of `event_type`.
    pub fn supports(&self, event_type: u16) -> bool {
        self.event_types.contains(&event_type)
    }

    /// Mouse/trackball classification: relative motion plus a primary button.
    pub fn is_pointer(&self) -> bool {
        self.supports(EV_REL) && self.supports(EV_KEY) && self.relative_xy && self.primary_button
    }
}

/// Queries a node's capabilities without claiming exclusive access.
pub trait CapabilityProbe {
    fn probe(&self, path: &Path) -> io::Result<Capabilities>;
}
