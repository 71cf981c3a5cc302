//! Blocking reader over one evdev node.
//!
//! [`MouseDevice`] owns a single read-only file handle and is responsible for:
//! - resolving its node from a [`DeviceSelector`] once, at construction
//! - reading exactly one record per [`next_event`](EventSource::next_event) call
//! - handing the bytes to the codec and returning the decoded event
//!
//! Reads block in the kernel until a record is ready; there is no polling,
//! buffering or background thread here. Pending records queue in the kernel's
//! evdev buffer.
//!
//! Lifecycle: `Unopened → Open → Closed`. A failed open stays `Unopened` for
//! good, and a malformed record or read failure moves an open device to `Closed`.

use super::discovery::DeviceCatalog;
use crate::codec::{self, RECORD_SIZE};
use crate::device::{CapabilityProbe, DeviceError, DeviceSelector, EventSource, OpenFailure};
use crate::event::{type_name, DecodedEvent};
use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

enum Handle {
    Unopened,
    Open(File),
    Closed,
}

/// A mouse/trackball evdev node opened for blocking reads.
pub struct MouseDevice {
    path: Option<PathBuf>,
    label: String,
    handle: Handle,
    open_failure: Option<OpenFailure>,
}

impl MouseDevice {
    /// Resolve `selector` against the default `/dev/input` catalog and open it.
    #[cfg(feature = "evdev")]
    pub fn open(selector: DeviceSelector) -> Self {
        Self::open_with(selector, &DeviceCatalog::new())
    }

    /// Same as [`open`](Self::open) with a plain path hint; empty means auto-discover.
    #[cfg(feature = "evdev")]
    pub fn from_hint(hint: &str) -> Self {
        Self::open(DeviceSelector::from_hint(hint))
    }

    /// Resolve `selector`, consulting `catalog` only for [`DeviceSelector::AutoDiscover`].
    ///
    /// Never fails: when no node is found or the open is refused, the returned
    /// device is not readable and [`open_failure`](Self::open_failure) says why.
    pub fn open_with<P: CapabilityProbe>(
        selector: DeviceSelector,
        catalog: &DeviceCatalog<P>,
    ) -> Self {
        let path = match selector {
            DeviceSelector::Explicit(path) => path,
            DeviceSelector::AutoDiscover => match catalog.find_pointer_device() {
                Some(path) => {
                    info!(path = %path.display(), "discovered pointer device");
                    path
                }
                None => {
                    warn!(dir = %catalog.dir().display(), "no pointer device found");
                    return Self::unopened(None, OpenFailure::DeviceNotFound);
                }
            },
        };
        Self::open_path(path)
    }

    /// Open exactly `path` read-only in blocking mode.
    pub fn open_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match OpenOptions::new().read(true).open(&path) {
            Ok(file) => {
                info!(path = %path.display(), "opened input device");
                Self {
                    label: path.display().to_string(),
                    path: Some(path),
                    handle: Handle::Open(file),
                    open_failure: None,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open input device");
                let failure = OpenFailure::OpenFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                };
                Self::unopened(Some(path), failure)
            }
        }
    }

    fn unopened(path: Option<PathBuf>, failure: OpenFailure) -> Self {
        Self {
            label: path
                .as_ref()
                .map_or_else(|| "<none>".to_string(), |p| p.display().to_string()),
            path,
            handle: Handle::Unopened,
            open_failure: Some(failure),
        }
    }

    /// `true` while a valid handle is held; check before calling `next_event`.
    pub fn is_readable(&self) -> bool {
        matches!(self.handle, Handle::Open(_))
    }

    /// The resolved node path, if one was chosen.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Why construction left the device unreadable, if it did.
    pub fn open_failure(&self) -> Option<&OpenFailure> {
        self.open_failure.as_ref()
    }

    /// Release the handle. Safe to call repeatedly or on a device that never opened.
    pub fn close(&mut self) {
        if let Handle::Open(_) = self.handle {
            self.handle = Handle::Closed;
            debug!(device = %self.label, "closed input device");
        }
    }

    fn read_record(file: &mut File, buf: &mut [u8; RECORD_SIZE]) -> io::Result<usize> {
        loop {
            match file.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

impl EventSource for MouseDevice {
    /// Block for one record and decode it.
    ///
    /// A short read or an OS error ends the session: the device closes and
    /// later calls return [`DeviceError::Closed`].
    fn next_event(&mut self) -> Result<DecodedEvent, DeviceError> {
        let file = match &mut self.handle {
            Handle::Open(file) => file,
            Handle::Unopened => return Err(DeviceError::NotOpen),
            Handle::Closed => return Err(DeviceError::Closed),
        };

        let mut buf = [0u8; RECORD_SIZE];
        let result = match Self::read_record(file, &mut buf) {
            Ok(n) => codec::decode(&buf[..n]).map_err(DeviceError::from),
            Err(source) => Err(DeviceError::Read {
                path: self.label.clone(),
                source,
            }),
        };

        match &result {
            Ok(ev) => trace!(
                device = %self.label,
                ty = type_name(ev.event_type),
                code = ev.code,
                value = ev.value,
                name = ev.name,
                "input record"
            ),
            Err(e) => {
                warn!(device = %self.label, error = %e, "ending device session");
                self.close();
            }
        }
        result
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for MouseDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseDevice")
            .field("path", &self.path)
            .field("readable", &self.is_readable())
            .field("open_failure", &self.open_failure)
            .finish()
    }
}
