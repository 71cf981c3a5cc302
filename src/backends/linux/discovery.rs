//! Pointer device discovery under `/dev/input`.
//!
//! The discovery pipeline is:
//!
//! - List `event*` entries of the input directory, sorted by file name
//! - Probe each entry's capabilities through a [`CapabilityProbe`]
//! - Classify it as a pointer (relative X/Y plus `BTN_LEFT`) or not
//!
//! ## `find_pointer_device` vs `scan`
//! - [`DeviceCatalog::find_pointer_device`] stops at the first pointer and returns its path.
//! - [`DeviceCatalog::scan`] probes every candidate and returns a descriptor for each,
//!   including why rejected entries dropped out. It backs `--list` style tooling.
//!
//! Nothing here returns an error: a missing or unreadable directory, or a node
//! that cannot be probed, simply yields no pointer.

use crate::device::{Capabilities, CapabilityProbe};
use crate::metadata::{DeviceDescriptor, Rejection};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory the kernel exposes evdev nodes under.
pub const DEFAULT_INPUT_DIR: &str = "/dev/input";

/// Enumerates and classifies candidate input nodes.
#[derive(Clone, Debug)]
pub struct DeviceCatalog<P> {
    dir: PathBuf,
    probe: P,
}

#[cfg(feature = "evdev")]
impl DeviceCatalog<super::EvdevProbe> {
    /// Catalog over [`DEFAULT_INPUT_DIR`] using the evdev capability query.
    pub fn new() -> Self {
        Self::with_probe(DEFAULT_INPUT_DIR, super::EvdevProbe)
    }

    /// Catalog over `dir` using the evdev capability query.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_probe(dir, super::EvdevProbe)
    }
}

#[cfg(feature = "evdev")]
impl Default for DeviceCatalog<super::EvdevProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CapabilityProbe> DeviceCatalog<P> {
    pub fn with_probe(dir: impl Into<PathBuf>, probe: P) -> Self {
        Self {
            dir: dir.into(),
            probe,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `event*` entries of the directory, sorted by file name.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) => {
                debug!(dir = %self.dir.display(), error = %e, "cannot list input directory");
                return Vec::new();
            }
        };

        let mut named: Vec<(String, PathBuf)> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_owned();
                name.starts_with("event").then(|| (name, entry.path()))
            })
            .collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));
        named.into_iter().map(|(_, path)| path).collect()
    }

    /// First pointer-capable candidate, if any.
    pub fn find_pointer_device(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|path| {
            matches!(self.classify(path), Ok(caps) if caps.is_pointer())
        })
    }

    /// Probe every candidate and describe how each fared.
    pub fn scan(&self) -> Vec<DeviceDescriptor> {
        self.candidates()
            .into_iter()
            .map(|path| match self.classify(&path) {
                Ok(caps) => {
                    let pointer = caps.is_pointer();
                    DeviceDescriptor {
                        path,
                        name: caps.name,
                        supports_pointer_events: pointer,
                        rejection: (!pointer).then_some(Rejection::NotPointer),
                    }
                }
                Err(reason) => DeviceDescriptor {
                    path,
                    name: None,
                    supports_pointer_events: false,
                    rejection: Some(Rejection::ProbeFailed(reason)),
                },
            })
            .collect()
    }

    fn classify(&self, path: &Path) -> Result<Capabilities, String> {
        match self.probe.probe(path) {
            Ok(caps) => {
                trace!(
                    path = %path.display(),
                    name = ?caps.name,
                    event_types = ?caps.event_types,
                    pointer = caps.is_pointer(),
                    "probed input node"
                );
                Ok(caps)
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "capability probe failed");
                Err(e.to_string())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::event::{EV_KEY, EV_REL, EV_SYN};
    use std::collections::HashMap;
    use std::io;

    /// Probe answering from a table keyed by file name; unknown names fail.
    #[derive(Default)]
    pub(crate) struct TableProbe {
        pub(crate) entries: HashMap<String, Capabilities>,
    }

    impl TableProbe {
        pub(crate) fn with(mut self, file: &str, caps: Capabilities) -> Self {
            self.entries.insert(file.to_string(), caps);
            self
        }
    }

    impl CapabilityProbe for TableProbe {
        fn probe(&self, path: &Path) -> io::Result<Capabilities> {
            let file = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or_default();
            self.entries
                .get(file)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::PermissionDenied))
        }
    }

    pub(crate) fn mouse_caps(name: &str) -> Capabilities {
        Capabilities {
            name: Some(name.to_string()),
            event_types: vec![EV_SYN, EV_KEY, EV_REL],
            relative_xy: true,
            primary_button: true,
        }
    }

    pub(crate) fn keyboard_caps(name: &str) -> Capabilities {
        Capabilities {
            name: Some(name.to_string()),
            event_types: vec![EV_SYN, EV_KEY],
            relative_xy: false,
            primary_button: false,
        }
    }

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            std::fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn candidates_are_sorted_event_nodes_only() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["event2", "mice", "event10", "mouse0", "event0"]);
        std::fs::create_dir(tmp.path().join("by-id")).unwrap();

        let catalog = DeviceCatalog::with_probe(tmp.path(), TableProbe::default());
        let names: Vec<String> = catalog
            .candidates()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["event0", "event10", "event2"]);
    }

    #[test]
    fn picks_first_pointer_and_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["event0", "event1", "event3", "event4"]);
        let probe = TableProbe::default()
            .with("event0", keyboard_caps("Power Button"))
            .with("event1", keyboard_caps("AT Translated Set 2 keyboard"))
            .with("event3", mouse_caps("Logitech Trackball"))
            .with("event4", mouse_caps("ImPS/2 Generic Wheel Mouse"));
        let catalog = DeviceCatalog::with_probe(tmp.path(), probe);

        let first = catalog.find_pointer_device();
        assert_eq!(first, Some(tmp.path().join("event3")));
        assert_eq!(catalog.find_pointer_device(), first);
    }

    #[test]
    fn probe_failures_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["event0", "event1"]);
        // event0 is absent from the table, so probing it fails.
        let probe = TableProbe::default().with("event1", mouse_caps("USB Optical Mouse"));
        let catalog = DeviceCatalog::with_probe(tmp.path(), probe);

        assert_eq!(
            catalog.find_pointer_device(),
            Some(tmp.path().join("event1"))
        );
    }

    #[test]
    fn no_pointer_or_missing_dir_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["event0"]);
        let probe = TableProbe::default().with("event0", keyboard_caps("Sleep Button"));
        assert_eq!(
            DeviceCatalog::with_probe(tmp.path(), probe).find_pointer_device(),
            None
        );

        let gone = tmp.path().join("does-not-exist");
        let catalog = DeviceCatalog::with_probe(gone, TableProbe::default());
        assert!(catalog.candidates().is_empty());
        assert_eq!(catalog.find_pointer_device(), None);
    }

    #[test]
    fn scan_reports_rejections() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), &["event0", "event1", "event2"]);
        let probe = TableProbe::default()
            .with("event0", keyboard_caps("Power Button"))
            .with("event2", mouse_caps("USB Optical Mouse"));
        let catalog = DeviceCatalog::with_probe(tmp.path(), probe);

        let report = catalog.scan();
        assert_eq!(report.len(), 3);
        assert_eq!(report[0].rejection, Some(Rejection::NotPointer));
        assert_eq!(report[0].name.as_deref(), Some("Power Button"));
        assert!(matches!(report[1].rejection, Some(Rejection::ProbeFailed(_))));
        assert!(report[2].supports_pointer_events);
        assert_eq!(report[2].rejection, None);
    }
}
