//! Discovery descriptors.
//!
//! [`DeviceDescriptor`] is a lightweight, serializable description of one
//! candidate node produced while scanning. It is transient: nothing is persisted.
//!
//! # Conventions
//! - `path` is the node path (e.g. `/dev/input/event5`). Event node numbering
//!   changes across reboots and replugs; treat it as diagnostic, not identity.
//! - `name` is the driver-reported name when the probe succeeded.
//! - `rejection` is `None` for pointer devices, otherwise it says where the
//!   candidate dropped out.

use serde::Serialize;
use std::path::PathBuf;

/// Where a candidate dropped out of pointer discovery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "detail", rename_all = "kebab-case")]
pub enum Rejection {
    /// The capability query failed (permissions, node vanished).
    ProbeFailed(String),
    /// Probed fine, but the node lacks relative motion or a primary button.
    NotPointer,
}

/// Snapshot of one candidate node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceDescriptor {
    pub path: PathBuf,
    pub name: Option<String>,
    pub supports_pointer_events: bool,
    pub rejection: Option<Rejection>,
}

impl std::fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.path.display(),
            self.name.as_deref().unwrap_or("unnamed")
        )
    }
}
