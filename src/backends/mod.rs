//! Input backends for `mouse-reader`.
//!
//! Implementations of [`EventSource`](crate::device::EventSource):
//!
//! - **`linux`**: evdev node discovery and blocking record reads.
//! - **`virtual_input`**: an in-memory mouse fed by the host, for tests and demos.
//!
//! # Feature flags
//! - **`evdev`**: enables the evdev capability probe used by auto-discovery
//!   (default). Without it, discovery needs a caller-supplied
//!   [`CapabilityProbe`](crate::device::CapabilityProbe).
//!
//! Nothing here creates uinput devices; this crate only reads.

pub mod linux;
pub mod virtual_input;
