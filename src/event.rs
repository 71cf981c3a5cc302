//! Events and event-type constants.
//!
//! Every record read from an evdev node becomes one [`DecodedEvent`]: the raw
//! `(type, code, value)` triple plus a display name looked up by `code`.
//!
//! ## Value conventions
//! - **Buttons (`EV_KEY`):** `1` = pressed, `0` = released, `2` = autorepeat.
//! - **Relative axes (`EV_REL`):** signed motion delta in device counts.
//! - **Sync (`EV_SYN`):** marks the end of a batch; `code` is usually `0`.
//!
//! Names are keyed by `code` alone, so a relative-axis code and a button code
//! that collide numerically resolve to the same entry. Codes the table does not
//! know carry [`UNKNOWN_NAME`](crate::codec::UNKNOWN_NAME).

use serde::{Deserialize, Serialize};

/// Synchronization marker.
pub const EV_SYN: u16 = 0x00;
/// Key or button state change.
pub const EV_KEY: u16 = 0x01;
/// Relative axis motion.
pub const EV_REL: u16 = 0x02;
/// Absolute axis position.
pub const EV_ABS: u16 = 0x03;
/// Miscellaneous (scan codes, timestamps).
pub const EV_MSC: u16 = 0x04;

/// Short label for an event type, for log output.
pub fn type_name(event_type: u16) -> &'static str {
    match event_type {
        EV_SYN => "EV_SYN",
        EV_KEY => "EV_KEY",
        EV_REL => "EV_REL",
        EV_ABS => "EV_ABS",
        EV_MSC => "EV_MSC",
        _ => "EV_OTHER",
    }
}

/// One decoded input record.
///
/// Produced by [`codec::decode`](crate::codec::decode) from exactly one raw record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedEvent {
    /// Event type (`EV_KEY`, `EV_REL`, ...).
    pub event_type: u16,
    /// Button or axis code.
    pub code: u16,
    /// Payload: press state for buttons, delta for relative axes.
    pub value: i32,
    /// Display name for `code`, or the unknown sentinel.
    pub name: &'static str,
}

impl DecodedEvent {
    /// `true` for sync markers (`code == 0`), which are never forwarded upstream.
    #[inline]
    pub fn is_sync_marker(&self) -> bool {
        self.code == 0
    }
}

/// Message handed to upstream sinks for each forwarded event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMessage {
    pub key_code: u16,
    pub key_name: String,
    pub key_pressed: bool,
}

impl KeyMessage {
    /// Build the upstream message for `event`.
    ///
    /// Returns `None` for `code == 0`. Only the code is filtered; a zero `value`
    /// is forwarded as `key_pressed = false`.
    pub fn from_event(event: &DecodedEvent) -> Option<Self> {
        if event.is_sync_marker() {
            return None;
        }
        Some(Self {
            key_code: event.code,
            key_name: event.name.to_string(),
            key_pressed: event.value != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: u16, value: i32) -> DecodedEvent {
        DecodedEvent {
            event_type: EV_KEY,
            code,
            value,
            name: "BTN_LEFT",
        }
    }

    #[test]
    fn sync_code_is_not_forwarded() {
        assert_eq!(KeyMessage::from_event(&event(0, 1)), None);
        assert_eq!(KeyMessage::from_event(&event(0, 0)), None);
    }

    #[test]
    fn press_and_release_map_to_key_pressed() {
        let down = KeyMessage::from_event(&event(0x110, 1)).unwrap();
        assert!(down.key_pressed);
        assert_eq!(down.key_code, 0x110);
        assert_eq!(down.key_name, "BTN_LEFT");

        let up = KeyMessage::from_event(&event(0x110, 0)).unwrap();
        assert!(!up.key_pressed);
    }

    #[test]
    fn negative_motion_counts_as_pressed() {
        let msg = KeyMessage::from_event(&event(1, -3)).unwrap();
        assert!(msg.key_pressed);
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(EV_REL), "EV_REL");
        assert_eq!(type_name(0x1f), "EV_OTHER");
    }
}
