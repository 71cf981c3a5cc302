//! Fixed-layout decoder for kernel `struct input_event` records.
//!
//! Layout, in host byte order:
//!
//! | offset             | width            | field                      |
//! |--------------------|------------------|----------------------------|
//! | 0                  | 2 × `c_long`     | `struct timeval` (ignored) |
//! | `TIMESTAMP_LEN`    | 2                | `type: u16`                |
//! | `TIMESTAMP_LEN+2`  | 2                | `code: u16`                |
//! | `TIMESTAMP_LEN+4`  | 4                | `value: i32`               |
//!
//! The layout is the kernel's input ABI for this host. It is read with
//! `from_ne_bytes` and is not made endianness-generic.

use crate::event::DecodedEvent;
use std::collections::HashMap;
use std::mem::size_of;
use std::os::raw::c_long;
use std::sync::LazyLock;
use thiserror::Error;

/// Width of the leading `struct timeval` (`tv_sec` + `tv_usec`).
pub const TIMESTAMP_LEN: usize = 2 * size_of::<c_long>();

/// Width of one record as delivered by a single `read(2)`.
pub const RECORD_SIZE: usize = TIMESTAMP_LEN + 8;

const TYPE_OFFSET: usize = TIMESTAMP_LEN;
const CODE_OFFSET: usize = TIMESTAMP_LEN + 2;
const VALUE_OFFSET: usize = TIMESTAMP_LEN + 4;

/// Name returned for codes the table does not know.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Compiled-in `(code, name)` pairs. Names are the kernel constant names.
const CODE_NAMES: &[(u16, &str)] = &[
    // Generic numbered buttons (BTN_MISC range).
    (0x100, "BTN_0"),
    (0x101, "BTN_1"),
    (0x102, "BTN_2"),
    (0x103, "BTN_3"),
    (0x104, "BTN_4"),
    (0x105, "BTN_5"),
    (0x106, "BTN_6"),
    (0x107, "BTN_7"),
    (0x108, "BTN_8"),
    (0x109, "BTN_9"),
    // Mouse buttons (BTN_MOUSE range).
    (0x110, "BTN_LEFT"),
    (0x111, "BTN_RIGHT"),
    (0x112, "BTN_MIDDLE"),
    (0x113, "BTN_SIDE"),
    (0x114, "BTN_EXTRA"),
    (0x115, "BTN_FORWARD"),
    (0x116, "BTN_BACK"),
    (0x117, "BTN_TASK"),
    // Tool and touch buttons reported by touchpads and tablet-style pointers.
    (0x140, "BTN_TOOL_PEN"),
    (0x141, "BTN_TOOL_RUBBER"),
    (0x142, "BTN_TOOL_BRUSH"),
    (0x143, "BTN_TOOL_PENCIL"),
    (0x144, "BTN_TOOL_AIRBRUSH"),
    (0x145, "BTN_TOOL_FINGER"),
    (0x146, "BTN_TOOL_MOUSE"),
    (0x147, "BTN_TOOL_LENS"),
    (0x148, "BTN_TOOL_QUINTTAP"),
    (0x14a, "BTN_TOUCH"),
    (0x14b, "BTN_STYLUS"),
    (0x14c, "BTN_STYLUS2"),
    (0x14d, "BTN_TOOL_DOUBLETAP"),
    (0x14e, "BTN_TOOL_TRIPLETAP"),
    (0x14f, "BTN_TOOL_QUADTAP"),
    // Wheel buttons (BTN_WHEEL range).
    (0x150, "BTN_GEAR_DOWN"),
    (0x151, "BTN_GEAR_UP"),
];

static CODE_NAME_TABLE: LazyLock<HashMap<u16, &'static str>> =
    LazyLock::new(|| CODE_NAMES.iter().copied().collect());

/// A record whose byte width does not match [`RECORD_SIZE`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed input record: expected {expected} bytes, got {actual}")]
    MalformedRecord { expected: usize, actual: usize },
}

/// Look up the display name for `code`.
///
/// Total over `u16`: unmapped codes yield [`UNKNOWN_NAME`].
pub fn name_of(code: u16) -> &'static str {
    CODE_NAME_TABLE.get(&code).copied().unwrap_or(UNKNOWN_NAME)
}

/// Decode one raw record.
///
/// `raw` must be exactly [`RECORD_SIZE`] bytes; a short (or long) buffer is a
/// [`DecodeError::MalformedRecord`], never a partially filled event.
pub fn decode(raw: &[u8]) -> Result<DecodedEvent, DecodeError> {
    if raw.len() != RECORD_SIZE {
        return Err(DecodeError::MalformedRecord {
            expected: RECORD_SIZE,
            actual: raw.len(),
        });
    }

    let event_type = u16::from_ne_bytes([raw[TYPE_OFFSET], raw[TYPE_OFFSET + 1]]);
    let code = u16::from_ne_bytes([raw[CODE_OFFSET], raw[CODE_OFFSET + 1]]);
    let value = i32::from_ne_bytes([
        raw[VALUE_OFFSET],
        raw[VALUE_OFFSET + 1],
        raw[VALUE_OFFSET + 2],
        raw[VALUE_OFFSET + 3],
    ]);

    Ok(DecodedEvent {
        event_type,
        code,
        value,
        name: name_of(code),
    })
}

/// Encode a record with a zeroed timestamp, in the same layout [`decode`] reads.
pub fn encode(event_type: u16, code: u16, value: i32) -> [u8; RECORD_SIZE] {
    let mut raw = [0u8; RECORD_SIZE];
    raw[TYPE_OFFSET..CODE_OFFSET].copy_from_slice(&event_type.to_ne_bytes());
    raw[CODE_OFFSET..VALUE_OFFSET].copy_from_slice(&code.to_ne_bytes());
    raw[VALUE_OFFSET..RECORD_SIZE].copy_from_slice(&value.to_ne_bytes());
    raw
}
