use crate::codec;
use crate::device::{DeviceError, EventSource};
use crate::event::{DecodedEvent, EV_KEY, EV_REL, EV_SYN};
use std::collections::VecDeque;

/// In-memory event source fed by the host.
///
/// Records are queued as raw bytes and decoded on the way out, so a
/// `VirtualMouse` exercises the same codec path as a real node. When the
/// queue runs dry `next_event` reports [`DeviceError::Closed`].
#[derive(Debug, Default)]
pub struct VirtualMouse {
    name: String,
    records: VecDeque<Vec<u8>>,
}

impl VirtualMouse {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: VecDeque::new(),
        }
    }

    /// Inject raw record bytes. Any length is accepted; bad widths fail on read.
    pub fn feed_raw(&mut self, bytes: &[u8]) {
        self.records.push_back(bytes.to_vec());
    }

    /// Inject one well-formed record.
    pub fn feed(&mut self, event_type: u16, code: u16, value: i32) {
        self.feed_raw(&codec::encode(event_type, code, value));
    }

    /// Button press followed by a sync marker.
    pub fn press_button(&mut self, code: u16) {
        self.feed(EV_KEY, code, 1);
        self.sync();
    }

    /// Button release followed by a sync marker.
    pub fn release_button(&mut self, code: u16) {
        self.feed(EV_KEY, code, 0);
        self.sync();
    }

    /// Relative motion on one axis followed by a sync marker.
    pub fn move_axis(&mut self, axis: u16, delta: i32) {
        self.feed(EV_REL, axis, delta);
        self.sync();
    }

    pub fn sync(&mut self) {
        self.feed(EV_SYN, 0, 0);
    }

    pub fn pending(&self) -> usize {
        self.records.len()
    }
}

impl EventSource for VirtualMouse {
    fn next_event(&mut self) -> Result<DecodedEvent, DeviceError> {
        let raw = self.records.pop_front().ok_or(DeviceError::Closed)?;
        Ok(codec::decode(&raw)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
