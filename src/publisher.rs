//! Fan-out of decoded events to upstream sinks.
//!
//! The [`Publisher`] owns the forwarding contract: sync markers (`code == 0`)
//! are dropped, every other event becomes a [`KeyMessage`] with
//! `key_pressed = value != 0`, and the message goes to each registered
//! [`KeySink`] in registration order.

use crate::device::{DeviceError, EventSource};
use crate::event::{DecodedEvent, KeyMessage};
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Failure while running the publish loop.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("device fault")]
    Device(#[from] DeviceError),
    #[error("failed to encode message")]
    Encode(#[from] serde_json::Error),
    #[error("sink write failed")]
    Io(#[from] io::Error),
}

/// Receives forwarded key messages.
pub trait KeySink {
    fn publish(&mut self, msg: &KeyMessage) -> Result<(), PublishError>;
}

/// Writes one JSON object per line and flushes after each message.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> KeySink for JsonLinesSink<W> {
    fn publish(&mut self, msg: &KeyMessage) -> Result<(), PublishError> {
        serde_json::to_writer(&mut self.out, msg)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Message counters for one publisher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PublishStats {
    /// Events forwarded to sinks.
    pub published: u64,
    /// Sync markers dropped by the `code == 0` filter.
    pub suppressed: u64,
}

/// Applies the forwarding filter and dispatches to sinks.
#[derive(Default)]
pub struct Publisher {
    sinks: Vec<Box<dyn KeySink>>,
    stats: PublishStats,
}

impl Publisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sink(&mut self, sink: impl KeySink + 'static) -> &mut Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn stats(&self) -> PublishStats {
        self.stats
    }

    /// Forward one event. Returns the message if it passed the filter.
    pub fn dispatch(&mut self, event: &DecodedEvent) -> Result<Option<KeyMessage>, PublishError> {
        let Some(msg) = KeyMessage::from_event(event) else {
            self.stats.suppressed += 1;
            return Ok(None);
        };
        for sink in self.sinks.iter_mut() {
            sink.publish(&msg)?;
        }
        self.stats.published += 1;
        Ok(Some(msg))
    }

    /// Read from `source` until the session ends.
    ///
    /// An orderly [`DeviceError::Closed`] ends the run with `Ok`. A malformed
    /// record, read failure or sink failure ends it with `Err`; nothing is retried.
    pub fn run<S: EventSource + ?Sized>(&mut self, source: &mut S) -> Result<PublishStats, PublishError> {
        info!(device = source.name(), sinks = self.sinks.len(), "publishing key events");
        loop {
            match source.next_event() {
                Ok(event) => {
                    self.dispatch(&event)?;
                }
                Err(DeviceError::Closed) => {
                    debug!(device = source.name(), stats = ?self.stats, "event source closed");
                    return Ok(self.stats);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
