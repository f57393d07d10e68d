//! Dispatcher that writes each intent as one JSON line.

use std::io::Write;

use crate::bridge::SummaryIntent;
use crate::error::{SelectorError, SelectorResult};
use crate::traits::SummaryDispatch;

/// Serializes intents to a writer, one JSON object per line.
///
/// Write failures are logged and counted; dispatch itself cannot fail.
/// Call [`JsonLinesDispatch::finish`] to surface them once dispatching is done.
#[derive(Debug)]
pub struct JsonLinesDispatch<W: Write> {
    writer: W,
    written: usize,
    failed: usize,
    last_error: Option<std::io::Error>,
}

impl<W: Write> JsonLinesDispatch<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            failed: 0,
            last_error: None,
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Hand back the writer, or the last write error if any intent was lost.
    pub fn finish(self) -> SelectorResult<W> {
        match self.last_error {
            Some(source) => Err(SelectorError::DispatchFailed {
                failed: self.failed,
                source,
            }),
            None => Ok(self.writer),
        }
    }

    fn write_intent(&mut self, intent: &SummaryIntent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, intent)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> SummaryDispatch for JsonLinesDispatch<W> {
    fn dispatch(&mut self, intent: SummaryIntent) {
        match self.write_intent(&intent) {
            Ok(()) => self.written += 1,
            Err(e) => {
                self.failed += 1;
                tracing::warn!("Failed to write intent: {}", e);
                self.last_error = Some(e);
            }
        }
    }
}
