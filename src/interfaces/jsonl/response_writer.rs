use crate::domain::tracker::{ActionFailure, ActionResponse};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Writes one JSON line per executed call.
pub struct ActionResponseWriter<W: Write> {
    writer: W,
}

impl<W: Write> ActionResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { writer: sink }
    }

    pub fn write_response(&mut self, response: &ActionResponse) -> Result<()> {
        self.write_line(response)
    }

    pub fn write_failure(&mut self, failure: &ActionFailure) -> Result<()> {
        self.write_line(failure)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
