use crate::domain::tracker::ActionCall;
use crate::error::{ActionError, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads action calls from a newline-delimited JSON source.
///
/// Each non-blank line holds one call. A line that fails to parse yields an
/// error item; reading continues with the next line.
pub struct ActionCallReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ActionCallReader<R> {
    /// Creates a new `ActionCallReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes calls.
    pub fn calls(self) -> impl Iterator<Item = Result<ActionCall>> {
        self.reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(serde_json::from_str(&line).map_err(ActionError::from)),
            Err(e) => Some(Err(ActionError::from(e))),
        })
    }
}
