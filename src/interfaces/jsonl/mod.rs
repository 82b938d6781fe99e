//! Newline-delimited JSON transport for action calls and their results.

pub mod call_reader;
pub mod response_writer;
