// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The output side of a formatting call. The engine only ever appends to a [`Sink`]; it
//! never reads back what it wrote. Everything the engine writes is valid UTF-8.

use std::io::Write;

use crate::SinkError;

pub trait Sink {
    /// Append `data` to the output.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] if the underlying storage rejects the bytes.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), SinkError>;

    /// # Errors
    ///
    /// Returns a [`SinkError`] if the underlying writer fails to flush.
    fn flush(&mut self) -> Result<(), SinkError> { Ok(()) }
}

impl Sink for String {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), SinkError> {
        self.push_str(std::str::from_utf8(data)?);
        Ok(())
    }
}

impl Sink for Vec<u8> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), SinkError> {
        self.extend_from_slice(data);
        Ok(())
    }
}

/// Adapter that lets any [`std::io::Write`] (stdout, a file, a socket) act as a
/// [`Sink`].
#[derive(Debug)]
pub struct IoSink<W: Write> {
    pub inner: W,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self { Self { inner } }

    pub fn into_inner(self) -> W { self.inner }
}

impl<W: Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), SinkError> {
        self.inner.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.inner.flush()?;
        Ok(())
    }
}
