//! Rewindable in-memory body stream.

use crate::utils::error::{Result, SealedHttpError};
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

/// Message body handed to `http::Request` / `http::Response`.
///
/// The bytes are written once and the cursor is rewound, so readers always
/// start at byte zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBody {
    inner: Cursor<Vec<u8>>,
}

impl MessageBody {
    /// Allocates a buffer, writes `input` into it and rewinds.
    ///
    /// Fails with [`SealedHttpError::Stream`] when the buffer cannot be
    /// allocated or written.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(input.len())
            .map_err(|e| SealedHttpError::Stream(format!("Could not create stream: {}", e)))?;

        let mut inner = Cursor::new(buffer);
        inner
            .write_all(input)
            .map_err(|e| SealedHttpError::Stream(format!("Could not write stream: {}", e)))?;
        inner
            .rewind()
            .map_err(|e| SealedHttpError::Stream(format!("Could not rewind stream: {}", e)))?;

        Ok(Self { inner })
    }

    /// The full body, independent of the current read position.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }

    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl AsRef<[u8]> for MessageBody {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Read for MessageBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for MessageBody {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}
