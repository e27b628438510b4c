//! Byte stream abstraction the adapter drives.
//!
//! [`ByteStream`] is the minimal surface the engine-facing adapter in
//! [`crate::io`] needs: cursor-based reads and writes, absolute seeks, and
//! two queries (`bytes_available`, `is_sequential`) that make end-relative
//! seeking decidable. Streams are borrowed mutably per operation and never
//! owned by the adapter; a given stream must not be driven from two threads.

use std::io::{Read, Seek, SeekFrom, Write};

/// A possibly-sequential sequence of bytes with a read/write cursor.
///
/// Short reads at end-of-stream are valid, not errors. `seek_to` reports
/// success as `bool`; the adapter translates that into the engine's
/// C-style return codes.
pub trait ByteStream {
    /// Read up to `buf.len()` bytes at the cursor. Returns bytes read.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Write `buf` at the cursor. Returns bytes written.
    fn write(&mut self, buf: &[u8]) -> usize;

    /// Move the cursor to an absolute offset. Returns `false` on failure,
    /// leaving the cursor where it was.
    fn seek_to(&mut self, pos: u64) -> bool;

    /// Current absolute cursor offset.
    fn position(&mut self) -> u64;

    /// Bytes remaining between the cursor and the end of the stream.
    fn bytes_available(&mut self) -> u64;

    /// Whether this stream is sequential. Sequential streams do not
    /// support end-relative seeking.
    fn is_sequential(&self) -> bool {
        false
    }
}

// ── In-memory stream ────────────────────────────────────────────────

/// Growable in-memory stream over an owned byte buffer.
#[derive(Clone, Debug, Default)]
pub struct MemoryStream {
    data: Vec<u8>,
    pos: usize,
}

impl MemoryStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }

    /// The full underlying buffer, independent of the cursor.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl ByteStream for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let available = self.data.len().saturating_sub(self.pos);
        let n = buf.len().min(available);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        n
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        let end = self.pos + buf.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.pos..end].copy_from_slice(buf);
        self.pos = end;
        buf.len()
    }

    fn seek_to(&mut self, pos: u64) -> bool {
        if pos > self.data.len() as u64 {
            return false;
        }
        self.pos = pos as usize;
        true
    }

    fn position(&mut self) -> u64 {
        self.pos as u64
    }

    fn bytes_available(&mut self) -> u64 {
        (self.data.len() - self.pos) as u64
    }
}

// ── std::io bridge ──────────────────────────────────────────────────

/// Bridges any `Read + Write + Seek` source (a [`std::fs::File`], an
/// [`std::io::Cursor<Vec<u8>>`]) into a [`ByteStream`].
#[derive(Debug)]
pub struct SeekableStream<T> {
    inner: T,
}

impl<T: Read + Write + Seek> SeekableStream<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: Read + Write + Seek> ByteStream for SeekableStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        // Loop so a short read from the OS is not mistaken for EOF.
        let mut total = 0;
        while total < buf.len() {
            match self.inner.read(&mut buf[total..]) {
                Ok(0) | Err(_) => break,
                Ok(n) => total += n,
            }
        }
        total
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        self.inner.write(buf).unwrap_or(0)
    }

    fn seek_to(&mut self, pos: u64) -> bool {
        self.inner.seek(SeekFrom::Start(pos)).is_ok()
    }

    fn position(&mut self) -> u64 {
        self.inner.stream_position().unwrap_or(0)
    }

    fn bytes_available(&mut self) -> u64 {
        let Ok(pos) = self.inner.stream_position() else {
            return 0;
        };
        let Ok(end) = self.inner.seek(SeekFrom::End(0)) else {
            return 0;
        };
        let _ = self.inner.seek(SeekFrom::Start(pos));
        end.saturating_sub(pos)
    }
}

// ── Sequential marker ───────────────────────────────────────────────

/// Marks a stream as sequential, refusing end-relative seeks in the
/// adapter. Wrap pipe-like sources that cannot report a meaningful end.
#[derive(Clone, Debug)]
pub struct Sequential<S>(pub S);

impl<S: ByteStream> ByteStream for Sequential<S> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.0.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        self.0.write(buf)
    }

    fn seek_to(&mut self, pos: u64) -> bool {
        self.0.seek_to(pos)
    }

    fn position(&mut self) -> u64 {
        self.0.position()
    }

    fn bytes_available(&mut self) -> u64 {
        self.0.bytes_available()
    }

    fn is_sequential(&self) -> bool {
        true
    }
}
