//! Engine-facing stream adapter.
//!
//! Decode engines speak a fixed callback contract modeled after `fread`,
//! `fwrite`, `fseek`, and `ftell`: reads and writes return the byte count
//! actually transferred, seeks return 0 on success and −1 on failure, and
//! tell returns a signed absolute offset. [`StreamIo`] translates any
//! [`ByteStream`] into that shape.
//!
//! The adapter carries no per-call state: a single instance may service
//! every concurrent decode, each call threading its own stream handle.

use crate::stream::ByteStream;

/// Seek origin for [`StreamIo::seek`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Absolute offset from the start of the stream.
    Start,
    /// Offset relative to the current cursor.
    Current,
    /// Offset relative to the end. Undefined on sequential streams.
    End,
}

/// Stateless adapter exposing the engine's four stream primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct StreamIo;

impl StreamIo {
    /// Read up to `size × count` bytes into `buf`. Returns bytes read;
    /// short reads at end-of-stream are valid.
    pub fn read(&self, stream: &mut dyn ByteStream, buf: &mut [u8], size: usize, count: usize) -> usize {
        let requested = size.saturating_mul(count).min(buf.len());
        stream.read(&mut buf[..requested])
    }

    /// Write up to `size × count` bytes from `buf`. Returns bytes written.
    ///
    /// The write path exists only as the symmetric half of the engine
    /// contract; nothing in this crate encodes images.
    pub fn write(&self, stream: &mut dyn ByteStream, buf: &[u8], size: usize, count: usize) -> usize {
        let requested = size.saturating_mul(count).min(buf.len());
        stream.write(&buf[..requested])
    }

    /// Seek relative to `origin`. Returns 0 on success, −1 on failure or
    /// on an end-relative seek against a sequential stream; the cursor is
    /// unmoved on failure.
    pub fn seek(&self, stream: &mut dyn ByteStream, offset: i64, origin: SeekOrigin) -> i32 {
        match origin {
            SeekOrigin::Start => {
                if offset >= 0 && stream.seek_to(offset as u64) {
                    return 0;
                }
            }
            SeekOrigin::Current => {
                let target = stream.position() as i64 + offset;
                if target >= 0 && stream.seek_to(target as u64) {
                    return 0;
                }
            }
            SeekOrigin::End => {
                if !stream.is_sequential() {
                    let end = stream.position() + stream.bytes_available();
                    let target = end as i64 + offset;
                    if target >= 0 && stream.seek_to(target as u64) {
                        return 0;
                    }
                }
                // Sequential streams cannot service end-relative seeks.
            }
        }
        -1
    }

    /// Current absolute cursor offset.
    pub fn tell(&self, stream: &mut dyn ByteStream) -> i64 {
        stream.position() as i64
    }
}
