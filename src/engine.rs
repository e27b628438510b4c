//! Decode-engine boundary.
//!
//! The engine that parses containers and undoes compression is an external
//! collaborator. This crate sees it through two traits: [`DecodeEngine`]
//! produces and releases opaque decoded-bitmap handles, and
//! [`DecodedBitmap`] answers the introspection queries the converter
//! needs (dimensions, depth, channel masks, palette, transparency) plus
//! one raw scanline extraction operation.
//!
//! Engines pull their input bytes through [`crate::StreamIo`], which
//! presents any [`ByteStream`] in the callback shape they expect.
//!
//! Handles are not thread-safe: a handle is owned and manipulated by one
//! thread for its whole lifetime, conversion and release included.

use std::ops::Deref;

use rgb::RGB8;

use crate::error::BridgeError;
use crate::format::ContainerFormat;
use crate::stream::ByteStream;

/// The engine's classification of a decoded bitmap.
///
/// Only [`ImageKind::Bitmap`] (1–32 bpp standard bitmaps) is convertible
/// to a canonical image; every other kind yields the "no image" sentinel.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    /// Standard bitmap: 1, 4, 8, 16, 24 or 32 bits per pixel.
    Bitmap,
    UInt16,
    Int16,
    UInt32,
    Int32,
    Float,
    Double,
    Complex,
    Rgb16,
    Rgba16,
    RgbF32,
    RgbaF32,
}

/// Bit masks identifying each color channel within a packed pixel word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelMasks {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl ChannelMasks {
    /// No masks; used for indexed and monochrome extraction.
    pub const NONE: ChannelMasks = ChannelMasks { red: 0, green: 0, blue: 0 };

    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }
}

/// Introspection surface of an opaque decoded-bitmap handle.
pub trait DecodedBitmap {
    fn kind(&self) -> ImageKind;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn bits_per_pixel(&self) -> u32;

    fn red_mask(&self) -> u32;
    fn green_mask(&self) -> u32;
    fn blue_mask(&self) -> u32;

    /// Number of palette entries actually used. Zero for non-indexed
    /// bitmaps.
    fn colors_used(&self) -> u32;

    /// Palette entries in index order. At least `colors_used` long for
    /// indexed bitmaps; may be empty otherwise.
    fn palette(&self) -> &[RGB8];

    /// Whether a per-index transparency table is present.
    fn is_transparent(&self) -> bool;

    /// Per-index alpha values, at most `colors_used` long.
    fn transparency_table(&self) -> &[u8];

    /// Convert the bitmap's pixels into `dst` at the requested depth and
    /// channel masks, one scanline per `dst_pitch` bytes. `top_down`
    /// selects canonical top-down row order regardless of the bitmap's
    /// native orientation.
    fn extract_scanlines(
        &self,
        dst: &mut [u8],
        dst_pitch: usize,
        dst_bpp: u32,
        masks: ChannelMasks,
        top_down: bool,
    ) -> Result<(), BridgeError>;
}

/// The external decoding engine.
///
/// `decode_stream` hands back an exclusively owned handle on success.
/// Every handle obtained must be passed to [`DecodeEngine::release`]
/// exactly once; use [`Decoded`] so release happens on every path.
pub trait DecodeEngine {
    type Bitmap: DecodedBitmap;

    /// Decode `stream`, already identified as `format`, into a bitmap
    /// handle.
    fn decode_stream(
        &self,
        format: ContainerFormat,
        stream: &mut dyn ByteStream,
    ) -> Result<Self::Bitmap, BridgeError>;

    /// Release a handle obtained from `decode_stream`.
    fn release(&self, bitmap: Self::Bitmap);
}

// ── RAII release guard ──────────────────────────────────────────────

/// Scoped ownership of a decoded-bitmap handle.
///
/// Dropping the guard releases the handle through the engine, so early
/// returns on unsupported layouts cannot leak it.
pub struct Decoded<'e, E: DecodeEngine> {
    engine: &'e E,
    bitmap: Option<E::Bitmap>,
}

impl<'e, E: DecodeEngine> Decoded<'e, E> {
    pub fn new(engine: &'e E, bitmap: E::Bitmap) -> Self {
        Self { engine, bitmap: Some(bitmap) }
    }
}

impl<E: DecodeEngine> Deref for Decoded<'_, E> {
    type Target = E::Bitmap;

    fn deref(&self) -> &E::Bitmap {
        // Present from construction until drop.
        self.bitmap.as_ref().expect("bitmap handle already released")
    }
}

impl<E: DecodeEngine> Drop for Decoded<'_, E> {
    fn drop(&mut self) {
        if let Some(bitmap) = self.bitmap.take() {
            self.engine.release(bitmap);
        }
    }
}
