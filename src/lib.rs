//! # zenbridge
//!
//! Bridge between callback-driven bitmap decode engines and a canonical
//! in-memory image representation.
//!
//! Decode engines of the classic C lineage read their input through four
//! caller-supplied callbacks shaped after `fread`/`fwrite`/`fseek`/`ftell`
//! and hand back opaque bitmap handles that must be introspected,
//! converted, and explicitly released. This crate supplies the plumbing
//! around such an engine:
//!
//! - [`StreamIo`] adapts any [`ByteStream`] to the engine's callback
//!   contract, C-style return conventions included.
//! - [`detect_format`] sniffs magic signatures (with an extension-hint
//!   fallback) without consuming the stream.
//! - [`to_image`] maps a decoded bitmap's bit depth and channel masks to
//!   one of the canonical [`PixelLayout`]s, promoting 4→8 and 24→32 bpp
//!   and telling RGB555 from RGB565 by mask inspection.
//! - [`palette::from_bitmap`] rebuilds the color table of indexed
//!   bitmaps, merging per-index transparency into entry alphas.
//! - [`Loader`] composes the above and guarantees exactly one handle
//!   release on every path via the [`Decoded`] guard.
//!
//! Absence is a value: [`Image::none`] and [`palette::none`] are built
//! once per process and compared by equality, so "no image" never means
//! a null reference.
//!
//! ## Non-goals
//!
//! The engine itself (container parsing, entropy decoding) is consumed
//! through the [`DecodeEngine`] trait, never implemented here. No image
//! editing, no color management, no encode path beyond the symmetric
//! stream-write stub.
//!
//! ## Usage
//!
//! ```no_run
//! use zenbridge::{Loader, MemoryStream};
//! # struct MyEngine;
//! # impl zenbridge::DecodeEngine for MyEngine {
//! #     type Bitmap = Bitmap;
//! #     fn decode_stream(&self, _: zenbridge::ContainerFormat, _: &mut dyn zenbridge::ByteStream)
//! #         -> Result<Bitmap, zenbridge::BridgeError> { unimplemented!() }
//! #     fn release(&self, _: Bitmap) {}
//! # }
//! # struct Bitmap;
//! # impl zenbridge::DecodedBitmap for Bitmap {
//! #     fn kind(&self) -> zenbridge::ImageKind { zenbridge::ImageKind::Bitmap }
//! #     fn width(&self) -> u32 { 0 }
//! #     fn height(&self) -> u32 { 0 }
//! #     fn bits_per_pixel(&self) -> u32 { 0 }
//! #     fn red_mask(&self) -> u32 { 0 }
//! #     fn green_mask(&self) -> u32 { 0 }
//! #     fn blue_mask(&self) -> u32 { 0 }
//! #     fn colors_used(&self) -> u32 { 0 }
//! #     fn palette(&self) -> &[zenbridge::RGB8] { &[] }
//! #     fn is_transparent(&self) -> bool { false }
//! #     fn transparency_table(&self) -> &[u8] { &[] }
//! #     fn extract_scanlines(&self, _: &mut [u8], _: usize, _: u32,
//! #         _: zenbridge::ChannelMasks, _: bool) -> Result<(), zenbridge::BridgeError> { Ok(()) }
//! # }
//!
//! let loader = Loader::new(MyEngine);
//! let mut stream = MemoryStream::from_slice(&[/* image bytes */]);
//! let image = loader.load_stream(&mut stream, Some("bmp"));
//! if !image.is_none() {
//!     println!("{}x{} {:?}", image.width(), image.height(), image.layout());
//! }
//! ```

#![forbid(unsafe_code)]

mod convert;
mod engine;
mod error;
mod format;
mod image;
mod io;
mod load;
pub mod palette;
mod stream;

// Re-exports
pub use convert::{to_image, RGB555_MASKS, RGB565_MASKS, RGBA32_MASKS};
pub use engine::{ChannelMasks, Decoded, DecodeEngine, DecodedBitmap, ImageKind};
pub use error::BridgeError;
pub use format::{detect_format, ContainerFormat};
pub use image::{Image, PixelLayout};
pub use io::{SeekOrigin, StreamIo};
pub use load::Loader;
pub use palette::ColorTable;
pub use rgb::{RGB8, RGBA8};
pub use stream::{ByteStream, MemoryStream, SeekableStream, Sequential};
