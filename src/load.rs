//! Top-level decode composition.
//!
//! [`Loader`] glues the pieces together: detect the container format,
//! drive the engine to a decoded-bitmap handle, convert it to a canonical
//! image, attach the color table for indexed layouts, and release the
//! handle unconditionally. Every failure along the way degrades to the
//! "no image" sentinel; nothing here aborts the host process.

use std::fs::File;
use std::path::Path;

use crate::convert;
use crate::engine::{Decoded, DecodeEngine};
use crate::format::{self, ContainerFormat};
use crate::image::Image;
use crate::palette;
use crate::stream::{ByteStream, SeekableStream};

/// Decodes streams and files into canonical images via a pluggable
/// engine.
///
/// The loader holds no per-decode state; one instance can service any
/// number of sequential decodes. Concurrent decodes each need their own
/// stream, but may share the loader.
pub struct Loader<E: DecodeEngine> {
    engine: E,
}

impl<E: DecodeEngine> Loader<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Decode the image held by `stream`.
    ///
    /// `hint` is a filename extension or declared format string used
    /// when content sniffing fails. Returns the canonical image, or the
    /// [`Image::none`] sentinel when the format is unrecognized, the
    /// decode fails, or the decoded layout is unsupported.
    pub fn load_stream(&self, stream: &mut dyn ByteStream, hint: Option<&str>) -> Image {
        let detected = format::detect_format(stream, hint);
        if detected == ContainerFormat::Unknown {
            return Image::none().clone();
        }

        let bitmap = match self.engine.decode_stream(detected, stream) {
            Ok(bitmap) => Decoded::new(&self.engine, bitmap),
            Err(_) => return Image::none().clone(),
        };

        let mut image = convert::to_image(Some(&*bitmap));
        if image.layout().is_indexed() {
            image.set_color_table(palette::from_bitmap(&*bitmap));
        }
        image
        // Guard drop releases the handle, on this and every early path.
    }

    /// Decode the image file at `path`, hinting detection with its
    /// extension.
    pub fn load_path(&self, path: &Path) -> Image {
        let Ok(file) = File::open(path) else {
            return Image::none().clone();
        };
        let hint = path.extension().and_then(|ext| ext.to_str());
        let mut stream = SeekableStream::new(file);
        self.load_stream(&mut stream, hint)
    }
}
