//! Canonical in-memory image representation.
//!
//! Every decoded bitmap ends up in one of a fixed set of packed layouts,
//! with scanlines aligned to 4 bytes and, for indexed layouts, an
//! attached color table. Absence is a value, not a null: the process-wide
//! [`Image::none`] sentinel is built once, compared by equality, and
//! stays distinguishable from any valid image by construction rule.

use std::sync::OnceLock;

use crate::palette::ColorTable;

/// Pixel layout of a canonical image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Degenerate layout of the "no image" sentinel.
    Invalid,
    /// 1-bit monochrome, most significant bit first.
    Mono1,
    /// 8-bit indices into the attached color table.
    Indexed8,
    /// Packed 16-bit, 5 bits per channel.
    Rgb555,
    /// Packed 16-bit, 5-6-5 bits per channel.
    Rgb565,
    /// 24-bit color stored as 32-bit words, high byte unused (opaque).
    Rgb32,
    /// 32-bit color with alpha in the high byte.
    Argb32,
}

impl PixelLayout {
    /// Encoded bits per pixel of this layout.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Invalid => 0,
            Self::Mono1 => 1,
            Self::Indexed8 => 8,
            Self::Rgb555 | Self::Rgb565 => 16,
            Self::Rgb32 | Self::Argb32 => 32,
        }
    }

    /// Whether pixels are indices into a color table.
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Mono1 | Self::Indexed8)
    }
}

/// A decoded image in one of the canonical layouts.
///
/// Compared by value; see [`Image::none`] for the absence sentinel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    layout: PixelLayout,
    stride: usize,
    data: Vec<u8>,
    palette: ColorTable,
}

static IMAGE_NONE: OnceLock<Image> = OnceLock::new();

impl Image {
    /// Allocate a zeroed image of the given dimensions and layout.
    ///
    /// Zero width or height, or the `Invalid` layout, degenerates to a
    /// value equal to [`Image::none`] — absence is decided by the
    /// construction rule, not a separate flag.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Image {
        if width == 0 || height == 0 || layout == PixelLayout::Invalid {
            return Image::degenerate();
        }
        let stride = scanline_stride(width, layout);
        Image {
            width,
            height,
            layout,
            stride,
            data: vec![0; stride * height as usize],
            palette: ColorTable::new(),
        }
    }

    fn degenerate() -> Image {
        Image {
            width: 0,
            height: 0,
            layout: PixelLayout::Invalid,
            stride: 0,
            data: Vec::new(),
            palette: ColorTable::new(),
        }
    }

    /// The process-wide "no image" sentinel, built once and immutable.
    pub fn none() -> &'static Image {
        IMAGE_NONE.get_or_init(Image::degenerate)
    }

    /// Whether this value is the "no image" sentinel.
    pub fn is_none(&self) -> bool {
        *self == *Image::none()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Bytes per scanline, 4-byte aligned.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Packed pixel data, `stride × height` bytes, top-down.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// One scanline of packed pixels.
    pub fn scanline(&self, row: u32) -> &[u8] {
        let start = row as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// Color table for indexed layouts; empty otherwise.
    pub fn color_table(&self) -> &ColorTable {
        &self.palette
    }

    /// Attach a color table. Composition step for indexed layouts; the
    /// converter itself returns pixel data only.
    pub fn set_color_table(&mut self, palette: ColorTable) {
        self.palette = palette;
    }
}

/// Scanline byte width for `width` pixels of `layout`, rounded up to a
/// 4-byte boundary.
fn scanline_stride(width: u32, layout: PixelLayout) -> usize {
    let bits = width as usize * layout.bits_per_pixel() as usize;
    bits.div_ceil(32) * 4
}
