//! Decoded bitmap → canonical image conversion.
//!
//! Dispatches on the bitmap's bit depth, picks the canonical target
//! layout, and has the engine extract raw scanlines directly into the
//! image's pixel storage — promoting 4-bit to 8-bit and 24-bit to 32-bit
//! on the way, and telling 555 from 565 packed 16-bit layouts by their
//! channel masks. Unsupported inputs are a defined outcome, not an
//! error: the result is the "no image" sentinel.

use crate::engine::{ChannelMasks, DecodedBitmap, ImageKind};
use crate::image::{Image, PixelLayout};

/// Masks of a 16-bit 5-5-5 packed pixel.
pub const RGB555_MASKS: ChannelMasks = ChannelMasks::new(0x7C00, 0x03E0, 0x001F);

/// Masks of a 16-bit 5-6-5 packed pixel.
pub const RGB565_MASKS: ChannelMasks = ChannelMasks::new(0xF800, 0x07E0, 0x001F);

/// The engine's default 32-bit RGBA masks (little-endian byte order).
pub const RGBA32_MASKS: ChannelMasks = ChannelMasks::new(0x00FF_0000, 0x0000_FF00, 0x0000_00FF);

/// Convert a decoded bitmap into a canonical image.
///
/// A missing handle, a non-bitmap kind, an unhandled bit depth, or a
/// failed extraction all yield a value equal to [`Image::none`]. The
/// returned image carries pixel data only; attaching the color table for
/// indexed layouts is the caller's composition step (see
/// [`crate::Loader`]).
pub fn to_image<B: DecodedBitmap>(bitmap: Option<&B>) -> Image {
    let Some(bitmap) = bitmap else {
        return Image::none().clone();
    };
    if bitmap.kind() != ImageKind::Bitmap {
        return Image::none().clone();
    }

    let width = bitmap.width();
    let height = bitmap.height();

    match bitmap.bits_per_pixel() {
        1 => extract(bitmap, width, height, PixelLayout::Mono1, 1, ChannelMasks::NONE),
        // No native 4-bit target exists; promote to 8-bit indices.
        4 => extract(bitmap, width, height, PixelLayout::Indexed8, 8, ChannelMasks::NONE),
        8 => extract(bitmap, width, height, PixelLayout::Indexed8, 8, ChannelMasks::NONE),
        16 => {
            let masks = ChannelMasks::new(bitmap.red_mask(), bitmap.green_mask(), bitmap.blue_mask());
            if masks == RGB555_MASKS {
                extract(bitmap, width, height, PixelLayout::Rgb555, 16, RGB555_MASKS)
            } else {
                extract(bitmap, width, height, PixelLayout::Rgb565, 16, RGB565_MASKS)
            }
        }
        24 => extract(bitmap, width, height, PixelLayout::Rgb32, 32, RGBA32_MASKS),
        32 => extract(bitmap, width, height, PixelLayout::Argb32, 32, RGBA32_MASKS),
        _ => Image::none().clone(),
    }
}

/// Allocate the target image and extract scanlines into it, top-down.
fn extract<B: DecodedBitmap>(
    bitmap: &B,
    width: u32,
    height: u32,
    layout: PixelLayout,
    dst_bpp: u32,
    masks: ChannelMasks,
) -> Image {
    let mut image = Image::new(width, height, layout);
    if image.is_none() {
        return image;
    }
    let pitch = image.stride();
    match bitmap.extract_scanlines(image.bytes_mut(), pitch, dst_bpp, masks, true) {
        Ok(()) => image,
        Err(_) => Image::none().clone(),
    }
}
