//! Color table reconstruction for indexed bitmaps.
//!
//! Indexed (≤ 8 bpp) bitmaps carry a palette of RGB entries and,
//! optionally, a per-index transparency table. The builder merges the two
//! into an ordered table of RGBA entries: alpha defaults to opaque and is
//! overwritten from the transparency table where one exists. The table is
//! exactly `colors_used` long — never the full palette capacity.

use std::sync::OnceLock;

use rgb::{RGB8, RGBA8};

use crate::engine::DecodedBitmap;

/// Ordered color table attached to indexed images.
pub type ColorTable = Vec<RGBA8>;

static PALETTE_NONE: OnceLock<ColorTable> = OnceLock::new();

/// The process-wide "no palette" sentinel, built once and immutable.
///
/// Compares equal to any explicitly empty color table.
pub fn none() -> &'static ColorTable {
    PALETTE_NONE.get_or_init(ColorTable::new)
}

/// Whether `table` is the "no palette" sentinel.
pub fn is_none(table: &ColorTable) -> bool {
    *table == *none()
}

/// Build the color table of an indexed bitmap.
///
/// Applies only when the bitmap is at most 8 bits per pixel; deeper
/// bitmaps, and bitmaps with no used colors, yield the sentinel.
///
/// Entries are read in faithful red, green, blue order with opaque
/// alpha, then entries `0..transparency_count` take alpha from the
/// transparency table, RGB unchanged. Entries beyond the transparency
/// table stay fully opaque.
pub fn from_bitmap<B: DecodedBitmap>(bitmap: &B) -> ColorTable {
    if bitmap.bits_per_pixel() > 8 {
        return none().clone();
    }
    let colors_used = bitmap.colors_used() as usize;
    if colors_used == 0 {
        return none().clone();
    }

    let palette = bitmap.palette();
    let mut table: ColorTable = (0..colors_used)
        .map(|i| {
            let entry = palette.get(i).copied().unwrap_or(RGB8::new(0, 0, 0));
            RGBA8::new(entry.r, entry.g, entry.b, 0xFF)
        })
        .collect();

    if bitmap.is_transparent() {
        for (entry, &alpha) in table.iter_mut().zip(bitmap.transparency_table()) {
            entry.a = alpha;
        }
    }

    table
}
