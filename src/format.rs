//! Container format detection.
//!
//! Content sniffing first: a bounded prefix is read through the stream
//! adapter, matched against known magic signatures, and the cursor is
//! restored so detection never consumes the stream ahead of the decode.
//! When sniffing yields nothing, a caller-supplied hint (a filename
//! extension or declared format string) breaks the tie. Both failing
//! means [`ContainerFormat::Unknown`], and decoding must not proceed.

use crate::io::{SeekOrigin, StreamIo};
use crate::stream::ByteStream;

/// Bytes of prefix read while sniffing. Enough for every signature below.
const SNIFF_LEN: usize = 16;

/// Container encodings the detector can identify.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    Bmp,
    Png,
    Jpeg,
    Gif,
    Tiff,
    /// PNM family: PBM/PGM/PPM/PAM/PFM.
    Pnm,
    Farbfeld,
    Qoi,
    /// TGA has no magic signature; reachable only via the hint fallback.
    Tga,
    WebP,
    Ico,
    Unknown,
}

impl ContainerFormat {
    /// Map a filename extension or declared format string to a format.
    ///
    /// Case-insensitive; a leading dot is tolerated.
    pub fn from_extension(ext: &str) -> ContainerFormat {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "bmp" | "dib" => Self::Bmp,
            "png" => Self::Png,
            "jpg" | "jpeg" | "jfif" => Self::Jpeg,
            "gif" => Self::Gif,
            "tif" | "tiff" => Self::Tiff,
            "pbm" | "pgm" | "ppm" | "pnm" | "pam" | "pfm" => Self::Pnm,
            "ff" | "farbfeld" => Self::Farbfeld,
            "qoi" => Self::Qoi,
            "tga" | "targa" => Self::Tga,
            "webp" => Self::WebP,
            "ico" | "cur" => Self::Ico,
            _ => Self::Unknown,
        }
    }
}

/// Identify the container format held by `stream`.
///
/// Sniffs a bounded prefix through [`StreamIo`], restoring the cursor to
/// its pre-sniff position, then falls back to `hint` when the content is
/// not recognized.
pub fn detect_format(stream: &mut dyn ByteStream, hint: Option<&str>) -> ContainerFormat {
    let io = StreamIo;
    let start = io.tell(stream);

    let mut prefix = [0u8; SNIFF_LEN];
    let n = io.read(stream, &mut prefix, 1, SNIFF_LEN);
    io.seek(stream, start, SeekOrigin::Start);

    match sniff(&prefix[..n]) {
        ContainerFormat::Unknown => hint
            .map(ContainerFormat::from_extension)
            .unwrap_or(ContainerFormat::Unknown),
        format => format,
    }
}

/// Match `prefix` against known magic signatures.
fn sniff(prefix: &[u8]) -> ContainerFormat {
    if prefix.starts_with(b"BM") {
        ContainerFormat::Bmp
    } else if prefix.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        ContainerFormat::Png
    } else if prefix.starts_with(&[0xFF, 0xD8, 0xFF]) {
        ContainerFormat::Jpeg
    } else if prefix.starts_with(b"GIF87a") || prefix.starts_with(b"GIF89a") {
        ContainerFormat::Gif
    } else if prefix.starts_with(b"II\x2A\x00") || prefix.starts_with(b"MM\x00\x2A") {
        ContainerFormat::Tiff
    } else if is_pnm_magic(prefix) {
        ContainerFormat::Pnm
    } else if prefix.starts_with(b"farbfeld") {
        ContainerFormat::Farbfeld
    } else if prefix.starts_with(b"qoif") {
        ContainerFormat::Qoi
    } else if prefix.len() >= 12 && prefix.starts_with(b"RIFF") && &prefix[8..12] == b"WEBP" {
        ContainerFormat::WebP
    } else if prefix.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        ContainerFormat::Ico
    } else {
        ContainerFormat::Unknown
    }
}

/// `P1`..`P7` followed by whitespace, or the PFM variants `Pf`/`PF`.
fn is_pnm_magic(prefix: &[u8]) -> bool {
    if prefix.len() < 3 || prefix[0] != b'P' {
        return false;
    }
    match prefix[1] {
        b'1'..=b'7' => prefix[2].is_ascii_whitespace(),
        b'f' | b'F' => prefix[2].is_ascii_whitespace(),
        _ => false,
    }
}
