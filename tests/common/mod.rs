//! Shared engine doubles: a configurable bitmap handle and a
//! release-counting engine.
#![allow(dead_code)]

use std::cell::Cell;

use zenbridge::{
    BridgeError, ByteStream, ChannelMasks, ContainerFormat, DecodeEngine, DecodedBitmap,
    ImageKind, RGB8,
};

/// Parameters of the last `extract_scanlines` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractCall {
    pub dst_bpp: u32,
    pub masks: ChannelMasks,
    pub top_down: bool,
    pub dst_pitch: usize,
}

/// Configurable stand-in for an engine's decoded-bitmap handle.
#[derive(Clone)]
pub struct StubBitmap {
    pub kind: ImageKind,
    pub width: u32,
    pub height: u32,
    pub bpp: u32,
    pub masks: ChannelMasks,
    pub colors_used: u32,
    pub palette: Vec<RGB8>,
    pub transparent: bool,
    pub transparency: Vec<u8>,
    pub fill: u8,
    pub fail_extract: bool,
    pub last_extract: Cell<Option<ExtractCall>>,
}

impl StubBitmap {
    pub fn new(width: u32, height: u32, bpp: u32) -> Self {
        Self {
            kind: ImageKind::Bitmap,
            width,
            height,
            bpp,
            masks: ChannelMasks::NONE,
            colors_used: 0,
            palette: Vec::new(),
            transparent: false,
            transparency: Vec::new(),
            fill: 0xAB,
            fail_extract: false,
            last_extract: Cell::new(None),
        }
    }

    pub fn with_kind(mut self, kind: ImageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_masks(mut self, red: u32, green: u32, blue: u32) -> Self {
        self.masks = ChannelMasks::new(red, green, blue);
        self
    }

    pub fn with_palette(mut self, entries: &[(u8, u8, u8)]) -> Self {
        self.palette = entries.iter().map(|&(r, g, b)| RGB8::new(r, g, b)).collect();
        self.colors_used = entries.len() as u32;
        self
    }

    pub fn with_transparency(mut self, table: &[u8]) -> Self {
        self.transparent = true;
        self.transparency = table.to_vec();
        self
    }
}

impl DecodedBitmap for StubBitmap {
    fn kind(&self) -> ImageKind {
        self.kind
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn bits_per_pixel(&self) -> u32 {
        self.bpp
    }

    fn red_mask(&self) -> u32 {
        self.masks.red
    }

    fn green_mask(&self) -> u32 {
        self.masks.green
    }

    fn blue_mask(&self) -> u32 {
        self.masks.blue
    }

    fn colors_used(&self) -> u32 {
        self.colors_used
    }

    fn palette(&self) -> &[RGB8] {
        &self.palette
    }

    fn is_transparent(&self) -> bool {
        self.transparent
    }

    fn transparency_table(&self) -> &[u8] {
        &self.transparency
    }

    fn extract_scanlines(
        &self,
        dst: &mut [u8],
        dst_pitch: usize,
        dst_bpp: u32,
        masks: ChannelMasks,
        top_down: bool,
    ) -> Result<(), BridgeError> {
        self.last_extract.set(Some(ExtractCall {
            dst_bpp,
            masks,
            top_down,
            dst_pitch,
        }));
        if self.fail_extract {
            return Err(BridgeError::StreamFailure);
        }
        let needed = dst_pitch * self.height as usize;
        if dst.len() < needed {
            return Err(BridgeError::BufferTooSmall {
                needed,
                actual: dst.len(),
            });
        }
        dst[..needed].fill(self.fill);
        Ok(())
    }
}

/// Engine double that counts decode and release calls.
pub struct CountingEngine {
    /// Bitmap handed out per decode; `None` makes decoding fail.
    pub template: Option<StubBitmap>,
    pub decodes: Cell<usize>,
    pub releases: Cell<usize>,
}

impl CountingEngine {
    pub fn decoding(template: StubBitmap) -> Self {
        Self {
            template: Some(template),
            decodes: Cell::new(0),
            releases: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            template: None,
            decodes: Cell::new(0),
            releases: Cell::new(0),
        }
    }
}

impl DecodeEngine for CountingEngine {
    type Bitmap = StubBitmap;

    fn decode_stream(
        &self,
        _format: ContainerFormat,
        _stream: &mut dyn ByteStream,
    ) -> Result<StubBitmap, BridgeError> {
        self.decodes.set(self.decodes.get() + 1);
        match &self.template {
            Some(template) => Ok(template.clone()),
            None => Err(BridgeError::DecodeFailed("engine double set to fail".into())),
        }
    }

    fn release(&self, _bitmap: StubBitmap) {
        self.releases.set(self.releases.get() + 1);
    }
}
