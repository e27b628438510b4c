mod common;

use common::{CountingEngine, StubBitmap};
use zenbridge::{ByteStream, Loader, MemoryStream, PixelLayout, StreamIo, RGBA8};

fn bmp_stream() -> MemoryStream {
    MemoryStream::from_slice(b"BM\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00")
}

#[test]
fn successful_decode_releases_the_handle_once() {
    let loader = Loader::new(CountingEngine::decoding(StubBitmap::new(6, 4, 24)));
    let image = loader.load_stream(&mut bmp_stream(), None);

    assert_eq!(image.layout(), PixelLayout::Rgb32);
    assert_eq!(image.width(), 6);
    assert_eq!(loader.engine().decodes.get(), 1);
    assert_eq!(loader.engine().releases.get(), 1);
}

#[test]
fn unsupported_layout_still_releases_exactly_once() {
    let loader = Loader::new(CountingEngine::decoding(StubBitmap::new(6, 4, 13)));
    let image = loader.load_stream(&mut bmp_stream(), None);

    assert!(image.is_none());
    assert_eq!(loader.engine().decodes.get(), 1);
    assert_eq!(loader.engine().releases.get(), 1);
}

#[test]
fn conversion_failure_still_releases_exactly_once() {
    let mut bitmap = StubBitmap::new(6, 4, 32);
    bitmap.fail_extract = true;
    let loader = Loader::new(CountingEngine::decoding(bitmap));
    let image = loader.load_stream(&mut bmp_stream(), None);

    assert!(image.is_none());
    assert_eq!(loader.engine().releases.get(), 1);
}

#[test]
fn decode_failure_obtains_no_handle_and_releases_nothing() {
    let loader = Loader::new(CountingEngine::failing());
    let image = loader.load_stream(&mut bmp_stream(), None);

    assert!(image.is_none());
    assert_eq!(loader.engine().decodes.get(), 1);
    assert_eq!(loader.engine().releases.get(), 0);
}

#[test]
fn unrecognized_format_never_reaches_the_engine() {
    let loader = Loader::new(CountingEngine::decoding(StubBitmap::new(6, 4, 24)));
    let mut stream = MemoryStream::from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let image = loader.load_stream(&mut stream, None);

    assert!(image.is_none());
    assert_eq!(loader.engine().decodes.get(), 0);
    assert_eq!(loader.engine().releases.get(), 0);
}

#[test]
fn hint_reaches_the_engine_when_content_is_unrecognized() {
    let loader = Loader::new(CountingEngine::decoding(StubBitmap::new(2, 2, 32)));
    let mut stream = MemoryStream::from_slice(&[0x13, 0x37, 0x00, 0x00]);
    let image = loader.load_stream(&mut stream, Some("tga"));

    assert_eq!(image.layout(), PixelLayout::Argb32);
    assert_eq!(loader.engine().decodes.get(), 1);
}

#[test]
fn indexed_results_carry_their_color_table() {
    let bitmap = StubBitmap::new(4, 4, 8)
        .with_palette(&[(10, 20, 30), (40, 50, 60), (70, 80, 90)])
        .with_transparency(&[0x00, 0x80]);
    let loader = Loader::new(CountingEngine::decoding(bitmap));
    let image = loader.load_stream(&mut bmp_stream(), None);

    assert_eq!(image.layout(), PixelLayout::Indexed8);
    assert_eq!(
        image.color_table(),
        &vec![
            RGBA8::new(10, 20, 30, 0x00),
            RGBA8::new(40, 50, 60, 0x80),
            RGBA8::new(70, 80, 90, 0xFF),
        ]
    );
    assert_eq!(loader.engine().releases.get(), 1);
}

#[test]
fn direct_color_results_carry_no_color_table() {
    let loader = Loader::new(CountingEngine::decoding(
        StubBitmap::new(3, 3, 16).with_masks(0x7C00, 0x03E0, 0x001F),
    ));
    let image = loader.load_stream(&mut bmp_stream(), None);

    assert_eq!(image.layout(), PixelLayout::Rgb555);
    assert!(image.color_table().is_empty());
}

#[test]
fn stream_position_is_unconsumed_when_the_engine_runs() {
    // Detection must leave the cursor where the engine expects it.
    struct PositionCheckingEngine(CountingEngine);
    impl zenbridge::DecodeEngine for PositionCheckingEngine {
        type Bitmap = StubBitmap;
        fn decode_stream(
            &self,
            format: zenbridge::ContainerFormat,
            stream: &mut dyn ByteStream,
        ) -> Result<StubBitmap, zenbridge::BridgeError> {
            assert_eq!(StreamIo.tell(stream), 0);
            self.0.decode_stream(format, stream)
        }
        fn release(&self, bitmap: StubBitmap) {
            self.0.release(bitmap);
        }
    }

    let loader = Loader::new(PositionCheckingEngine(CountingEngine::decoding(
        StubBitmap::new(2, 2, 32),
    )));
    let image = loader.load_stream(&mut bmp_stream(), None);
    assert!(!image.is_none());
}

#[test]
fn load_path_decodes_files_and_releases_once() {
    let dir = std::env::temp_dir();
    let path = dir.join("zenbridge_loader_test.bmp");
    std::fs::write(&path, b"BM\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00").unwrap();

    let loader = Loader::new(CountingEngine::decoding(StubBitmap::new(2, 2, 24)));
    let image = loader.load_path(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(image.layout(), PixelLayout::Rgb32);
    assert_eq!(loader.engine().releases.get(), 1);
}

#[test]
fn load_path_on_a_missing_file_is_the_sentinel() {
    let loader = Loader::new(CountingEngine::decoding(StubBitmap::new(2, 2, 24)));
    let image = loader.load_path(std::path::Path::new("/nonexistent/zenbridge.bmp"));

    assert!(image.is_none());
    assert_eq!(loader.engine().decodes.get(), 0);
}
