use pixelcraft_core::{Color, Error, Surface, load_bdf, load_image, save_image};
use tempfile::TempDir;

fn filled(width: u32, height: u32, color: Color) -> Surface {
    let mut s = Surface::new(width, height).unwrap();
    s.fill(color);
    s
}

#[test]
fn bmp_round_trip_is_exact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flat.bmp");

    let original = filled(4, 4, Color::rgb(10, 20, 30));
    save_image(&original, &path).unwrap();

    // 4 px * 3 bytes needs no padding
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 54 + 4 * 4 * 3);

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.dimensions(), (4, 4));
    assert_eq!(loaded, original);
}

#[test]
fn bmp_round_trip_with_row_padding() {
    let dir = TempDir::new().unwrap();

    for width in [1, 2, 3, 5, 7] {
        let mut original = Surface::new(width, 3).unwrap();
        original.passthru(|x, y, _| Color::from_i32_channels(x * 30, y * 60, 255 - x, 255));

        let path = dir.path().join(format!("odd-{width}.bmp"));
        save_image(&original, &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), original, "width {width}");
    }
}

#[test]
fn bmp_drops_alpha() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alpha.bmp");

    save_image(&filled(2, 2, Color::rgba(1, 2, 3, 4)), &path).unwrap();
    assert_eq!(load_image(&path).unwrap().pixel(1, 1), Color::rgb(1, 2, 3));
}

#[cfg(feature = "png")]
#[test]
fn png_round_trip_keeps_alpha() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shapes.png");

    let mut original = Surface::new(16, 12).unwrap();
    original.circle(8, 6, 5, Color::rgba(0, 128, 255, 200), true);
    original.line(0, 0, 15, 11, Color::WHITE);

    save_image(&original, &path).unwrap();
    assert_eq!(load_image(&path).unwrap(), original);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = save_image(&filled(1, 1, Color::RED), dir.path().join("x.gif")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)), "{err}");
}

#[test]
fn corrupt_file_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.bmp");
    std::fs::write(&path, b"BM but far too short").unwrap();

    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidFormat(_)), "{err}");
}

#[test]
fn bdf_font_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.bdf");
    std::fs::write(
        &path,
        "STARTFONT 2.1\nFONT tiny\nFONTBOUNDINGBOX 2 2 0 0\nCHARS 1\n\
         STARTCHAR block\nENCODING 35\nDWIDTH 2 0\nBBX 2 2 0 0\nBITMAP\nC0\nC0\nENDCHAR\nENDFONT\n",
    )
    .unwrap();

    let font = load_bdf(&path).unwrap();
    assert_eq!(font.name, "tiny");

    let s = pixelcraft_core::render_bdf_text(&font, Color::WHITE, Color::TRANSPARENT, "##").unwrap();
    assert_eq!(s.dimensions(), (4, 4));
    assert_eq!(s.pixel(3, 1), Color::WHITE);
    assert_eq!(s.pixel(0, 3), Color::TRANSPARENT);

    let err = load_bdf(dir.path().join("missing.bdf")).unwrap_err();
    assert!(matches!(err, Error::FileOpen { .. }));
}
