//! 8x8 glyph bitmaps, one byte per row, least significant bit leftmost.

/// Number of glyphs in [`GLYPHS`].
pub const GLYPH_COUNT: usize = 540;

/// Glyph bitmaps indexed by [`glyph_index`](super::glyph_index).
#[rustfmt::skip]
pub static GLYPHS: [[u8; 8]; GLYPH_COUNT] = [
    // Basic Latin
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0020
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // U+0021
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0022
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // U+0023
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // U+0024
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // U+0025
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // U+0026
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0027
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // U+0028
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // U+0029
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // U+002A
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // U+002B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // U+002C
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // U+002D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // U+002E
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // U+002F
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // U+0030
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // U+0031
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // U+0032
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // U+0033
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // U+0034
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // U+0035
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // U+0036
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // U+0037
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+0038
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // U+0039
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // U+003A
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // U+003B
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // U+003C
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // U+003D
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // U+003E
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // U+003F
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // U+0040
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0041
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0042
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // U+0043
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // U+0044
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0045
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // U+0046
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // U+0047
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0048
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0049
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // U+004A
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+004B
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // U+004C
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+004D
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+004E
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+004F
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+0050
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // U+0051
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // U+0052
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // U+0053
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0054
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U+0055
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+0056
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // U+0057
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // U+0058
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+0059
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+005A
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // U+005B
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // U+005C
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // U+005D
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // U+005E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // U+005F
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0060
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // U+0061
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // U+0062
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // U+0063
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // U+0064
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+0065
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // U+0066
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+0067
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // U+0068
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0069
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // U+006A
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // U+006B
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+006C
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // U+006D
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // U+006E
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+006F
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+0070
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // U+0071
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // U+0072
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // U+0073
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+0074
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // U+0075
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+0076
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // U+0077
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // U+0078
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+0079
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // U+007A
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // U+007B
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+007C
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // U+007D
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+007E
    // Block Elements
    [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], // U+2580
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // U+2581
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF], // U+2582
    [0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF], // U+2583
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF], // U+2584
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2585
    [0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2586
    [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2587
    [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], // U+2588
    [0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F], // U+2589
    [0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F], // U+258A
    [0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F], // U+258B
    [0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F], // U+258C
    [0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07], // U+258D
    [0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03], // U+258E
    [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01], // U+258F
    [0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0], // U+2590
    [0x55, 0x00, 0xAA, 0x00, 0x55, 0x00, 0xAA, 0x00], // U+2591
    [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA], // U+2592
    [0xFF, 0xAA, 0xFF, 0x55, 0xFF, 0xAA, 0xFF, 0x55], // U+2593
    [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+2594
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], // U+2595
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F], // U+2596
    [0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0], // U+2597
    [0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00], // U+2598
    [0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF], // U+2599
    [0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0], // U+259A
    [0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 0x0F, 0x0F, 0x0F], // U+259B
    [0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0], // U+259C
    [0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00], // U+259D
    [0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F], // U+259E
    [0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF], // U+259F
    // Box Drawing
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00], // U+2500
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+2501
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08], // U+2502
    [0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18], // U+2503
    [0x00, 0x00, 0x00, 0x00, 0xBB, 0x00, 0x00, 0x00], // U+2504
    [0x00, 0x00, 0x00, 0xBB, 0xBB, 0x00, 0x00, 0x00], // U+2505
    [0x08, 0x00, 0x08, 0x08, 0x08, 0x00, 0x08, 0x08], // U+2506
    [0x18, 0x00, 0x18, 0x18, 0x18, 0x00, 0x18, 0x18], // U+2507
    [0x00, 0x00, 0x00, 0x00, 0x55, 0x00, 0x00, 0x00], // U+2508
    [0x00, 0x00, 0x00, 0x55, 0x55, 0x00, 0x00, 0x00], // U+2509
    [0x00, 0x08, 0x00, 0x08, 0x00, 0x08, 0x00, 0x08], // U+250A
    [0x00, 0x18, 0x00, 0x18, 0x00, 0x18, 0x00, 0x18], // U+250B
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x08, 0x08, 0x08], // U+250C
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+250D
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x18, 0x18, 0x18], // U+250E
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+250F
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x08, 0x08, 0x08], // U+2510
    [0x00, 0x00, 0x00, 0x0F, 0x0F, 0x08, 0x08, 0x08], // U+2511
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x18, 0x18, 0x18], // U+2512
    [0x00, 0x00, 0x00, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+2513
    [0x08, 0x08, 0x08, 0x08, 0xF8, 0x00, 0x00, 0x00], // U+2514
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+2515
    [0x18, 0x18, 0x18, 0x18, 0xF8, 0x00, 0x00, 0x00], // U+2516
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+2517
    [0x08, 0x08, 0x08, 0x08, 0x0F, 0x00, 0x00, 0x00], // U+2518
    [0x08, 0x08, 0x08, 0x0F, 0x0F, 0x00, 0x00, 0x00], // U+2519
    [0x18, 0x18, 0x18, 0x18, 0x1F, 0x00, 0x00, 0x00], // U+251A
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x00, 0x00, 0x00], // U+251B
    [0x08, 0x08, 0x08, 0x08, 0xF8, 0x08, 0x08, 0x08], // U+251C
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+251D
    [0x18, 0x18, 0x18, 0x18, 0xF8, 0x08, 0x08, 0x08], // U+251E
    [0x08, 0x08, 0x08, 0x08, 0xF8, 0x18, 0x18, 0x18], // U+251F
    [0x18, 0x18, 0x18, 0x18, 0xF8, 0x18, 0x18, 0x18], // U+2520
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x08, 0x08, 0x08], // U+2521
    [0x08, 0x08, 0x08, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+2522
    [0x18, 0x18, 0x18, 0xF8, 0xF8, 0x18, 0x18, 0x18], // U+2523
    [0x08, 0x08, 0x08, 0x08, 0x0F, 0x08, 0x08, 0x08], // U+2524
    [0x08, 0x08, 0x08, 0x0F, 0x0F, 0x08, 0x08, 0x08], // U+2525
    [0x18, 0x18, 0x18, 0x18, 0x1F, 0x08, 0x08, 0x08], // U+2526
    [0x08, 0x08, 0x08, 0x08, 0x1F, 0x18, 0x18, 0x18], // U+2527
    [0x18, 0x18, 0x18, 0x18, 0x1F, 0x18, 0x18, 0x18], // U+2528
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x08, 0x08, 0x08], // U+2529
    [0x08, 0x08, 0x08, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+252A
    [0x18, 0x18, 0x18, 0x1F, 0x1F, 0x18, 0x18, 0x18], // U+252B
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x08, 0x08, 0x08], // U+252C
    [0x00, 0x00, 0x00, 0x0F, 0xFF, 0x08, 0x08, 0x08], // U+252D
    [0x00, 0x00, 0x00, 0xF8, 0xFF, 0x08, 0x08, 0x08], // U+252E
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+252F
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x18, 0x18, 0x18], // U+2530
    [0x00, 0x00, 0x00, 0x1F, 0xFF, 0x18, 0x18, 0x18], // U+2531
    [0x00, 0x00, 0x00, 0xF8, 0xFF, 0x18, 0x18, 0x18], // U+2532
    [0x00, 0x00, 0x00, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+2533
    [0x08, 0x08, 0x08, 0x08, 0xFF, 0x00, 0x00, 0x00], // U+2534
    [0x08, 0x08, 0x08, 0x0F, 0xFF, 0x00, 0x00, 0x00], // U+2535
    [0x08, 0x08, 0x08, 0xF8, 0xFF, 0x00, 0x00, 0x00], // U+2536
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+2537
    [0x18, 0x18, 0x18, 0x18, 0xFF, 0x00, 0x00, 0x00], // U+2538
    [0x18, 0x18, 0x18, 0x1F, 0xFF, 0x00, 0x00, 0x00], // U+2539
    [0x18, 0x18, 0x18, 0xF8, 0xFF, 0x00, 0x00, 0x00], // U+253A
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x00, 0x00, 0x00], // U+253B
    [0x08, 0x08, 0x08, 0x08, 0xFF, 0x08, 0x08, 0x08], // U+253C
    [0x08, 0x08, 0x08, 0x0F, 0xFF, 0x08, 0x08, 0x08], // U+253D
    [0x08, 0x08, 0x08, 0xF8, 0xFF, 0x08, 0x08, 0x08], // U+253E
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+253F
    [0x18, 0x18, 0x18, 0x18, 0xFF, 0x08, 0x08, 0x08], // U+2540
    [0x08, 0x08, 0x08, 0x08, 0xFF, 0x18, 0x18, 0x18], // U+2541
    [0x18, 0x18, 0x18, 0x18, 0xFF, 0x18, 0x18, 0x18], // U+2542
    [0x18, 0x18, 0x18, 0x1F, 0xFF, 0x08, 0x08, 0x08], // U+2543
    [0x18, 0x18, 0x18, 0xF8, 0xFF, 0x08, 0x08, 0x08], // U+2544
    [0x08, 0x08, 0x08, 0x1F, 0xFF, 0x18, 0x18, 0x18], // U+2545
    [0x08, 0x08, 0x08, 0xF8, 0xFF, 0x18, 0x18, 0x18], // U+2546
    [0x08, 0x08, 0x08, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+2547
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x08, 0x08, 0x08], // U+2548
    [0x18, 0x18, 0x18, 0xF8, 0xFF, 0x18, 0x18, 0x18], // U+2549
    [0x18, 0x18, 0x18, 0x1F, 0xFF, 0x18, 0x18, 0x18], // U+254A
    [0x18, 0x18, 0x18, 0xFF, 0xFF, 0x18, 0x18, 0x18], // U+254B
    [0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00], // U+254C
    [0x00, 0x00, 0x00, 0xE7, 0xE7, 0x00, 0x00, 0x00], // U+254D
    [0x08, 0x08, 0x08, 0x00, 0x00, 0x08, 0x08, 0x08], // U+254E
    [0x18, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x18], // U+254F
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00], // U+2550
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14], // U+2551
    [0x00, 0x00, 0x00, 0xF8, 0x08, 0xF8, 0x08, 0x08], // U+2552
    [0x00, 0x00, 0x00, 0x00, 0xFC, 0x14, 0x14, 0x14], // U+2553
    [0x00, 0x00, 0x00, 0xFC, 0x04, 0xF4, 0x14, 0x14], // U+2554
    [0x00, 0x00, 0x00, 0x0F, 0x08, 0x0F, 0x08, 0x08], // U+2555
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x14, 0x14, 0x14], // U+2556
    [0x00, 0x00, 0x00, 0x1F, 0x10, 0x17, 0x14, 0x14], // U+2557
    [0x08, 0x08, 0x08, 0xF8, 0x08, 0xF8, 0x00, 0x00], // U+2558
    [0x14, 0x14, 0x14, 0x14, 0xFC, 0x00, 0x00, 0x00], // U+2559
    [0x14, 0x14, 0x14, 0xF4, 0x04, 0xFC, 0x00, 0x00], // U+255A
    [0x08, 0x08, 0x08, 0x0F, 0x08, 0x0F, 0x00, 0x00], // U+255B
    [0x14, 0x14, 0x14, 0x14, 0x1F, 0x00, 0x00, 0x00], // U+255C
    [0x14, 0x14, 0x14, 0x17, 0x10, 0x1F, 0x00, 0x00], // U+255D
    [0x08, 0x08, 0x08, 0xF8, 0x08, 0xF8, 0x08, 0x08], // U+255E
    [0x14, 0x14, 0x14, 0x14, 0xF4, 0x14, 0x14, 0x14], // U+255F
    [0x14, 0x14, 0x14, 0xF4, 0x04, 0xF4, 0x14, 0x14], // U+2560
    [0x08, 0x08, 0x08, 0x0F, 0x08, 0x0F, 0x08, 0x08], // U+2561
    [0x14, 0x14, 0x14, 0x14, 0x17, 0x14, 0x14, 0x14], // U+2562
    [0x14, 0x14, 0x14, 0x17, 0x10, 0x17, 0x14, 0x14], // U+2563
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x08, 0x08], // U+2564
    [0x00, 0x00, 0x00, 0x00, 0xFF, 0x14, 0x14, 0x14], // U+2565
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xF7, 0x14, 0x14], // U+2566
    [0x08, 0x08, 0x08, 0xFF, 0x00, 0xFF, 0x00, 0x00], // U+2567
    [0x14, 0x14, 0x14, 0x14, 0xFF, 0x00, 0x00, 0x00], // U+2568
    [0x14, 0x14, 0x14, 0xF7, 0x00, 0xFF, 0x00, 0x00], // U+2569
    [0x08, 0x08, 0x08, 0xFF, 0x08, 0xFF, 0x08, 0x08], // U+256A
    [0x14, 0x14, 0x14, 0x14, 0xFF, 0x14, 0x14, 0x14], // U+256B
    [0x14, 0x14, 0x14, 0xF7, 0x00, 0xF7, 0x14, 0x14], // U+256C
    [0x00, 0x00, 0x00, 0x00, 0xE0, 0x10, 0x08, 0x08], // U+256D
    [0x00, 0x00, 0x00, 0x00, 0x03, 0x04, 0x08, 0x08], // U+256E
    [0x08, 0x08, 0x08, 0x04, 0x03, 0x00, 0x00, 0x00], // U+256F
    [0x08, 0x08, 0x08, 0x10, 0xE0, 0x00, 0x00, 0x00], // U+2570
    [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01], // U+2571
    [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80], // U+2572
    [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81], // U+2573
    [0x00, 0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00], // U+2574
    [0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00], // U+2575
    [0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00], // U+2576
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x08], // U+2577
    [0x00, 0x00, 0x00, 0x0F, 0x0F, 0x00, 0x00, 0x00], // U+2578
    [0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00], // U+2579
    [0x00, 0x00, 0x00, 0xF8, 0xF8, 0x00, 0x00, 0x00], // U+257A
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18], // U+257B
    [0x00, 0x00, 0x00, 0xF8, 0xFF, 0x00, 0x00, 0x00], // U+257C
    [0x08, 0x08, 0x08, 0x08, 0x18, 0x18, 0x18, 0x18], // U+257D
    [0x00, 0x00, 0x00, 0x0F, 0xFF, 0x00, 0x00, 0x00], // U+257E
    [0x18, 0x18, 0x18, 0x18, 0x08, 0x08, 0x08, 0x08], // U+257F
    // Greek
    [0x2D, 0x00, 0x0C, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+0390
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // U+0391
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // U+0392
    [0x3F, 0x33, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00], // U+0393
    [0x08, 0x1C, 0x1C, 0x36, 0x36, 0x63, 0x7F, 0x00], // U+0394
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // U+0395
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // U+0396
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // U+0397
    [0x1C, 0x36, 0x63, 0x7F, 0x63, 0x36, 0x1C, 0x00], // U+0398
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+0399
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // U+039A
    [0x08, 0x1C, 0x1C, 0x36, 0x36, 0x63, 0x63, 0x00], // U+039B
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // U+039C
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // U+039D
    [0x7F, 0x63, 0x00, 0x3E, 0x00, 0x63, 0x7F, 0x00], // U+039E
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // U+039F
    [0x7F, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03A0
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // U+03A1
    [0x00, 0x01, 0x02, 0x04, 0x4F, 0x90, 0xA0, 0x40], // U+03A2
    [0x7F, 0x63, 0x06, 0x0C, 0x06, 0x63, 0x7F, 0x00], // U+03A3
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03A4
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+03A5
    [0x18, 0x7E, 0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03A6
    [0x63, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x63, 0x00], // U+03A7
    [0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x18, 0x3C, 0x00], // U+03A8
    [0x3E, 0x63, 0x63, 0x63, 0x36, 0x36, 0x77, 0x00], // U+03A9
    [0x33, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+03AA
    [0x33, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x1E, 0x00], // U+03AB
    [0x70, 0x00, 0x6E, 0x3B, 0x13, 0x3B, 0x6E, 0x00], // U+03AC
    [0x38, 0x00, 0x1E, 0x03, 0x0E, 0x03, 0x1E, 0x00], // U+03AD
    [0x38, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x30], // U+03AE
    [0x38, 0x00, 0x0C, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03AF
    [0x2D, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03B0
    [0x00, 0x00, 0x6E, 0x3B, 0x13, 0x3B, 0x6E, 0x00], // U+03B1
    [0x00, 0x1E, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03], // U+03B2
    [0x00, 0x00, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x00], // U+03B3
    [0x38, 0x0C, 0x18, 0x3E, 0x33, 0x33, 0x1E, 0x00], // U+03B4
    [0x00, 0x00, 0x1E, 0x03, 0x0E, 0x03, 0x1E, 0x00], // U+03B5
    [0x00, 0x3F, 0x06, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03B6
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x30], // U+03B7
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x33, 0x1E, 0x00], // U+03B8
    [0x00, 0x00, 0x0C, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // U+03B9
    [0x00, 0x00, 0x33, 0x1B, 0x0F, 0x1B, 0x33, 0x00], // U+03BA
    [0x00, 0x03, 0x06, 0x0C, 0x1C, 0x36, 0x63, 0x00], // U+03BB
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // U+03BC
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // U+03BD
    [0x1E, 0x03, 0x0E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03BE
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03BF
    [0x00, 0x00, 0x7F, 0x36, 0x36, 0x36, 0x36, 0x00], // U+03C0
    [0x00, 0x00, 0x3C, 0x66, 0x66, 0x36, 0x06, 0x06], // U+03C1
    [0x00, 0x00, 0x3E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+03C2
    [0x00, 0x00, 0x7E, 0x1B, 0x1B, 0x1B, 0x0E, 0x00], // U+03C3
    [0x00, 0x00, 0x7E, 0x18, 0x18, 0x58, 0x30, 0x00], // U+03C4
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+03C5
    [0x00, 0x00, 0x76, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03C6
    [0x00, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // U+03C7
    [0x00, 0x00, 0xDB, 0xDB, 0xDB, 0x7E, 0x18, 0x00], // U+03C8
    [0x00, 0x00, 0x36, 0x63, 0x6B, 0x7F, 0x36, 0x00], // U+03C9
    // Hiragana
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+3040
    [0x04, 0x3F, 0x04, 0x3C, 0x56, 0x4D, 0x26, 0x00], // U+3041
    [0x04, 0x3F, 0x04, 0x3C, 0x56, 0x4D, 0x26, 0x00], // U+3042
    [0x00, 0x00, 0x00, 0x11, 0x21, 0x25, 0x02, 0x00], // U+3043
    [0x00, 0x01, 0x11, 0x21, 0x21, 0x25, 0x02, 0x00], // U+3044
    [0x00, 0x1C, 0x00, 0x1C, 0x22, 0x20, 0x18, 0x00], // U+3045
    [0x3C, 0x00, 0x3C, 0x42, 0x40, 0x20, 0x18, 0x00], // U+3046
    [0x1C, 0x00, 0x3E, 0x10, 0x38, 0x24, 0x62, 0x00], // U+3047
    [0x1C, 0x00, 0x3E, 0x10, 0x38, 0x24, 0x62, 0x00], // U+3048
    [0x24, 0x4F, 0x04, 0x3C, 0x46, 0x45, 0x22, 0x00], // U+3049
    [0x24, 0x4F, 0x04, 0x3C, 0x46, 0x45, 0x22, 0x00], // U+304A
    [0x04, 0x24, 0x4F, 0x54, 0x52, 0x12, 0x09, 0x00], // U+304B
    [0x44, 0x24, 0x0F, 0x54, 0x52, 0x52, 0x09, 0x00], // U+304C
    [0x08, 0x1F, 0x08, 0x3F, 0x1C, 0x02, 0x3C, 0x00], // U+304D
    [0x44, 0x2F, 0x04, 0x1F, 0x0E, 0x01, 0x1E, 0x00], // U+304E
    [0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00], // U+304F
    [0x28, 0x44, 0x12, 0x21, 0x02, 0x04, 0x08, 0x00], // U+3050
    [0x00, 0x22, 0x79, 0x21, 0x21, 0x22, 0x10, 0x00], // U+3051
    [0x40, 0x22, 0x11, 0x3D, 0x11, 0x12, 0x08, 0x00], // U+3052
    [0x00, 0x00, 0x3C, 0x00, 0x02, 0x02, 0x3C, 0x00], // U+3053
    [0x20, 0x40, 0x16, 0x20, 0x01, 0x01, 0x0E, 0x00], // U+3054
    [0x10, 0x7E, 0x10, 0x3C, 0x02, 0x02, 0x1C, 0x00], // U+3055
    [0x24, 0x4F, 0x14, 0x2E, 0x01, 0x01, 0x0E, 0x00], // U+3056
    [0x00, 0x02, 0x02, 0x02, 0x42, 0x22, 0x1C, 0x00], // U+3057
    [0x20, 0x42, 0x12, 0x22, 0x02, 0x22, 0x1C, 0x00], // U+3058
    [0x10, 0x7E, 0x18, 0x14, 0x18, 0x10, 0x0C, 0x00], // U+3059
    [0x44, 0x2F, 0x06, 0x05, 0x06, 0x04, 0x03, 0x00], // U+305A
    [0x20, 0x72, 0x2F, 0x22, 0x1A, 0x02, 0x1C, 0x00], // U+305B
    [0x80, 0x50, 0x3A, 0x17, 0x1A, 0x02, 0x1C, 0x00], // U+305C
    [0x1E, 0x08, 0x04, 0x7F, 0x08, 0x04, 0x38, 0x00], // U+305D
    [0x4F, 0x24, 0x02, 0x7F, 0x08, 0x04, 0x38, 0x00], // U+305E
    [0x02, 0x0F, 0x02, 0x72, 0x02, 0x09, 0x71, 0x00], // U+305F
    [0x42, 0x2F, 0x02, 0x72, 0x02, 0x09, 0x71, 0x00], // U+3060
    [0x08, 0x7E, 0x08, 0x3C, 0x40, 0x40, 0x38, 0x00], // U+3061
    [0x44, 0x2F, 0x04, 0x1E, 0x20, 0x20, 0x1C, 0x00], // U+3062
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x20, 0x1C, 0x00], // U+3063
    [0x00, 0x1C, 0x22, 0x41, 0x40, 0x20, 0x1C, 0x00], // U+3064
    [0x40, 0x20, 0x1E, 0x21, 0x20, 0x20, 0x1C, 0x00], // U+3065
    [0x00, 0x3E, 0x08, 0x04, 0x04, 0x04, 0x38, 0x00], // U+3066
    [0x00, 0x3E, 0x48, 0x24, 0x04, 0x04, 0x38, 0x00], // U+3067
    [0x04, 0x04, 0x08, 0x3C, 0x02, 0x02, 0x3C, 0x00], // U+3068
    [0x44, 0x24, 0x08, 0x3C, 0x02, 0x02, 0x3C, 0x00], // U+3069
    [0x32, 0x02, 0x27, 0x22, 0x72, 0x29, 0x11, 0x00], // U+306A
    [0x00, 0x02, 0x7A, 0x02, 0x0A, 0x72, 0x02, 0x00], // U+306B
    [0x08, 0x09, 0x3E, 0x4B, 0x65, 0x55, 0x22, 0x00], // U+306C
    [0x04, 0x07, 0x34, 0x4C, 0x66, 0x54, 0x24, 0x00], // U+306D
    [0x00, 0x00, 0x3C, 0x4A, 0x49, 0x45, 0x22, 0x00], // U+306E
    [0x00, 0x22, 0x7A, 0x22, 0x72, 0x2A, 0x12, 0x00], // U+306F
    [0x80, 0x51, 0x1D, 0x11, 0x39, 0x15, 0x09, 0x00], // U+3070
    [0x40, 0xB1, 0x5D, 0x11, 0x39, 0x15, 0x09, 0x00], // U+3071
    [0x00, 0x00, 0x13, 0x32, 0x51, 0x11, 0x0E, 0x00], // U+3072
    [0x40, 0x20, 0x03, 0x32, 0x51, 0x11, 0x0E, 0x00], // U+3073
    [0x40, 0xA0, 0x43, 0x32, 0x51, 0x11, 0x0E, 0x00], // U+3074
    [0x1C, 0x00, 0x08, 0x2A, 0x49, 0x10, 0x0C, 0x00], // U+3075
    [0x4C, 0x20, 0x08, 0x2A, 0x49, 0x10, 0x0C, 0x00], // U+3076
    [0x4C, 0xA0, 0x48, 0x0A, 0x29, 0x48, 0x0C, 0x00], // U+3077
    [0x00, 0x00, 0x04, 0x0A, 0x11, 0x20, 0x40, 0x00], // U+3078
    [0x20, 0x40, 0x14, 0x2A, 0x11, 0x20, 0x40, 0x00], // U+3079
    [0x20, 0x50, 0x24, 0x0A, 0x11, 0x20, 0x40, 0x00], // U+307A
    [0x7D, 0x11, 0x7D, 0x11, 0x39, 0x55, 0x09, 0x00], // U+307B
    [0x9D, 0x51, 0x1D, 0x11, 0x39, 0x55, 0x09, 0x00], // U+307C
    [0x5D, 0xB1, 0x5D, 0x11, 0x39, 0x55, 0x09, 0x00], // U+307D
    [0x7E, 0x08, 0x3E, 0x08, 0x1C, 0x2A, 0x04, 0x00], // U+307E
    [0x00, 0x07, 0x24, 0x24, 0x7E, 0x25, 0x12, 0x00], // U+307F
    [0x04, 0x0F, 0x64, 0x06, 0x05, 0x26, 0x3C, 0x00], // U+3080
    [0x00, 0x09, 0x3D, 0x4A, 0x4B, 0x45, 0x2A, 0x00], // U+3081
    [0x02, 0x0F, 0x02, 0x0F, 0x62, 0x42, 0x3C, 0x00], // U+3082
    [0x00, 0x00, 0x12, 0x1F, 0x22, 0x12, 0x04, 0x00], // U+3083
    [0x00, 0x12, 0x3F, 0x42, 0x42, 0x34, 0x04, 0x00], // U+3084
    [0x00, 0x00, 0x11, 0x3D, 0x53, 0x39, 0x11, 0x00], // U+3085
    [0x00, 0x11, 0x3D, 0x53, 0x51, 0x39, 0x11, 0x00], // U+3086
    [0x00, 0x08, 0x38, 0x08, 0x1C, 0x2A, 0x04, 0x00], // U+3087
    [0x08, 0x08, 0x38, 0x08, 0x1C, 0x2A, 0x04, 0x00], // U+3088
    [0x1E, 0x00, 0x02, 0x3A, 0x46, 0x42, 0x30, 0x00], // U+3089
    [0x00, 0x20, 0x22, 0x22, 0x2A, 0x24, 0x10, 0x00], // U+308A
    [0x1F, 0x08, 0x3C, 0x42, 0x49, 0x54, 0x38, 0x00], // U+308B
    [0x04, 0x07, 0x04, 0x0C, 0x16, 0x55, 0x24, 0x00], // U+308C
    [0x3F, 0x10, 0x08, 0x3C, 0x42, 0x41, 0x30, 0x00], // U+308D
    [0x00, 0x00, 0x08, 0x0E, 0x38, 0x4C, 0x2A, 0x00], // U+308E
    [0x04, 0x07, 0x04, 0x3C, 0x46, 0x45, 0x24, 0x00], // U+308F
    [0x0E, 0x08, 0x3C, 0x4A, 0x69, 0x55, 0x32, 0x00], // U+3090
    [0x06, 0x3C, 0x42, 0x39, 0x04, 0x36, 0x49, 0x00], // U+3091
    [0x04, 0x0F, 0x04, 0x6E, 0x11, 0x08, 0x70, 0x00], // U+3092
    [0x08, 0x08, 0x04, 0x0C, 0x56, 0x52, 0x21, 0x00], // U+3093
    [0x40, 0x2E, 0x00, 0x3C, 0x42, 0x40, 0x38, 0x00], // U+3094
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+3095
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+3096
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+3097
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+3098
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+3099
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+309A
    [0x40, 0x80, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00], // U+309B
    [0x40, 0xA0, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00], // U+309C
    [0x00, 0x00, 0x08, 0x08, 0x10, 0x30, 0x0C, 0x00], // U+309D
    [0x20, 0x40, 0x14, 0x24, 0x08, 0x18, 0x06, 0x00], // U+309E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+309F
    // Private use (SGA)
    [0x00, 0x00, 0x38, 0x66, 0x06, 0x06, 0x07, 0x00], // U+E541
    [0x00, 0x00, 0x0C, 0x0C, 0x18, 0x30, 0x7F, 0x00], // U+E542
    [0x00, 0x00, 0x0C, 0x00, 0x0C, 0x30, 0x30, 0x00], // U+E543
    [0x00, 0x00, 0x7F, 0x00, 0x03, 0x1C, 0x60, 0x00], // U+E544
    [0x00, 0x00, 0x63, 0x03, 0x03, 0x03, 0x7F, 0x00], // U+E545
    [0x00, 0x00, 0x00, 0xFF, 0x00, 0xDB, 0x00, 0x00], // U+E546
    [0x00, 0x00, 0x30, 0x30, 0x3E, 0x30, 0x30, 0x00], // U+E547
    [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x18, 0x18, 0x00], // U+E548
    [0x00, 0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00], // U+E549
    [0x00, 0x00, 0x18, 0x00, 0x18, 0x00, 0x18, 0x00], // U+E54A
    [0x00, 0x00, 0x18, 0x18, 0x5A, 0x18, 0x18, 0x00], // U+E54B
    [0x00, 0x00, 0x03, 0x33, 0x03, 0x33, 0x03, 0x00], // U+E54C
    [0x00, 0x00, 0x63, 0x60, 0x60, 0x60, 0x7F, 0x00], // U+E54D
    [0x00, 0x00, 0x66, 0x60, 0x30, 0x18, 0x0C, 0x00], // U+E54E
    [0x00, 0x00, 0x3C, 0x60, 0x30, 0x18, 0x0C, 0x00], // U+E54F
    [0x00, 0x00, 0x66, 0x60, 0x66, 0x06, 0x66, 0x00], // U+E550
    [0x00, 0x00, 0x18, 0x00, 0x7E, 0x60, 0x7E, 0x00], // U+E551
    [0x00, 0x00, 0x00, 0x66, 0x00, 0x66, 0x00, 0x00], // U+E552
    [0x00, 0x00, 0x0C, 0x0C, 0x3C, 0x30, 0x30, 0x00], // U+E553
    [0x00, 0x00, 0x3C, 0x30, 0x30, 0x00, 0x30, 0x00], // U+E554
    [0x00, 0x00, 0x00, 0x36, 0x00, 0x7F, 0x00, 0x00], // U+E555
    [0x00, 0x00, 0x18, 0x18, 0x7E, 0x00, 0x7E, 0x00], // U+E556
    [0x00, 0x00, 0x00, 0x18, 0x00, 0x66, 0x00, 0x00], // U+E557
    [0x00, 0x00, 0x66, 0x30, 0x18, 0x0C, 0x06, 0x00], // U+E558
    [0x00, 0x00, 0x36, 0x36, 0x36, 0x36, 0x36, 0x00], // U+E559
    [0x00, 0x00, 0x18, 0x3C, 0x66, 0x66, 0x66, 0x00], // U+E55A
    // Latin-1 Supplement
    [0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x18, 0x00], // U+00A1
    [0x18, 0x18, 0x7E, 0x03, 0x03, 0x7E, 0x18, 0x18], // U+00A2
    [0x1C, 0x36, 0x26, 0x0F, 0x06, 0x67, 0x3F, 0x00], // U+00A3
    [0x00, 0x00, 0x63, 0x3E, 0x36, 0x3E, 0x63, 0x00], // U+00A4
    [0x33, 0x33, 0x1E, 0x3F, 0x0C, 0x3F, 0x0C, 0x0C], // U+00A5
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // U+00A6
    [0x7C, 0xC6, 0x1C, 0x36, 0x36, 0x1C, 0x33, 0x1E], // U+00A7
    [0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00A8
    [0x3C, 0x42, 0x99, 0x85, 0x85, 0x99, 0x42, 0x3C], // U+00A9
    [0x3C, 0x36, 0x36, 0x7C, 0x00, 0x00, 0x00, 0x00], // U+00AA
    [0x00, 0xCC, 0x66, 0x33, 0x66, 0xCC, 0x00, 0x00], // U+00AB
    [0x00, 0x00, 0x00, 0x3F, 0x30, 0x30, 0x00, 0x00], // U+00AC
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00AD
    [0x3C, 0x42, 0x9D, 0xA5, 0x9D, 0xA5, 0x42, 0x3C], // U+00AE
    [0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00AF
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00B0
    [0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x7E, 0x00], // U+00B1
    [0x1C, 0x30, 0x18, 0x0C, 0x3C, 0x00, 0x00, 0x00], // U+00B2
    [0x1C, 0x30, 0x18, 0x30, 0x1C, 0x00, 0x00, 0x00], // U+00B3
    [0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+00B4
    [0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x03], // U+00B5
    [0xFE, 0xDB, 0xDB, 0xDE, 0xD8, 0xD8, 0xD8, 0x00], // U+00B6
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00], // U+00B7
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x30, 0x1E], // U+00B8
    [0x08, 0x0C, 0x08, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00B9
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x00, 0x00, 0x00], // U+00BA
    [0x00, 0x33, 0x66, 0xCC, 0x66, 0x33, 0x00, 0x00], // U+00BB
    [0xC3, 0x63, 0x33, 0xBD, 0xEC, 0xF6, 0xF3, 0x03], // U+00BC
    [0xC3, 0x63, 0x33, 0x7B, 0xCC, 0x66, 0x33, 0xF0], // U+00BD
    [0x03, 0xC4, 0x63, 0xB4, 0xDB, 0xAC, 0xE6, 0x80], // U+00BE
    [0x0C, 0x00, 0x0C, 0x06, 0x03, 0x33, 0x1E, 0x00], // U+00BF
    [0x07, 0x00, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x00], // U+00C0
    [0x70, 0x00, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x00], // U+00C1
    [0x1C, 0x36, 0x00, 0x3E, 0x63, 0x7F, 0x63, 0x00], // U+00C2
    [0x6E, 0x3B, 0x00, 0x3E, 0x63, 0x7F, 0x63, 0x00], // U+00C3
    [0x63, 0x1C, 0x36, 0x63, 0x7F, 0x63, 0x63, 0x00], // U+00C4
    [0x0C, 0x0C, 0x00, 0x1E, 0x33, 0x3F, 0x33, 0x00], // U+00C5
    [0x7C, 0x36, 0x33, 0x7F, 0x33, 0x33, 0x73, 0x00], // U+00C6
    [0x1E, 0x33, 0x03, 0x33, 0x1E, 0x18, 0x30, 0x1E], // U+00C7
    [0x07, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00C8
    [0x38, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00C9
    [0x0C, 0x12, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00CA
    [0x36, 0x00, 0x3F, 0x06, 0x1E, 0x06, 0x3F, 0x00], // U+00CB
    [0x07, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CC
    [0x38, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CD
    [0x0C, 0x12, 0x00, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // U+00CE
    [0x33, 0x00, 0x1E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00CF
    [0x3F, 0x66, 0x6F, 0x6F, 0x66, 0x66, 0x3F, 0x00], // U+00D0
    [0x3F, 0x00, 0x33, 0x37, 0x3F, 0x3B, 0x33, 0x00], // U+00D1
    [0x0E, 0x00, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // U+00D2
    [0x70, 0x00, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // U+00D3
    [0x3C, 0x66, 0x18, 0x3C, 0x66, 0x3C, 0x18, 0x00], // U+00D4
    [0x6E, 0x3B, 0x00, 0x3E, 0x63, 0x63, 0x3E, 0x00], // U+00D5
    [0xC3, 0x18, 0x3C, 0x66, 0x66, 0x3C, 0x18, 0x00], // U+00D6
    [0x00, 0x36, 0x1C, 0x08, 0x1C, 0x36, 0x00, 0x00], // U+00D7
    [0x5C, 0x36, 0x73, 0x7B, 0x6F, 0x36, 0x1D, 0x00], // U+00D8
    [0x0E, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // U+00D9
    [0x70, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // U+00DA
    [0x3C, 0x66, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x00], // U+00DB
    [0x33, 0x00, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x00], // U+00DC
    [0x70, 0x00, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x00], // U+00DD
    [0x0F, 0x06, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x0F], // U+00DE
    [0x00, 0x1E, 0x33, 0x1F, 0x33, 0x1F, 0x03, 0x03], // U+00DF
    [0x07, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E0
    [0x38, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E1
    [0x7E, 0xC3, 0x3C, 0x60, 0x7C, 0x66, 0xFC, 0x00], // U+00E2
    [0x6E, 0x3B, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E3
    [0x33, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E4
    [0x0C, 0x0C, 0x1E, 0x30, 0x3E, 0x33, 0x7E, 0x00], // U+00E5
    [0x00, 0x00, 0xFE, 0x30, 0xFE, 0x33, 0xFE, 0x00], // U+00E6
    [0x00, 0x00, 0x1E, 0x03, 0x03, 0x1E, 0x30, 0x1C], // U+00E7
    [0x07, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E8
    [0x38, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00E9
    [0x7E, 0xC3, 0x3C, 0x66, 0x7E, 0x06, 0x3C, 0x00], // U+00EA
    [0x33, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // U+00EB
    [0x07, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EC
    [0x1C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00ED
    [0x3E, 0x63, 0x1C, 0x18, 0x18, 0x18, 0x3C, 0x00], // U+00EE
    [0x33, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // U+00EF
    [0x1B, 0x0E, 0x1B, 0x30, 0x3E, 0x33, 0x1E, 0x00], // U+00F0
    [0x00, 0x1F, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x00], // U+00F1
    [0x00, 0x07, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F2
    [0x00, 0x38, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F3
    [0x1E, 0x33, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F4
    [0x6E, 0x3B, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F5
    [0x00, 0x33, 0x00, 0x1E, 0x33, 0x33, 0x1E, 0x00], // U+00F6
    [0x18, 0x18, 0x00, 0x7E, 0x00, 0x18, 0x18, 0x00], // U+00F7
    [0x00, 0x60, 0x3C, 0x76, 0x7E, 0x6E, 0x3C, 0x06], // U+00F8
    [0x00, 0x07, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00F9
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00FA
    [0x1E, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00FB
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x33, 0x7E, 0x00], // U+00FC
    [0x00, 0x38, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FD
    [0x00, 0x00, 0x06, 0x3E, 0x66, 0x3E, 0x06, 0x00], // U+00FE
    [0x00, 0x33, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+00FF
    // Extras
    [0x1F, 0x33, 0x33, 0x5F, 0x63, 0xF3, 0x63, 0xE3], // U+20A7
    [0x70, 0xD8, 0x18, 0x3C, 0x18, 0x18, 0x1B, 0x0E], // U+0192
    [0x3C, 0x36, 0x36, 0x7C, 0x00, 0x7E, 0x00, 0x00], // U+2376
    [0x1C, 0x36, 0x36, 0x1C, 0x00, 0x3E, 0x00, 0x00], // U+235C
    [0x00, 0x00, 0x00, 0x3F, 0x03, 0x03, 0x00, 0x00], // U+2310
    [0x30, 0x18, 0x0C, 0x18, 0x30, 0x00, 0x7E, 0x00], // U+2264
    [0x0C, 0x18, 0x30, 0x18, 0x0C, 0x00, 0x7E, 0x00], // U+2265
    [0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // U+0060
    [0x0E, 0x00, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x00], // U+1EF2
    [0x00, 0x07, 0x00, 0x33, 0x33, 0x3E, 0x30, 0x1F], // U+1EF3
];
