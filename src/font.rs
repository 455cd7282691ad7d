//! The built-in 6x8-advance font: one 8-byte column bitmap per byte code.
//!
//! Codes 0x20-0x7F are the printable ASCII glyphs. Codes above 0x7F carry the
//! panel's custom symbol and box-drawing glyphs rather than extended ASCII.
//! Bit 0 of each byte is the top row of its column.

/// One glyph cell: 8 column bytes.
pub type Glyph = [u8; 8];

/// Column advance used by `FrameBuffer::draw_text`. Glyph cells are 8 columns
/// wide but the visible strokes fit in 5, so text steps 6 columns per char.
pub const TEXT_PITCH: i32 = 6;

/// Look up the glyph bitmap for a byte code. Pure table access.
pub fn glyph(code: u8) -> &'static Glyph {
    &FONT[code as usize]
}

#[rustfmt::skip]
pub static FONT: [Glyph; 256] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x00
    [0x38, 0x74, 0x5c, 0x74, 0x38, 0x00, 0x00, 0x00], // 0x01
    [0x38, 0x74, 0x7c, 0x74, 0x38, 0x00, 0x00, 0x00], // 0x02
    [0x18, 0x3c, 0x78, 0x3c, 0x18, 0x00, 0x00, 0x00], // 0x03
    [0x10, 0x38, 0x7c, 0x38, 0x10, 0x00, 0x00, 0x00], // 0x04
    [0x18, 0x14, 0x7c, 0x14, 0x18, 0x00, 0x00, 0x00], // 0x05
    [0x30, 0x18, 0x7c, 0x18, 0x30, 0x00, 0x00, 0x00], // 0x06
    [0x00, 0x10, 0x38, 0x10, 0x00, 0x00, 0x00, 0x00], // 0x07
    [0xfe, 0xee, 0xc6, 0xee, 0xfe, 0x00, 0x00, 0x00], // 0x08
    [0x00, 0x10, 0x28, 0x10, 0x00, 0x00, 0x00, 0x00], // 0x09
    [0xfe, 0xee, 0xc6, 0xee, 0xfe, 0x00, 0x00, 0x00], // 0x0A
    [0x20, 0x50, 0x34, 0x0c, 0x1c, 0x00, 0x00, 0x00], // 0x0B
    [0x00, 0x28, 0x74, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x0C
    [0x60, 0x38, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x0D
    [0x60, 0x38, 0x04, 0x34, 0x1c, 0x00, 0x00, 0x00], // 0x0E
    [0x00, 0x10, 0x28, 0x10, 0x00, 0x00, 0x00, 0x00], // 0x0F
    [0x00, 0x7c, 0x38, 0x10, 0x00, 0x00, 0x00, 0x00], // 0x10
    [0x00, 0x10, 0x38, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0x11
    [0x00, 0x28, 0x7c, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x12
    [0x00, 0x5c, 0x00, 0x5c, 0x00, 0x00, 0x00, 0x00], // 0x13
    [0x18, 0xfc, 0x04, 0xfc, 0x04, 0x00, 0x00, 0x00], // 0x14
    [0x90, 0xa8, 0x48, 0x54, 0x24, 0x00, 0x00, 0x00], // 0x15
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00], // 0x16
    [0x00, 0xa8, 0xfc, 0xa8, 0x00, 0x00, 0x00, 0x00], // 0x17
    [0x00, 0x08, 0x7c, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x18
    [0x00, 0x20, 0x7c, 0x20, 0x00, 0x00, 0x00, 0x00], // 0x19
    [0x10, 0x10, 0x10, 0x38, 0x10, 0x00, 0x00, 0x00], // 0x1A
    [0x10, 0x38, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00], // 0x1B
    [0x30, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00], // 0x1C
    [0x10, 0x38, 0x10, 0x38, 0x10, 0x00, 0x00, 0x00], // 0x1D
    [0x40, 0x60, 0x70, 0x60, 0x40, 0x00, 0x00, 0x00], // 0x1E
    [0x10, 0x30, 0x70, 0x30, 0x10, 0x00, 0x00, 0x00], // 0x1F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20
    [0x00, 0x00, 0x5c, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x21
    [0x00, 0x0c, 0x00, 0x0c, 0x00, 0x00, 0x00, 0x00], // 0x22
    [0x28, 0x7c, 0x28, 0x7c, 0x28, 0x00, 0x00, 0x00], // 0x23
    [0x00, 0x50, 0xec, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x24
    [0x44, 0x2a, 0x34, 0x58, 0x24, 0x00, 0x00, 0x00], // 0x25
    [0x20, 0x58, 0x54, 0x24, 0x50, 0x00, 0x00, 0x00], // 0x26
    [0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27
    [0x00, 0x38, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x28
    [0x00, 0x44, 0x38, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x29
    [0x00, 0x54, 0x38, 0x54, 0x00, 0x00, 0x00, 0x00], // 0x2A
    [0x00, 0x10, 0x38, 0x10, 0x00, 0x00, 0x00, 0x00], // 0x2B
    [0x00, 0x80, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x2C
    [0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x2D
    [0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x2E
    [0x00, 0x60, 0x18, 0x04, 0x00, 0x00, 0x00, 0x00], // 0x2F
    [0x38, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00, 0x00], // 0x30
    [0x00, 0x08, 0x7c, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x31
    [0x48, 0x64, 0x54, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x32
    [0x44, 0x54, 0x54, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x33
    [0x20, 0x30, 0x28, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0x34
    [0x5c, 0x54, 0x54, 0x24, 0x00, 0x00, 0x00, 0x00], // 0x35
    [0x38, 0x54, 0x54, 0x20, 0x00, 0x00, 0x00, 0x00], // 0x36
    [0x04, 0x64, 0x14, 0x0c, 0x00, 0x00, 0x00, 0x00], // 0x37
    [0x28, 0x54, 0x54, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x38
    [0x08, 0x54, 0x54, 0x38, 0x00, 0x00, 0x00, 0x00], // 0x39
    [0x00, 0x00, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x3A
    [0x00, 0x80, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x3B
    [0x00, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x3C
    [0x00, 0x28, 0x28, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x3D
    [0x00, 0x44, 0x28, 0x10, 0x00, 0x00, 0x00, 0x00], // 0x3E
    [0x00, 0x54, 0x14, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x3F
    [0x38, 0x44, 0x54, 0x54, 0x08, 0x00, 0x00, 0x00], // 0x40
    [0x78, 0x14, 0x14, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x41
    [0x7c, 0x54, 0x54, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x42
    [0x38, 0x44, 0x44, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x43
    [0x7c, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00, 0x00], // 0x44
    [0x7c, 0x54, 0x54, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x45
    [0x7c, 0x14, 0x14, 0x04, 0x00, 0x00, 0x00, 0x00], // 0x46
    [0x38, 0x44, 0x44, 0x68, 0x00, 0x00, 0x00, 0x00], // 0x47
    [0x7c, 0x10, 0x10, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0x48
    [0x00, 0x44, 0x7c, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x49
    [0x30, 0x40, 0x40, 0x3c, 0x00, 0x00, 0x00, 0x00], // 0x4A
    [0x7c, 0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x4B
    [0x7c, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x4C
    [0x7c, 0x10, 0x10, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0x4D
    [0x7c, 0x08, 0x10, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0x4E
    [0x38, 0x44, 0x44, 0x38, 0x00, 0x00, 0x00, 0x00], // 0x4F
    [0x7c, 0x14, 0x14, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x50
    [0x38, 0x44, 0x44, 0xb8, 0x00, 0x00, 0x00, 0x00], // 0x51
    [0x7c, 0x14, 0x14, 0x68, 0x00, 0x00, 0x00, 0x00], // 0x52
    [0x48, 0x54, 0x54, 0x24, 0x00, 0x00, 0x00, 0x00], // 0x53
    [0x04, 0x04, 0x7c, 0x04, 0x04, 0x00, 0x00, 0x00], // 0x54
    [0x3c, 0x40, 0x40, 0x3c, 0x00, 0x00, 0x00, 0x00], // 0x55
    [0x1c, 0x60, 0x60, 0x1c, 0x00, 0x00, 0x00, 0x00], // 0x56
    [0x1c, 0x60, 0x18, 0x60, 0x1c, 0x00, 0x00, 0x00], // 0x57
    [0x4c, 0x30, 0x10, 0x6c, 0x00, 0x00, 0x00, 0x00], // 0x58
    [0x00, 0x1c, 0x60, 0x1c, 0x00, 0x00, 0x00, 0x00], // 0x59
    [0x64, 0x54, 0x4c, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x5A
    [0x00, 0x7c, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x5B
    [0x00, 0x0c, 0x30, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x5C
    [0x00, 0x44, 0x7c, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x5D
    [0x00, 0x08, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x5E
    [0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00], // 0x5F
    [0x00, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x60
    [0x00, 0x68, 0x28, 0x70, 0x00, 0x00, 0x00, 0x00], // 0x61
    [0x7e, 0x48, 0x48, 0x30, 0x00, 0x00, 0x00, 0x00], // 0x62
    [0x00, 0x30, 0x48, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x63
    [0x30, 0x48, 0x48, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0x64
    [0x30, 0x58, 0x58, 0x50, 0x00, 0x00, 0x00, 0x00], // 0x65
    [0x10, 0x78, 0x14, 0x04, 0x00, 0x00, 0x00, 0x00], // 0x66
    [0x10, 0xa8, 0xa8, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x67
    [0x7c, 0x08, 0x08, 0x70, 0x00, 0x00, 0x00, 0x00], // 0x68
    [0x00, 0x48, 0x7a, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x69
    [0x00, 0x80, 0x80, 0x7a, 0x00, 0x00, 0x00, 0x00], // 0x6A
    [0x7c, 0x10, 0x28, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x6B
    [0x00, 0x42, 0x7e, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x6C
    [0x78, 0x10, 0x10, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x6D
    [0x78, 0x08, 0x08, 0x70, 0x00, 0x00, 0x00, 0x00], // 0x6E
    [0x30, 0x48, 0x48, 0x30, 0x00, 0x00, 0x00, 0x00], // 0x6F
    [0xf8, 0x48, 0x48, 0x30, 0x00, 0x00, 0x00, 0x00], // 0x70
    [0x30, 0x48, 0x48, 0xf8, 0x00, 0x00, 0x00, 0x00], // 0x71
    [0x00, 0x78, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x72
    [0x50, 0x58, 0x68, 0x28, 0x00, 0x00, 0x00, 0x00], // 0x73
    [0x08, 0x3c, 0x48, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x74
    [0x38, 0x40, 0x40, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x75
    [0x18, 0x60, 0x60, 0x18, 0x00, 0x00, 0x00, 0x00], // 0x76
    [0x78, 0x20, 0x20, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x77
    [0x48, 0x30, 0x30, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x78
    [0x18, 0xa0, 0xa0, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x79
    [0x48, 0x68, 0x58, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x7A
    [0x00, 0x18, 0x24, 0x42, 0x00, 0x00, 0x00, 0x00], // 0x7B
    [0x00, 0x00, 0x7e, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x7C
    [0x00, 0x42, 0x24, 0x18, 0x00, 0x00, 0x00, 0x00], // 0x7D
    [0x10, 0x08, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00], // 0x7E
    [0x60, 0x50, 0x48, 0x50, 0x60, 0x00, 0x00, 0x00], // 0x7F
    [0x38, 0x44, 0xc4, 0x44, 0x00, 0x00, 0x00, 0x00], // 0x80
    [0x38, 0x42, 0x40, 0x7a, 0x00, 0x00, 0x00, 0x00], // 0x81
    [0x30, 0x58, 0x5a, 0x51, 0x00, 0x00, 0x00, 0x00], // 0x82
    [0x28, 0x4a, 0x31, 0x42, 0x00, 0x00, 0x00, 0x00], // 0x83
    [0x48, 0x2a, 0x70, 0x42, 0x00, 0x00, 0x00, 0x00], // 0x84
    [0x48, 0x29, 0x72, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x85
    [0x48, 0x28, 0x72, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x86
    [0x00, 0x30, 0xc8, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x87
    [0x30, 0x5a, 0x59, 0x52, 0x00, 0x00, 0x00, 0x00], // 0x88
    [0x30, 0x5a, 0x58, 0x52, 0x00, 0x00, 0x00, 0x00], // 0x89
    [0x30, 0x59, 0x5a, 0x50, 0x00, 0x00, 0x00, 0x00], // 0x8A
    [0x00, 0x4a, 0x78, 0x42, 0x00, 0x00, 0x00, 0x00], // 0x8B
    [0x00, 0x4a, 0x79, 0x42, 0x00, 0x00, 0x00, 0x00], // 0x8C
    [0x00, 0x49, 0x7a, 0x40, 0x00, 0x00, 0x00, 0x00], // 0x8D
    [0x79, 0x14, 0x15, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x8E
    [0x78, 0x14, 0x15, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x8F
    [0x7c, 0x54, 0x56, 0x45, 0x00, 0x00, 0x00, 0x00], // 0x90
    [0x68, 0x38, 0x70, 0x58, 0x58, 0x00, 0x00, 0x00], // 0x91
    [0x78, 0x14, 0x7c, 0x54, 0x00, 0x00, 0x00, 0x00], // 0x92
    [0x30, 0x4a, 0x49, 0x32, 0x00, 0x00, 0x00, 0x00], // 0x93
    [0x30, 0x4a, 0x48, 0x32, 0x00, 0x00, 0x00, 0x00], // 0x94
    [0x30, 0x49, 0x4a, 0x30, 0x00, 0x00, 0x00, 0x00], // 0x95
    [0x38, 0x42, 0x41, 0x7a, 0x00, 0x00, 0x00, 0x00], // 0x96
    [0x38, 0x41, 0x42, 0x78, 0x00, 0x00, 0x00, 0x00], // 0x97
    [0x18, 0xa2, 0xa0, 0x7a, 0x00, 0x00, 0x00, 0x00], // 0x98
    [0x30, 0x4a, 0x48, 0x32, 0x00, 0x00, 0x00, 0x00], // 0x99
    [0x3c, 0x41, 0x40, 0x3d, 0x00, 0x00, 0x00, 0x00], // 0x9A
    [0x30, 0x48, 0xcc, 0x48, 0x00, 0x00, 0x00, 0x00], // 0x9B
    [0x50, 0x7c, 0x52, 0x46, 0x00, 0x00, 0x00, 0x00], // 0x9C
    [0x02, 0x2e, 0x70, 0x2e, 0x02, 0x00, 0x00, 0x00], // 0x9D
    [0x7e, 0x12, 0x1c, 0x38, 0x50, 0x00, 0x00, 0x00], // 0x9E
    [0x90, 0x7c, 0x12, 0x12, 0x00, 0x00, 0x00, 0x00], // 0x9F
    [0x48, 0x2a, 0x71, 0x40, 0x00, 0x00, 0x00, 0x00], // 0xA0
    [0x00, 0x48, 0x7a, 0x41, 0x00, 0x00, 0x00, 0x00], // 0xA1
    [0x30, 0x48, 0x4a, 0x31, 0x00, 0x00, 0x00, 0x00], // 0xA2
    [0x38, 0x40, 0x42, 0x79, 0x00, 0x00, 0x00, 0x00], // 0xA3
    [0x7a, 0x09, 0x0a, 0x71, 0x00, 0x00, 0x00, 0x00], // 0xA4
    [0x7e, 0x19, 0x22, 0x7d, 0x00, 0x00, 0x00, 0x00], // 0xA5
    [0x00, 0x24, 0x2a, 0x2c, 0x00, 0x00, 0x00, 0x00], // 0xA6
    [0x00, 0x24, 0x2a, 0x24, 0x00, 0x00, 0x00, 0x00], // 0xA7
    [0x20, 0x50, 0x4a, 0x20, 0x00, 0x00, 0x00, 0x00], // 0xA8
    [0x60, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00], // 0xA9
    [0x20, 0x20, 0x20, 0x20, 0x60, 0x00, 0x00, 0x00], // 0xAA
    [0x2e, 0x10, 0x48, 0x54, 0x70, 0x00, 0x00, 0x00], // 0xAB
    [0x2e, 0x10, 0x48, 0x64, 0xf2, 0x00, 0x00, 0x00], // 0xAC
    [0x00, 0x20, 0x7a, 0x20, 0x00, 0x00, 0x00, 0x00], // 0xAD
    [0x20, 0x50, 0x20, 0x50, 0x00, 0x00, 0x00, 0x00], // 0xAE
    [0x50, 0x20, 0x50, 0x20, 0x00, 0x00, 0x00, 0x00], // 0xAF
    [0x55, 0xaa, 0x55, 0xaa, 0x55, 0x00, 0x00, 0x00], // 0xB0
    [0x55, 0xbb, 0x55, 0xee, 0x55, 0x00, 0x00, 0x00], // 0xB1
    [0x55, 0xff, 0xaa, 0xff, 0x55, 0x00, 0x00, 0x00], // 0xB2
    [0x00, 0x00, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xB3
    [0x08, 0x08, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xB4
    [0x14, 0x14, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xB5
    [0x08, 0xff, 0x00, 0xff, 0x00, 0x00, 0x00, 0x00], // 0xB6
    [0x08, 0xf8, 0x08, 0xf8, 0x00, 0x00, 0x00, 0x00], // 0xB7
    [0x14, 0x14, 0xfc, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xB8
    [0x14, 0xf7, 0x00, 0xff, 0x00, 0x00, 0x00, 0x00], // 0xB9
    [0x00, 0xff, 0x00, 0xff, 0x00, 0x00, 0x00, 0x00], // 0xBA
    [0x14, 0xf4, 0x04, 0xfc, 0x00, 0x00, 0x00, 0x00], // 0xBB
    [0x14, 0x17, 0x10, 0x1f, 0x00, 0x00, 0x00, 0x00], // 0xBC
    [0x08, 0x0f, 0x08, 0x0f, 0x00, 0x00, 0x00, 0x00], // 0xBD
    [0x14, 0x14, 0x1f, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xBE
    [0x08, 0x08, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xBF
    [0x00, 0x00, 0x0f, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xC0
    [0x08, 0x08, 0x0f, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xC1
    [0x08, 0x08, 0xf8, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xC2
    [0x00, 0x00, 0xff, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xC3
    [0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xC4
    [0x08, 0x08, 0xff, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xC5
    [0x00, 0x00, 0xff, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xC6
    [0x00, 0xff, 0x00, 0xff, 0x08, 0x00, 0x00, 0x00], // 0xC7
    [0x00, 0x1f, 0x10, 0x17, 0x14, 0x00, 0x00, 0x00], // 0xC8
    [0x00, 0xfc, 0x04, 0xf4, 0x14, 0x00, 0x00, 0x00], // 0xC9
    [0x14, 0x17, 0x10, 0x17, 0x14, 0x00, 0x00, 0x00], // 0xCA
    [0x14, 0xf4, 0x04, 0xf4, 0x14, 0x00, 0x00, 0x00], // 0xCB
    [0x00, 0xff, 0x00, 0xf7, 0x14, 0x00, 0x00, 0x00], // 0xCC
    [0x14, 0x14, 0x14, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xCD
    [0x14, 0xf7, 0x00, 0xf7, 0x14, 0x00, 0x00, 0x00], // 0xCE
    [0x14, 0x14, 0x17, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xCF
    [0x08, 0x0f, 0x08, 0x0f, 0x08, 0x00, 0x00, 0x00], // 0xD0
    [0x14, 0x14, 0xf4, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xD1
    [0x08, 0xf8, 0x08, 0xf8, 0x08, 0x00, 0x00, 0x00], // 0xD2
    [0x00, 0x0f, 0x08, 0x0f, 0x08, 0x00, 0x00, 0x00], // 0xD3
    [0x00, 0x00, 0x1f, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xD4
    [0x00, 0x00, 0xfc, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xD5
    [0x00, 0xf8, 0x08, 0xf8, 0x08, 0x00, 0x00, 0x00], // 0xD6
    [0x08, 0xff, 0x08, 0xff, 0x08, 0x00, 0x00, 0x00], // 0xD7
    [0x14, 0x14, 0xff, 0x14, 0x14, 0x00, 0x00, 0x00], // 0xD8
    [0x08, 0x08, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xD9
    [0x00, 0x00, 0xf8, 0x08, 0x08, 0x00, 0x00, 0x00], // 0xDA
    [0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00], // 0xDB
    [0xf0, 0xf0, 0xf0, 0xf0, 0xf0, 0x00, 0x00, 0x00], // 0xDC
    [0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDD
    [0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00], // 0xDE
    [0x0f, 0x0f, 0x0f, 0x0f, 0x0f, 0x00, 0x00, 0x00], // 0xDF
    [0x30, 0x48, 0x48, 0x30, 0x48, 0x00, 0x00, 0x00], // 0xE0
    [0xfc, 0x4a, 0x4a, 0x3c, 0x00, 0x00, 0x00, 0x00], // 0xE1
    [0x00, 0x7e, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00], // 0xE2
    [0x00, 0x7c, 0x04, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0xE3
    [0x62, 0x56, 0x4a, 0x42, 0x66, 0x00, 0x00, 0x00], // 0xE4
    [0x38, 0x44, 0x44, 0x3c, 0x04, 0x00, 0x00, 0x00], // 0xE5
    [0xf8, 0x40, 0x40, 0x38, 0x40, 0x00, 0x00, 0x00], // 0xE6
    [0x02, 0x04, 0x78, 0x06, 0x02, 0x00, 0x00, 0x00], // 0xE7
    [0x10, 0x28, 0xee, 0x28, 0x10, 0x00, 0x00, 0x00], // 0xE8
    [0x38, 0x54, 0x54, 0x54, 0x38, 0x00, 0x00, 0x00], // 0xE9
    [0x58, 0x64, 0x04, 0x64, 0x58, 0x00, 0x00, 0x00], // 0xEA
    [0x32, 0x4d, 0x49, 0x30, 0x00, 0x00, 0x00, 0x00], // 0xEB
    [0x30, 0x48, 0x78, 0x48, 0x30, 0x00, 0x00, 0x00], // 0xEC
    [0x50, 0x28, 0x58, 0x48, 0x34, 0x00, 0x00, 0x00], // 0xED
    [0x00, 0x3c, 0x4a, 0x4a, 0x00, 0x00, 0x00, 0x00], // 0xEE
    [0x7c, 0x02, 0x02, 0x7c, 0x00, 0x00, 0x00, 0x00], // 0xEF
    [0x54, 0x54, 0x54, 0x54, 0x00, 0x00, 0x00, 0x00], // 0xF0
    [0x48, 0x48, 0x5c, 0x48, 0x48, 0x00, 0x00, 0x00], // 0xF1
    [0x40, 0x62, 0x54, 0x48, 0x00, 0x00, 0x00, 0x00], // 0xF2
    [0x00, 0x48, 0x54, 0x62, 0x00, 0x00, 0x00, 0x00], // 0xF3
    [0x00, 0x00, 0xf8, 0x04, 0x0c, 0x00, 0x00, 0x00], // 0xF4
    [0x30, 0x20, 0x1f, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF5
    [0x10, 0x54, 0x54, 0x10, 0x00, 0x00, 0x00, 0x00], // 0xF6
    [0x48, 0x24, 0x48, 0x24, 0x00, 0x00, 0x00, 0x00], // 0xF7
    [0x00, 0x08, 0x14, 0x08, 0x00, 0x00, 0x00, 0x00], // 0xF8
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xF9
    [0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFA
    [0x20, 0x40, 0x30, 0x0c, 0x04, 0x00, 0x00, 0x00], // 0xFB
    [0x00, 0x0e, 0x02, 0x0c, 0x00, 0x00, 0x00, 0x00], // 0xFC
    [0x00, 0x12, 0x1a, 0x14, 0x00, 0x00, 0x00, 0x00], // 0xFD
    [0x00, 0x38, 0x38, 0x38, 0x00, 0x00, 0x00, 0x00], // 0xFE
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_pure() {
        assert_eq!(glyph(65), glyph(65));
        assert_eq!(glyph(65), &FONT[65]);
    }

    #[test]
    fn ascii_glyphs_are_where_they_should_be() {
        assert_eq!(glyph(b'A'), &[0x78, 0x14, 0x14, 0x78, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(glyph(b' '), &[0x00; 8]);
        // Column strokes fit the 6-pixel text pitch: byte 5 onward is blank
        // for every printable ASCII glyph.
        for code in 0x20..=0x7Fu8 {
            assert_eq!(glyph(code)[5..], [0x00, 0x00, 0x00], "code {:#04x}", code);
        }
    }

    #[test]
    fn high_codes_hold_the_custom_symbols() {
        // 0xDB is the solid-block glyph from the original table.
        assert_eq!(glyph(0xDB), &[0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00]);
    }
}
