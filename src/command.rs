//! The command set for the SSD1306.
//!
//! Every payload on the bus opens with a control byte telling the panel how
//! to interpret the rest: 0x00 for commands, 0x40 for a page of pixel data.
//! The one exception is the cursor addressing triad, which the panel accepts
//! unframed (see `Display::set_cursor`).
//!
//! Display RAM is organized as 8 pages, each page one byte tall and 128
//! columns wide; a data frame fills the addressed page left to right.

use crate::error::Error;
use crate::interface::DisplayInterface;

/// Number of pixel columns on the panel.
pub const NUM_COLUMNS: usize = 128;
/// Number of pixel rows.
pub const NUM_ROWS: usize = 64;
/// Number of 8-row pages covering the panel.
pub const NUM_PAGES: u8 = 8;
/// Highest addressable column.
pub const COLUMN_MAX: u8 = (NUM_COLUMNS - 1) as u8;
/// Highest addressable page.
pub const PAGE_MAX: u8 = NUM_PAGES - 1;
/// Highest scroll speed step accepted by the scroll setup commands.
pub const SCROLL_SPEED_MAX: u8 = 7;

/// Control byte opening a command frame.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte opening a pixel-data frame.
pub const CONTROL_DATA: u8 = 0x40;

/// How the RAM address pointer advances while pixel data is written.
#[derive(Clone, Copy)]
pub enum AddressMode {
    /// Column advances first, wrapping to the start of the next page. The
    /// render pipeline assumes this mode: one data frame per page.
    Horizontal,
    /// Page advances first, wrapping to the next column.
    Vertical,
    /// Column advances within the addressed page only.
    Page,
}

/// COM output scan direction. Changing it flips the image vertically.
#[derive(Clone, Copy)]
pub enum ComScanDirection {
    /// Scan COM0 through COM63.
    Normal,
    /// Scan COM63 back through COM0. The reference module is wired this way.
    Remapped,
}

/// Horizontal travel direction for the scroll setup commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Turn the panel on (0xAF) or put it to sleep (0xAE).
    SetDisplayOn(bool),
    /// Set the display clock divide ratio / oscillator frequency register.
    SetClockDivide(u8),
    /// Set the multiplex ratio (active COM lines - 1). Range 15-63.
    SetMultiplexRatio(u8),
    /// Shift the COM output scan by 0-63 rows.
    SetDisplayOffset(u8),
    /// Map display RAM row `line` (0-63) to the top of the panel.
    SetStartLine(u8),
    /// Enable or disable the internal charge pump. Modules running without
    /// an external panel supply need it enabled before display-on.
    SetChargePump(bool),
    /// Select how the RAM address pointer advances during data writes.
    SetAddressMode(AddressMode),
    /// Map segment 0 to column 127 instead of column 0. Flips horizontally.
    SetSegmentRemap(bool),
    /// Set the COM scan direction. Flips vertically.
    SetComScanDirection(ComScanDirection),
    /// COM pins hardware configuration register.
    SetComPinConfig(u8),
    /// Contrast (segment drive current), 0-255.
    SetContrast(u8),
    /// Pre-charge period register: phase 1 in the low nibble, phase 2 high.
    SetPrechargePeriod(u8),
    /// VCOMH deselect level register.
    SetVcomhDeselectLevel(u8),
    /// Light every pixel regardless of RAM contents (true), or show RAM
    /// contents (false).
    SetEntireDisplayOn(bool),
    /// Invert the RAM-to-pixel mapping so lit pixels read dark.
    SetInverse(bool),
    /// Configure continuous horizontal scrolling of pages `start`-`end` at
    /// speed step `speed` (0-7). Takes effect on `ActivateScroll`.
    SetHorizontalScroll(ScrollDirection, u8, u8, u8),
    /// Configure combined vertical and horizontal scrolling of pages
    /// `start`-`end`. The vertical scroll area must be programmed first.
    SetDiagonalScroll(ScrollDirection, u8, u8),
    /// Split the panel into `fixed` non-scrolling top rows followed by
    /// `scroll` rows subject to vertical scrolling.
    SetVerticalScrollArea(u8, u8),
    /// Begin scrolling with the most recent setup.
    ActivateScroll,
    /// Stop scrolling.
    DeactivateScroll,
}

macro_rules! opcodes {
    ($buf:ident, [$($byte:expr),+]) => {{
        let src = [$($byte),+];
        $buf[..src.len()].copy_from_slice(&src);
        &$buf[..src.len()]
    }};
}

impl Command {
    /// Frame and transmit this command. Parameter ranges are checked before
    /// anything is written; a frame that leaves the bus short of its full
    /// length is a protocol error.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; 8];
        let opcodes: &[u8] = match self {
            Command::SetDisplayOn(on) => match on {
                true => opcodes!(buf, [0xAF]),
                false => opcodes!(buf, [0xAE]),
            },
            Command::SetClockDivide(ratio) => opcodes!(buf, [0xD5, ratio]),
            Command::SetMultiplexRatio(ratio) => match ratio {
                15..=63 => opcodes!(buf, [0xA8, ratio]),
                _ => {
                    return Err(Error::Validation {
                        param: "multiplex ratio",
                        value: ratio,
                    })
                }
            },
            Command::SetDisplayOffset(offset) => match offset {
                0..=63 => opcodes!(buf, [0xD3, offset]),
                _ => {
                    return Err(Error::Validation {
                        param: "display offset",
                        value: offset,
                    })
                }
            },
            Command::SetStartLine(line) => match line {
                0..=63 => opcodes!(buf, [0x40 | line]),
                _ => {
                    return Err(Error::Validation {
                        param: "start line",
                        value: line,
                    })
                }
            },
            Command::SetChargePump(enable) => match enable {
                true => opcodes!(buf, [0x8D, 0x14]),
                false => opcodes!(buf, [0x8D, 0x10]),
            },
            Command::SetAddressMode(mode) => {
                let mode = match mode {
                    AddressMode::Horizontal => 0x00,
                    AddressMode::Vertical => 0x01,
                    AddressMode::Page => 0x02,
                };
                opcodes!(buf, [0x20, mode])
            }
            Command::SetSegmentRemap(remap) => match remap {
                true => opcodes!(buf, [0xA1]),
                false => opcodes!(buf, [0xA0]),
            },
            Command::SetComScanDirection(direction) => match direction {
                ComScanDirection::Normal => opcodes!(buf, [0xC0]),
                ComScanDirection::Remapped => opcodes!(buf, [0xC8]),
            },
            Command::SetComPinConfig(config) => opcodes!(buf, [0xDA, config]),
            Command::SetContrast(contrast) => opcodes!(buf, [0x81, contrast]),
            Command::SetPrechargePeriod(period) => opcodes!(buf, [0xD9, period]),
            Command::SetVcomhDeselectLevel(level) => opcodes!(buf, [0xDB, level]),
            Command::SetEntireDisplayOn(on) => match on {
                true => opcodes!(buf, [0xA5]),
                false => opcodes!(buf, [0xA4]),
            },
            Command::SetInverse(inverse) => match inverse {
                true => opcodes!(buf, [0xA7]),
                false => opcodes!(buf, [0xA6]),
            },
            Command::SetHorizontalScroll(direction, start, end, speed) => {
                validate_page("scroll start page", start)?;
                validate_page("scroll end page", end)?;
                if speed > SCROLL_SPEED_MAX {
                    return Err(Error::Validation {
                        param: "scroll speed",
                        value: speed,
                    });
                }
                let opcode = match direction {
                    ScrollDirection::Right => 0x26,
                    ScrollDirection::Left => 0x27,
                };
                opcodes!(buf, [opcode, 0x00, start, speed, end, 0x00, 0xFF])
            }
            Command::SetDiagonalScroll(direction, start, end) => {
                validate_page("scroll start page", start)?;
                validate_page("scroll end page", end)?;
                let opcode = match direction {
                    ScrollDirection::Right => 0x29,
                    ScrollDirection::Left => 0x2A,
                };
                opcodes!(buf, [opcode, 0x00, start, 0x00, end, 0x3F])
            }
            Command::SetVerticalScrollArea(fixed, scroll) => {
                if fixed > NUM_ROWS as u8 - 1 {
                    return Err(Error::Validation {
                        param: "fixed rows",
                        value: fixed,
                    });
                }
                if scroll > NUM_ROWS as u8 {
                    return Err(Error::Validation {
                        param: "scroll rows",
                        value: scroll,
                    });
                }
                opcodes!(buf, [0xA3, fixed, scroll])
            }
            Command::ActivateScroll => opcodes!(buf, [0x2F]),
            Command::DeactivateScroll => opcodes!(buf, [0x2E]),
        };
        let written = iface.send_commands(opcodes)?;
        let expected = opcodes.len() + 1;
        if written != expected {
            return Err(Error::Protocol {
                expected,
                actual: written,
            });
        }
        Ok(())
    }
}

fn validate_page(param: &'static str, page: u8) -> Result<(), Error> {
    if page > PAGE_MAX {
        return Err(Error::Validation { param, value: page });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn display_on_off() {
        let mut di = TestSpyInterface::new();
        Command::SetDisplayOn(true).send(&mut di).unwrap();
        Command::SetDisplayOn(false).send(&mut di).unwrap();
        di.check(vec![vec![0x00, 0xAF], vec![0x00, 0xAE]]);
    }

    #[test]
    fn single_register_commands() {
        let mut di = TestSpyInterface::new();
        Command::SetClockDivide(0x80).send(&mut di).unwrap();
        Command::SetMultiplexRatio(0x3F).send(&mut di).unwrap();
        Command::SetDisplayOffset(0).send(&mut di).unwrap();
        Command::SetComPinConfig(0x12).send(&mut di).unwrap();
        Command::SetContrast(0xCF).send(&mut di).unwrap();
        Command::SetPrechargePeriod(0xF1).send(&mut di).unwrap();
        Command::SetVcomhDeselectLevel(0x40).send(&mut di).unwrap();
        di.check(vec![
            vec![0x00, 0xD5, 0x80],
            vec![0x00, 0xA8, 0x3F],
            vec![0x00, 0xD3, 0x00],
            vec![0x00, 0xDA, 0x12],
            vec![0x00, 0x81, 0xCF],
            vec![0x00, 0xD9, 0xF1],
            vec![0x00, 0xDB, 0x40],
        ]);
    }

    #[test]
    fn register_ranges_are_validated() {
        let mut di = TestSpyInterface::new();
        assert!(Command::SetMultiplexRatio(14).send(&mut di).is_err());
        assert!(Command::SetMultiplexRatio(64).send(&mut di).is_err());
        assert!(Command::SetDisplayOffset(64).send(&mut di).is_err());
        assert!(Command::SetStartLine(64).send(&mut di).is_err());
        di.check(vec![]);
    }

    #[test]
    fn start_line_is_encoded_in_the_opcode() {
        let mut di = TestSpyInterface::new();
        Command::SetStartLine(0).send(&mut di).unwrap();
        Command::SetStartLine(23).send(&mut di).unwrap();
        di.check(vec![vec![0x00, 0x40], vec![0x00, 0x57]]);
    }

    #[test]
    fn charge_pump_and_address_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetChargePump(true).send(&mut di).unwrap();
        Command::SetChargePump(false).send(&mut di).unwrap();
        Command::SetAddressMode(AddressMode::Horizontal)
            .send(&mut di)
            .unwrap();
        Command::SetAddressMode(AddressMode::Page).send(&mut di).unwrap();
        di.check(vec![
            vec![0x00, 0x8D, 0x14],
            vec![0x00, 0x8D, 0x10],
            vec![0x00, 0x20, 0x00],
            vec![0x00, 0x20, 0x02],
        ]);
    }

    #[test]
    fn orientation_and_mode_commands() {
        let mut di = TestSpyInterface::new();
        Command::SetSegmentRemap(true).send(&mut di).unwrap();
        Command::SetSegmentRemap(false).send(&mut di).unwrap();
        Command::SetComScanDirection(ComScanDirection::Remapped)
            .send(&mut di)
            .unwrap();
        Command::SetComScanDirection(ComScanDirection::Normal)
            .send(&mut di)
            .unwrap();
        Command::SetEntireDisplayOn(false).send(&mut di).unwrap();
        Command::SetInverse(true).send(&mut di).unwrap();
        Command::SetInverse(false).send(&mut di).unwrap();
        di.check(vec![
            vec![0x00, 0xA1],
            vec![0x00, 0xA0],
            vec![0x00, 0xC8],
            vec![0x00, 0xC0],
            vec![0x00, 0xA4],
            vec![0x00, 0xA7],
            vec![0x00, 0xA6],
        ]);
    }

    #[test]
    fn horizontal_scroll_setup_frame() {
        let mut di = TestSpyInterface::new();
        Command::SetHorizontalScroll(ScrollDirection::Right, 0, 7, 0)
            .send(&mut di)
            .unwrap();
        Command::SetHorizontalScroll(ScrollDirection::Left, 2, 5, 7)
            .send(&mut di)
            .unwrap();
        di.check(vec![
            vec![0x00, 0x26, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF],
            vec![0x00, 0x27, 0x00, 0x02, 0x07, 0x05, 0x00, 0xFF],
        ]);
    }

    #[test]
    fn horizontal_scroll_rejects_out_of_range_parameters() {
        let mut di = TestSpyInterface::new();
        let err = Command::SetHorizontalScroll(ScrollDirection::Right, 0, 7, 8)
            .send(&mut di)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                param: "scroll speed",
                value: 8
            }
        ));
        let err = Command::SetHorizontalScroll(ScrollDirection::Right, 8, 7, 0)
            .send(&mut di)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                param: "scroll start page",
                value: 8
            }
        ));
        let err = Command::SetHorizontalScroll(ScrollDirection::Left, 0, 9, 0)
            .send(&mut di)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                param: "scroll end page",
                value: 9
            }
        ));
        // Nothing reached the wire.
        di.check(vec![]);
    }

    #[test]
    fn diagonal_scroll_setup_frame() {
        let mut di = TestSpyInterface::new();
        Command::SetDiagonalScroll(ScrollDirection::Left, 0, 7)
            .send(&mut di)
            .unwrap();
        Command::SetDiagonalScroll(ScrollDirection::Right, 1, 6)
            .send(&mut di)
            .unwrap();
        di.check(vec![
            vec![0x00, 0x2A, 0x00, 0x00, 0x00, 0x07, 0x3F],
            vec![0x00, 0x29, 0x00, 0x01, 0x00, 0x06, 0x3F],
        ]);
        assert!(Command::SetDiagonalScroll(ScrollDirection::Left, 8, 7)
            .send(&mut di)
            .is_err());
    }

    #[test]
    fn vertical_scroll_area() {
        let mut di = TestSpyInterface::new();
        Command::SetVerticalScrollArea(0, 64).send(&mut di).unwrap();
        di.check(vec![vec![0x00, 0xA3, 0x00, 0x40]]);
        assert!(Command::SetVerticalScrollArea(0, 65).send(&mut di).is_err());
        assert!(Command::SetVerticalScrollArea(64, 0).send(&mut di).is_err());
    }

    #[test]
    fn scroll_start_stop() {
        let mut di = TestSpyInterface::new();
        Command::ActivateScroll.send(&mut di).unwrap();
        Command::DeactivateScroll.send(&mut di).unwrap();
        di.check(vec![vec![0x00, 0x2F], vec![0x00, 0x2E]]);
    }

    #[test]
    fn short_frame_is_a_protocol_error() {
        let mut di = TestSpyInterface::new();
        di.cap_writes(1);
        let err = Command::SetContrast(0xCF).send(&mut di).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol {
                expected: 3,
                actual: 1
            }
        ));
    }
}
