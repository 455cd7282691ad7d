//! The driver proper: owns the bus interface and the frame buffer, issues
//! the initialization sequence, addresses the device-side cursor, and runs
//! the page render pipeline.

use log::debug;

use crate::command::{Command, ScrollDirection, COLUMN_MAX, NUM_ROWS, PAGE_MAX};
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

/// The SSD1306 driver. All drawing happens in the in-memory frame buffer
/// (`frame_mut`); `render` pushes it to the panel page by page.
///
/// Not synchronized: the owning caller serializes access, either by keeping
/// the driver on one thread or by wrapping it in a lock. Every bus write
/// blocks with no timeout and nothing here retries.
pub struct Display<DI>
where
    DI: DisplayInterface,
{
    iface: DI,
    frame: FrameBuffer,
    /// Shadow of the last cursor triad written to the device: page register,
    /// column low nibble, column high nibble.
    cursor: [u8; 3],
}

impl<DI> Display<DI>
where
    DI: DisplayInterface,
{
    /// Wrap an open interface. The panel is untouched until `init`.
    pub fn new(iface: DI) -> Self {
        Display {
            iface,
            frame: FrameBuffer::new(),
            cursor: [0xB0, 0x00, 0x10],
        }
    }

    /// The in-memory pixel state.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable access to the frame buffer for the drawing primitives.
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Consume the driver and hand the interface back.
    pub fn release(self) -> DI {
        self.iface
    }

    /// Issue the full configuration sequence, one command frame per
    /// register, leaving the panel on and in normal (non-inverted) mode. A
    /// frame cut short surfaces as `Error::Init` with the byte counts and
    /// aborts the rest of the sequence.
    pub fn init(&mut self, config: &Config) -> Result<(), Error> {
        debug!("initializing display");
        let sequence = [
            Command::SetDisplayOn(false),
            Command::SetClockDivide(config.clock_divide),
            Command::SetMultiplexRatio(config.multiplex_ratio),
            Command::SetDisplayOffset(config.display_offset),
            Command::SetStartLine(config.start_line),
            Command::SetChargePump(config.charge_pump),
            Command::SetAddressMode(config.address_mode),
            Command::SetSegmentRemap(config.segment_remap),
            Command::SetComScanDirection(config.com_scan_direction),
            Command::SetComPinConfig(config.com_pin_config),
            Command::SetContrast(config.contrast),
            Command::SetPrechargePeriod(config.precharge_period),
            Command::SetVcomhDeselectLevel(config.vcomh_deselect_level),
            Command::SetEntireDisplayOn(false),
            Command::SetInverse(false),
            Command::SetDisplayOn(true),
        ];
        for command in sequence.iter() {
            command.send(&mut self.iface).map_err(|e| match e {
                Error::Protocol { expected, actual } => Error::Init { expected, actual },
                other => other,
            })?;
        }
        Ok(())
    }

    /// Re-run the init sequence and blank the panel.
    pub fn reset(&mut self, config: &Config) -> Result<(), Error> {
        self.init(config)?;
        self.clear_display()
    }

    /// Clear the frame buffer and push all eight blank pages out.
    pub fn clear_display(&mut self) -> Result<(), Error> {
        self.frame.clear();
        self.render(0, PAGE_MAX)
    }

    /// Address the device-side cursor: page start register plus the split
    /// column address. The triad goes on the wire unframed (no control
    /// byte). Returns the bytes written (3 when complete); out-of-range
    /// coordinates are rejected with nothing sent.
    pub fn set_cursor(&mut self, col: u8, page: u8) -> Result<usize, Error> {
        if col > COLUMN_MAX {
            return Err(Error::Validation {
                param: "cursor column",
                value: col,
            });
        }
        if page > PAGE_MAX {
            return Err(Error::Validation {
                param: "cursor page",
                value: page,
            });
        }
        self.cursor[0] = 0xB0 + page;
        self.cursor[1] = col & 0x0F;
        self.cursor[2] = 0x10 | ((col >> 4) & 0x0F);
        let cursor = self.cursor;
        self.iface.write_raw(&cursor)
    }

    /// Serialize pages `start_page..=end_page` of the frame buffer to the
    /// panel: per page, a cursor write followed by one 129-byte data frame.
    /// The first failure aborts the remaining pages, leaving the panel part
    /// new and part stale; the caller decides what to do about it.
    pub fn render(&mut self, start_page: u8, end_page: u8) -> Result<(), Error> {
        if start_page > PAGE_MAX {
            return Err(Error::Validation {
                param: "start page",
                value: start_page,
            });
        }
        if end_page > PAGE_MAX {
            return Err(Error::Validation {
                param: "end page",
                value: end_page,
            });
        }
        debug!("rendering pages {}..={}", start_page, end_page);
        for page in start_page..=end_page {
            let payload = self.frame.page(page);
            let written = self.set_cursor(0, page)?;
            if written != self.cursor.len() {
                return Err(Error::Protocol {
                    expected: self.cursor.len(),
                    actual: written,
                });
            }
            let written = self.iface.send_data(&payload)?;
            let expected = payload.len() + 1;
            if written != expected {
                return Err(Error::Protocol {
                    expected,
                    actual: written,
                });
            }
        }
        Ok(())
    }

    /// Turn the panel on or put it to sleep.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error> {
        Command::SetDisplayOn(on).send(&mut self.iface)
    }

    /// Invert the RAM-to-pixel mapping.
    pub fn set_inverse(&mut self, inverse: bool) -> Result<(), Error> {
        Command::SetInverse(inverse).send(&mut self.iface)
    }

    /// Runtime contrast control.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error> {
        Command::SetContrast(contrast).send(&mut self.iface)
    }

    /// Configure and start continuous horizontal scrolling of the page range
    /// at the given speed step. Parameters are validated before any byte is
    /// sent.
    pub fn start_horizontal_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        speed: u8,
    ) -> Result<(), Error> {
        Command::SetHorizontalScroll(direction, start_page, end_page, speed)
            .send(&mut self.iface)?;
        Command::ActivateScroll.send(&mut self.iface)
    }

    /// Configure and start diagonal (vertical plus horizontal) scrolling.
    /// The vertical scroll area is programmed first and the setup frame goes
    /// out only once that command has fully transmitted.
    pub fn start_diagonal_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
    ) -> Result<(), Error> {
        // Reject bad pages here so nothing reaches the wire on invalid
        // input, scroll-area frame included.
        if start_page > PAGE_MAX {
            return Err(Error::Validation {
                param: "scroll start page",
                value: start_page,
            });
        }
        if end_page > PAGE_MAX {
            return Err(Error::Validation {
                param: "scroll end page",
                value: end_page,
            });
        }
        Command::SetVerticalScrollArea(0x00, NUM_ROWS as u8).send(&mut self.iface)?;
        Command::SetDiagonalScroll(direction, start_page, end_page).send(&mut self.iface)?;
        Command::ActivateScroll.send(&mut self.iface)
    }

    /// Halt scrolling.
    pub fn stop_scroll(&mut self) -> Result<(), Error> {
        Command::DeactivateScroll.send(&mut self.iface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Color;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn init_issues_the_full_sequence_in_order() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.init(&Config::default()).unwrap();
        di.check(vec![
            vec![0x00, 0xAE],
            vec![0x00, 0xD5, 0x80],
            vec![0x00, 0xA8, 0x3F],
            vec![0x00, 0xD3, 0x00],
            vec![0x00, 0x40],
            vec![0x00, 0x8D, 0x14],
            vec![0x00, 0x20, 0x00],
            vec![0x00, 0xA1],
            vec![0x00, 0xC8],
            vec![0x00, 0xDA, 0x12],
            vec![0x00, 0x81, 0xCF],
            vec![0x00, 0xD9, 0xF1],
            vec![0x00, 0xDB, 0x40],
            vec![0x00, 0xA4],
            vec![0x00, 0xA6],
            vec![0x00, 0xAF],
        ]);
    }

    #[test]
    fn init_with_overrides_changes_the_register_bytes() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        let config = Config::new()
            .contrast(0x7F)
            .charge_pump(false)
            .com_scan_direction(crate::command::ComScanDirection::Normal);
        disp.init(&config).unwrap();
        let writes = di.writes();
        assert_eq!(writes[5].as_slice(), &[0x00, 0x8D, 0x10]);
        assert_eq!(writes[8].as_slice(), &[0x00, 0xC0]);
        assert_eq!(writes[10].as_slice(), &[0x00, 0x81, 0x7F]);
    }

    #[test]
    fn init_short_frame_reports_the_byte_counts() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        di.cap_writes(1);
        let err = disp.init(&Config::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Init {
                expected: 2,
                actual: 1
            }
        ));
        // The sequence stops at the first short frame.
        assert_eq!(di.writes().len(), 1);
    }

    #[test]
    fn set_cursor_splits_the_column_address() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        let written = disp.set_cursor(0x47, 3).unwrap();
        assert_eq!(written, 3);
        di.check(vec![vec![0xB3, 0x07, 0x14]]);
    }

    #[test]
    fn set_cursor_rejects_out_of_range_coordinates() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        assert!(matches!(
            disp.set_cursor(128, 0).unwrap_err(),
            Error::Validation {
                param: "cursor column",
                value: 128
            }
        ));
        assert!(matches!(
            disp.set_cursor(0, 8).unwrap_err(),
            Error::Validation {
                param: "cursor page",
                value: 8
            }
        ));
        di.check(vec![]);
    }

    #[test]
    fn render_full_screen_is_eight_addressed_pages() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.frame_mut().set_pixel(0, 0, Color::On);
        disp.frame_mut().set_pixel(127, 63, Color::On);
        disp.render(0, 7).unwrap();
        let writes = di.writes();
        assert_eq!(writes.len(), 16);
        for page in 0..8usize {
            let cursor = &writes[page * 2];
            assert_eq!(cursor.as_slice(), &[0xB0 + page as u8, 0x00, 0x10]);
            let data = &writes[page * 2 + 1];
            assert_eq!(data.len(), 129);
            assert_eq!(data[0], 0x40);
        }
        // Bit 0 of column 0 lands in page 0; bit 63 of column 127 in page 7.
        assert_eq!(writes[1][1], 0x01);
        assert_eq!(writes[15][128], 0x80);
    }

    #[test]
    fn render_covers_only_the_requested_pages() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.render(2, 3).unwrap();
        let writes = di.writes();
        assert_eq!(writes.len(), 4);
        assert_eq!(writes[0].as_slice(), &[0xB2, 0x00, 0x10]);
        assert_eq!(writes[2].as_slice(), &[0xB3, 0x00, 0x10]);
    }

    #[test]
    fn render_rejects_out_of_range_pages() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        assert!(matches!(
            disp.render(0, 8).unwrap_err(),
            Error::Validation {
                param: "end page",
                value: 8
            }
        ));
        assert!(matches!(
            disp.render(9, 7).unwrap_err(),
            Error::Validation {
                param: "start page",
                value: 9
            }
        ));
        di.check(vec![]);
    }

    #[test]
    fn render_aborts_on_a_short_data_write() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        // Cursor triads still fit, data frames get cut short.
        di.cap_writes(3);
        let err = disp.render(0, 7).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol {
                expected: 129,
                actual: 3
            }
        ));
        // One cursor write and one truncated page; pages 1-7 never started.
        assert_eq!(di.writes().len(), 2);
    }

    #[test]
    fn render_aborts_on_a_short_cursor_write() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        di.cap_writes(2);
        let err = disp.render(0, 7).unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol {
                expected: 3,
                actual: 2
            }
        ));
        assert_eq!(di.writes().len(), 1);
    }

    #[test]
    fn clear_display_blanks_every_page() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.frame_mut().fill_rectangle(0, 0, 127, 63, Color::On);
        disp.clear_display().unwrap();
        let writes = di.writes();
        assert_eq!(writes.len(), 16);
        for page in 0..8usize {
            let data = &writes[page * 2 + 1];
            assert_eq!(data[0], 0x40);
            assert!(data[1..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn display_state_and_inversion() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.set_display_on(false).unwrap();
        disp.set_display_on(true).unwrap();
        disp.set_inverse(true).unwrap();
        disp.set_inverse(false).unwrap();
        disp.set_contrast(0x30).unwrap();
        di.check(vec![
            vec![0x00, 0xAE],
            vec![0x00, 0xAF],
            vec![0x00, 0xA7],
            vec![0x00, 0xA6],
            vec![0x00, 0x81, 0x30],
        ]);
    }

    #[test]
    fn horizontal_scroll_sends_setup_then_activate() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.start_horizontal_scroll(ScrollDirection::Right, 0, 7, 0)
            .unwrap();
        di.check(vec![
            vec![0x00, 0x26, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF],
            vec![0x00, 0x2F],
        ]);
    }

    #[test]
    fn horizontal_scroll_rejects_bad_speed_without_writing() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        let err = disp
            .start_horizontal_scroll(ScrollDirection::Right, 0, 7, 8)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                param: "scroll speed",
                value: 8
            }
        ));
        di.check(vec![]);
    }

    #[test]
    fn diagonal_scroll_programs_the_vertical_area_first() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.start_diagonal_scroll(ScrollDirection::Left, 0, 7).unwrap();
        di.check(vec![
            vec![0x00, 0xA3, 0x00, 0x40],
            vec![0x00, 0x2A, 0x00, 0x00, 0x00, 0x07, 0x3F],
            vec![0x00, 0x2F],
        ]);
    }

    #[test]
    fn diagonal_scroll_rejects_bad_pages_before_the_area_frame() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        let err = disp
            .start_diagonal_scroll(ScrollDirection::Left, 8, 7)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation {
                param: "scroll start page",
                value: 8
            }
        ));
        di.check(vec![]);
    }

    #[test]
    fn diagonal_scroll_stops_if_the_area_frame_is_short() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        di.cap_writes(2);
        let err = disp
            .start_diagonal_scroll(ScrollDirection::Right, 0, 7)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol {
                expected: 4,
                actual: 2
            }
        ));
        assert_eq!(di.writes().len(), 1);
    }

    #[test]
    fn stop_scroll_is_a_single_command() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.stop_scroll().unwrap();
        di.check(vec![vec![0x00, 0x2E]]);
    }
}
