//! I2C driver for the SSD1306 dot matrix OLED display controller on Linux.
//!
//! The panel hangs off a `/dev/i2c-N` bus node at address 0x3C. Drawing
//! happens in an in-memory frame buffer (128 columns packed into 64-bit
//! words) and `Display::render` serializes it into the panel's
//! page-oriented wire protocol.
//!
//! ```rust,ignore
//! use ssd1306_linux::{Color, Config, Display, I2cBus};
//!
//! let bus = I2cBus::open(2)?;
//! let mut display = Display::new(bus);
//! display.init(&Config::default())?;
//! display.frame_mut().draw_text("hello", 4, 8);
//! display.frame_mut().draw_circle(96, 40, 14, Color::On);
//! display.render(0, 7)?;
//! ```

pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod interface;

// Re-exports for primary API.
pub use command::{AddressMode, ComScanDirection, ScrollDirection};
pub use config::Config;
pub use display::Display;
pub use error::Error;
pub use framebuffer::{Color, FrameBuffer};
pub use interface::i2c::I2cBus;
pub use interface::DisplayInterface;
