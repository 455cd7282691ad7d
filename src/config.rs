//! Register values the initialization sequence programs into the panel.
//!
//! The defaults reproduce the reference configuration for a 128x64 module
//! running from the internal charge pump; builder methods override single
//! registers for modules wired differently.

use crate::command::{AddressMode, ComScanDirection};

/// Initialization-time configuration, consumed by `Display::init`. Every
/// register is always programmed rather than relying on the panel's
/// power-on state, so each field carries a concrete default.
#[derive(Clone, Copy)]
pub struct Config {
    pub(crate) clock_divide: u8,
    pub(crate) multiplex_ratio: u8,
    pub(crate) display_offset: u8,
    pub(crate) start_line: u8,
    pub(crate) charge_pump: bool,
    pub(crate) address_mode: AddressMode,
    pub(crate) segment_remap: bool,
    pub(crate) com_scan_direction: ComScanDirection,
    pub(crate) com_pin_config: u8,
    pub(crate) contrast: u8,
    pub(crate) precharge_period: u8,
    pub(crate) vcomh_deselect_level: u8,
}

impl Config {
    pub fn new() -> Self {
        Config {
            clock_divide: 0x80,
            multiplex_ratio: 0x3F,
            display_offset: 0x00,
            start_line: 0x00,
            charge_pump: true,
            address_mode: AddressMode::Horizontal,
            segment_remap: true,
            com_scan_direction: ComScanDirection::Remapped,
            com_pin_config: 0x12,
            contrast: 0xCF,
            precharge_period: 0xF1,
            vcomh_deselect_level: 0x40,
        }
    }

    /// Override the clock divide ratio / oscillator frequency register.
    pub fn clock_divide(self, clock_divide: u8) -> Self {
        Self {
            clock_divide,
            ..self
        }
    }

    /// Override the multiplex ratio (active COM lines - 1).
    pub fn multiplex_ratio(self, multiplex_ratio: u8) -> Self {
        Self {
            multiplex_ratio,
            ..self
        }
    }

    /// Override the COM scan row offset.
    pub fn display_offset(self, display_offset: u8) -> Self {
        Self {
            display_offset,
            ..self
        }
    }

    /// Override the display RAM row mapped to the top of the panel.
    pub fn start_line(self, start_line: u8) -> Self {
        Self { start_line, ..self }
    }

    /// Disable the internal charge pump for modules with an external panel
    /// supply.
    pub fn charge_pump(self, charge_pump: bool) -> Self {
        Self {
            charge_pump,
            ..self
        }
    }

    /// Override the RAM addressing mode. The render pipeline assumes
    /// `Horizontal`.
    pub fn address_mode(self, address_mode: AddressMode) -> Self {
        Self {
            address_mode,
            ..self
        }
    }

    /// Override the segment remap (horizontal flip).
    pub fn segment_remap(self, segment_remap: bool) -> Self {
        Self {
            segment_remap,
            ..self
        }
    }

    /// Override the COM scan direction (vertical flip).
    pub fn com_scan_direction(self, com_scan_direction: ComScanDirection) -> Self {
        Self {
            com_scan_direction,
            ..self
        }
    }

    /// Override the COM pins hardware configuration register.
    pub fn com_pin_config(self, com_pin_config: u8) -> Self {
        Self {
            com_pin_config,
            ..self
        }
    }

    /// Override the initial contrast level.
    pub fn contrast(self, contrast: u8) -> Self {
        Self { contrast, ..self }
    }

    /// Override the pre-charge period register.
    pub fn precharge_period(self, precharge_period: u8) -> Self {
        Self {
            precharge_period,
            ..self
        }
    }

    /// Override the VCOMH deselect level register.
    pub fn vcomh_deselect_level(self, vcomh_deselect_level: u8) -> Self {
        Self {
            vcomh_deselect_level,
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
