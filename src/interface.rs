//! The bus interface seam. `DisplayInterface` abstracts the transport so the
//! command sequencer and render pipeline can run against a spy in tests;
//! `i2c::I2cBus` is the real Linux transport.

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};
use crate::error::Error;

pub trait DisplayInterface {
    /// Write bytes to the bus with no control-byte framing, returning how
    /// many went out. Partial writes are not retried here; callers compare
    /// the count against the frame length. The cursor addressing triad is
    /// the one payload the panel accepts unframed.
    fn write_raw(&mut self, bytes: &[u8]) -> Result<usize, Error>;

    /// Frame `opcodes` as a single command transaction: control byte 0x00
    /// followed by the opcodes. Returns total bytes written including the
    /// control byte.
    fn send_commands(&mut self, opcodes: &[u8]) -> Result<usize, Error> {
        let mut frame = Vec::with_capacity(opcodes.len() + 1);
        frame.push(CONTROL_COMMAND);
        frame.extend_from_slice(opcodes);
        self.write_raw(&frame)
    }

    /// Frame one page of pixel bytes as a data transaction (control byte
    /// 0x40).
    fn send_data(&mut self, payload: &[u8]) -> Result<usize, Error> {
        let mut frame = Vec::with_capacity(payload.len() + 1);
        frame.push(CONTROL_DATA);
        frame.extend_from_slice(payload);
        self.write_raw(&frame)
    }
}

pub mod i2c {
    //! Transport over a Linux i2c-dev node. Opening binds the panel's slave
    //! address to the file descriptor; every write is a blocking write(2)
    //! with no timeout.

    use i2cdev::core::I2CDevice;
    use i2cdev::linux::LinuxI2CDevice;
    use log::debug;

    use super::DisplayInterface;
    use crate::error::Error;

    /// Factory-default SSD1306 slave address.
    pub const DEFAULT_ADDRESS: u16 = 0x3C;

    /// An open connection to the panel.
    ///
    /// The device handle is released exactly once: either by `close` or by
    /// dropping the bus. `close` is a no-op after the first call, and any
    /// write after it fails with `Error::Closed`.
    pub struct I2cBus {
        dev: Option<LinuxI2CDevice>,
    }

    impl I2cBus {
        /// Open `/dev/i2c-{bus}` and bind the default panel address.
        pub fn open(bus: u8) -> Result<Self, Error> {
            Self::open_at(bus, DEFAULT_ADDRESS)
        }

        /// Open `/dev/i2c-{bus}` and bind `addr`.
        pub fn open_at(bus: u8, addr: u16) -> Result<Self, Error> {
            let path = format!("/dev/i2c-{}", bus);
            let dev = LinuxI2CDevice::new(&path, addr).map_err(Error::Connection)?;
            debug!("opened {} at address {:#04x}", path, addr);
            Ok(I2cBus { dev: Some(dev) })
        }

        /// Release the bus connection. Safe to call repeatedly.
        pub fn close(&mut self) {
            self.dev = None;
        }
    }

    impl DisplayInterface for I2cBus {
        fn write_raw(&mut self, bytes: &[u8]) -> Result<usize, Error> {
            let dev = self.dev.as_mut().ok_or(Error::Closed)?;
            dev.write(bytes)
                .map(|()| bytes.len())
                .map_err(|e| Error::Transport(e.into()))
        }
    }
}
