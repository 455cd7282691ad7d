//! Error taxonomy for the driver.
//!
//! No operation in this crate retries on its own: a failure is reported once
//! and the command or page sequence it interrupted is abandoned. Retry and
//! backoff policy belongs to the caller.

use std::fmt;
use std::io;

use i2cdev::linux::LinuxI2CError;

#[derive(Debug)]
pub enum Error {
    /// The bus device node could not be opened or the panel address could not
    /// be bound. Fatal at construction; no usable connection exists.
    Connection(LinuxI2CError),
    /// A bus write failed outright.
    Transport(io::Error),
    /// The connection has been closed; the handle is no longer usable.
    Closed,
    /// A frame left the bus short of its full length.
    Protocol { expected: usize, actual: usize },
    /// A frame of the initialization sequence left the bus short; the panel
    /// is in an undefined configuration.
    Init { expected: usize, actual: usize },
    /// An out-of-range parameter was rejected before anything was sent.
    Validation { param: &'static str, value: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection(e) => write!(f, "failed to open the i2c bus: {}", e),
            Error::Transport(e) => write!(f, "i2c write failed: {}", e),
            Error::Closed => write!(f, "i2c connection is closed"),
            Error::Protocol { expected, actual } => {
                write!(f, "short frame: {} of {} bytes written", actual, expected)
            }
            Error::Init { expected, actual } => write!(
                f,
                "display init failed: {} of {} bytes written",
                actual, expected
            ),
            Error::Validation { param, value } => {
                write!(f, "{} out of range: {}", param, value)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connection(e) => Some(e),
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Transport(err)
    }
}
