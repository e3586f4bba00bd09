//! Bus interface abstraction for the LIDAR-Lite driver.

pub mod i2c;

/// Abstraction over the raw bus transmissions required by the driver.
///
/// Each call is one complete transmission against a 7-bit peripheral address. The driver
/// assumes exclusive access for the duration of a call; share one physical bus between
/// several handles with an `embedded-hal-bus` device wrapper.
pub trait LidarLiteInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Sends `bytes` in a single transmission.
    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Requests `buf.len()` bytes and returns how many the peripheral actually supplied.
    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> core::result::Result<usize, Self::Error>;
}
