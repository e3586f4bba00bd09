//! I²C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::LidarLiteInterface;

/// I²C-based interface implementation for the LIDAR-Lite driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I²C bus abstraction.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Consumes the interface and returns the owned I²C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> LidarLiteInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_bytes(&mut self, address: u8, bytes: &[u8]) -> core::result::Result<(), Self::Error> {
        self.i2c.write(address, bytes)
    }

    // `I2c::read` either fills the whole buffer or reports an error.
    fn read_bytes(&mut self, address: u8, buf: &mut [u8]) -> core::result::Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }

        self.i2c.read(address, buf)?;
        Ok(buf.len())
    }
}
