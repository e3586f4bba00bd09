//! Register transaction primitives: writes, reads and the busy-poll protocol.

use embedded_hal::delay::DelayNs;

use crate::device::LidarLite;
use crate::error::{ReadError, TransportError};
use crate::interface::LidarLiteInterface;
use crate::registers::{Register, Status};

/// Maximum number of status polls before a busy-monitored read bails out.
pub const BUSY_POLL_LIMIT: u32 = 10_000;
// Time the sensor needs to latch a written value before the next transaction.
const WRITE_SETTLE_MS: u32 = 1;

impl<IFACE, D, CommE> LidarLite<IFACE, D>
where
    IFACE: LidarLiteInterface<Error = CommE>,
    D: DelayNs,
{
    /// Writes `value` to `register` as one two-byte transmission, then waits for the
    /// sensor to latch it.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), TransportError<CommE>> {
        let address = self.config.address;
        self.interface
            .write_bytes(address, &[register, value])
            .map_err(|err| {
                debug!("nack writing register {:#x}", register);
                TransportError::Nack(err)
            })?;
        self.delay.delay_ms(WRITE_SETTLE_MS);
        Ok(())
    }

    /// Fills `buf` from `register`.
    ///
    /// With `monitor_busy` set, the status register is polled until the busy flag clears.
    /// After [`BUSY_POLL_LIMIT`] polls the read gives up with [`ReadError::Bailout`] without
    /// touching `register`. On a short read `buf` contents are unspecified.
    pub fn read_register(
        &mut self,
        register: u8,
        buf: &mut [u8],
        monitor_busy: bool,
    ) -> Result<(), ReadError<CommE>> {
        if monitor_busy {
            self.wait_until_idle()?;
        }

        self.select(register)?;
        let received = self.receive(buf)?;
        if received < buf.len() {
            return Err(ReadError::ShortRead {
                requested: buf.len(),
                received,
            });
        }

        Ok(())
    }

    /// Polls the status register once.
    pub fn is_busy(&mut self) -> Result<bool, ReadError<CommE>> {
        Ok(self.read_status()?.busy())
    }

    fn wait_until_idle(&mut self) -> Result<(), ReadError<CommE>> {
        for _ in 0..BUSY_POLL_LIMIT {
            if !self.read_status()?.busy() {
                return Ok(());
            }
        }

        warn!("bailout after {} busy polls", BUSY_POLL_LIMIT);
        if self.config.error_reporting {
            self.report_bailout();
        }
        Err(ReadError::Bailout)
    }

    pub(crate) fn read_status(&mut self) -> Result<Status, ReadError<CommE>> {
        let mut raw = [0u8; 1];
        self.select(Status::ADDRESS)?;
        let received = self.receive(&mut raw)?;
        if received < raw.len() {
            return Err(ReadError::ShortRead {
                requested: raw.len(),
                received,
            });
        }
        Ok(Status::from(raw[0]))
    }

    /// Points the sensor's register pointer at `register`.
    pub(crate) fn select(&mut self, register: u8) -> Result<(), TransportError<CommE>> {
        let address = self.config.address;
        self.interface
            .write_bytes(address, &[register])
            .map_err(|err| {
                debug!("nack selecting register {:#x}", register);
                TransportError::Nack(err)
            })
    }

    pub(crate) fn receive(&mut self, buf: &mut [u8]) -> Result<usize, TransportError<CommE>> {
        let address = self.config.address;
        self.interface
            .read_bytes(address, buf)
            .map_err(TransportError::Nack)
    }
}
