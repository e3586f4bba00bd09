//! Error-code inspection used when a busy poll bails out.

use embedded_hal::delay::DelayNs;

use crate::device::LidarLite;
use crate::error::{DriverError, Operation, ReadError, Result};
use crate::interface::LidarLiteInterface;
use crate::registers::REG_TEST_MODE;

// The sensor needs time between selecting the error-code register and reading it back.
const ERROR_CODE_SELECT_MS: u32 = 20;
const ERROR_CODE_READ_MS: u32 = 10;
const ERROR_CODE_REPORT_MS: u32 = 20;

/// Outcome of the best-effort error-code check run after a bailout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum BailoutReport {
    /// The busy flag had cleared by the time the status was re-checked.
    Recovered,
    /// Still busy; the sensor reported this code in register `0x40`.
    ErrorCode(u8),
    /// The check itself failed on the bus.
    Unavailable,
}

impl<IFACE, D, CommE> LidarLite<IFACE, D>
where
    IFACE: LidarLiteInterface<Error = CommE>,
    D: DelayNs,
{
    /// Reads the diagnostic error code from register `0x40`.
    pub fn error_code(&mut self) -> Result<u8, CommE> {
        let mut raw = [0u8; 1];
        self.read_register(REG_TEST_MODE, &mut raw, false)
            .map_err(|err| DriverError::register(Operation::ErrorCode, REG_TEST_MODE, err))?;
        Ok(raw[0])
    }

    /// Best-effort error-code check run after a bailout. Never fails; the outcome is logged and
    /// returned for inspection only.
    pub(crate) fn report_bailout(&mut self) -> BailoutReport {
        let report = match self.fetch_error_code() {
            Ok(None) => BailoutReport::Recovered,
            Ok(Some(code)) => {
                error!("error code from register 0x40: {}", code);
                BailoutReport::ErrorCode(code)
            }
            Err(_) => {
                warn!("error code read failed");
                BailoutReport::Unavailable
            }
        };
        self.delay.delay_ms(ERROR_CODE_REPORT_MS);
        report
    }

    fn fetch_error_code(&mut self) -> core::result::Result<Option<u8>, ReadError<CommE>> {
        if !self.read_status()?.busy() {
            return Ok(None);
        }

        self.select(REG_TEST_MODE)?;
        self.delay.delay_ms(ERROR_CODE_SELECT_MS);
        let mut code = [0u8; 1];
        let received = self.receive(&mut code)?;
        self.delay.delay_ms(ERROR_CODE_READ_MS);
        if received < code.len() {
            return Err(ReadError::ShortRead {
                requested: code.len(),
                received,
            });
        }
        Ok(Some(code[0]))
    }
}
