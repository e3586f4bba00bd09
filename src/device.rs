//! High-level LIDAR-Lite device driver implementation.

use crate::config::{validate_address, Config};
use crate::decode::{decode_correlation_sample, decode_distance, decode_velocity};
use crate::error::{DriverError, Operation, Result};
use crate::interface::i2c::I2cInterface;
use crate::interface::LidarLiteInterface;
use crate::params::{AcquisitionCommand, AcquisitionProfile, VelocityScale};
use crate::registers::{
    ModeControl,
    ADDRESS_COMMIT_DISABLE_PRIMARY,
    ADDRESS_COMMIT_KEEP_PRIMARY,
    MEMORY_BANK_CORRELATION,
    REG_ACQ_COMMAND,
    REG_ADDRESS_COMMIT,
    REG_ADDRESS_STAGE,
    REG_CONTINUOUS_COUNT,
    REG_CONTINUOUS_INTERVAL,
    REG_CORRELATION_SAMPLE,
    REG_DISTANCE_AUTOINC,
    REG_MEMORY_BANK,
    REG_MODE_CONTROL,
    REG_SERIAL_NUMBER_AUTOINC,
    REG_SERIAL_STAGE_HIGH,
    REG_SERIAL_STAGE_LOW,
    REG_SIGNAL_STRENGTH,
    REG_TEST_MODE,
    REG_VELOCITY,
    REG_VELOCITY_SCALE,
    TEST_MODE_CORRELATION,
    TEST_MODE_OFF,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Hardware limit on the number of correlation record samples.
pub const CORRELATION_RECORD_MAX: usize = 1024;

/// Synchronous driver for one LIDAR-Lite sensor.
///
/// The handle owns its bus interface and targets the address in its [`Config`]. To drive
/// several sensors on one bus, build one handle per sensor from shared bus devices
/// (for example `embedded-hal-bus`'s `RefCellDevice`). Callers must serialize access.
pub struct LidarLite<IFACE, D> {
    pub(crate) interface: IFACE,
    pub(crate) delay: D,
    pub(crate) config: Config,
}

impl<IFACE, D> LidarLite<IFACE, D> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, delay: D, config: Config) -> Self {
        Self {
            interface,
            delay,
            config,
        }
    }

    /// Consumes the driver and returns the owned interface and delay.
    pub fn release(self) -> (IFACE, D, Config) {
        (self.interface, self.delay, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bus address this handle currently targets.
    pub fn address(&self) -> u8 {
        self.config.address
    }
}

impl<I2C, D> LidarLite<I2cInterface<I2C>, D>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I²C transports.
    pub fn new_i2c(i2c: I2C, delay: D, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c), delay, config)
    }

    /// Releases the driver, returning the I²C bus, delay and configuration.
    pub fn release_i2c(self) -> (I2C, D, Config) {
        let (iface, delay, config) = self.release();
        (iface.release(), delay, config)
    }
}

impl<IFACE, D, CommE> LidarLite<IFACE, D>
where
    IFACE: LidarLiteInterface<Error = CommE>,
    D: DelayNs,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Validates the configuration and applies its startup settings.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.config
            .validate()
            .map_err(|_| DriverError::InvalidArgument {
                operation: Operation::Init,
            })?;

        if self.config.profile == AcquisitionProfile::HighSpeed {
            self.write(Operation::Init, REG_MODE_CONTROL, u8::from(ModeControl::new()))?;
        }

        if let Some(scale) = self.config.velocity_scale {
            self.write(Operation::Init, REG_VELOCITY_SCALE, scale.register_value())?;
        }

        Ok(())
    }

    // ==================================================================
    // == Distance ======================================================
    // ==================================================================
    /// Takes one distance reading in centimetres.
    ///
    /// With `stabilize` the acquisition includes preamp DC correction. Skipping it is faster
    /// but the sensor should be stabilized every hundred readings or so.
    pub fn distance(&mut self, stabilize: bool) -> Result<u16, CommE> {
        let command = AcquisitionCommand::from_stabilize(stabilize);
        self.write(Operation::Distance, REG_ACQ_COMMAND, command.register_value())?;

        let mut raw = [0u8; 2];
        self.read(Operation::Distance, REG_DISTANCE_AUTOINC, &mut raw, true)?;
        Ok(decode_distance(raw[0], raw[1]))
    }

    /// Arms free-running acquisition.
    ///
    /// `interval` is the delay between readings and `reading_count` the number of readings
    /// (`0xFF` runs indefinitely). With `ready_pin_low` the mode pin pulls low whenever a new
    /// reading is available.
    pub fn begin_continuous(
        &mut self,
        ready_pin_low: bool,
        interval: u8,
        reading_count: u8,
    ) -> Result<(), CommE> {
        let mode = ModeControl::new()
            .with_continuous(true)
            .with_ready_pin_low(ready_pin_low);

        self.write(Operation::BeginContinuous, REG_CONTINUOUS_INTERVAL, interval)?;
        self.write(Operation::BeginContinuous, REG_MODE_CONTROL, u8::from(mode))?;
        self.write(Operation::BeginContinuous, REG_CONTINUOUS_COUNT, reading_count)?;
        self.write(
            Operation::BeginContinuous,
            REG_ACQ_COMMAND,
            AcquisitionCommand::AcquireDcCorrected.register_value(),
        )
    }

    /// Reads the latest free-running result without polling the busy flag.
    pub fn distance_continuous(&mut self) -> Result<u16, CommE> {
        let mut raw = [0u8; 2];
        self.read(Operation::DistanceContinuous, REG_DISTANCE_AUTOINC, &mut raw, false)?;
        Ok(decode_distance(raw[0], raw[1]))
    }

    // ==================================================================
    // == Velocity & Signal =============================================
    // ==================================================================
    /// Loads the velocity measurement period.
    pub fn set_velocity_scale(&mut self, scale: VelocityScale) -> Result<(), CommE> {
        self.write(Operation::SetVelocityScale, REG_VELOCITY_SCALE, scale.register_value())?;
        self.config.velocity_scale = Some(scale);
        Ok(())
    }

    /// Measures velocity as the signed change between two readings one scaling period apart.
    ///
    /// Multiply by [`VelocityScale::mm_per_s`] for a physical value.
    pub fn velocity(&mut self) -> Result<i8, CommE> {
        self.write(
            Operation::Velocity,
            REG_ACQ_COMMAND,
            AcquisitionCommand::AcquireDcCorrected.register_value(),
        )?;
        let mode = ModeControl::new().with_velocity(true);
        self.write(Operation::Velocity, REG_MODE_CONTROL, u8::from(mode))?;

        let mut raw = [0u8; 1];
        self.read(Operation::Velocity, REG_VELOCITY, &mut raw, true)?;
        Ok(decode_velocity(raw[0]))
    }

    /// Strength of the last return signal.
    pub fn signal_strength(&mut self) -> Result<u8, CommE> {
        let mut raw = [0u8; 1];
        self.read(Operation::SignalStrength, REG_SIGNAL_STRENGTH, &mut raw, false)?;
        Ok(raw[0])
    }

    // ==================================================================
    // == Correlation Record ============================================
    // ==================================================================
    /// Reads `samples.len()` correlation record samples into `samples`.
    ///
    /// Only meaningful right after a [`distance`](Self::distance) acquisition; this call does
    /// not check that. Test mode is switched off again on every exit path once the memory
    /// bank has been selected. At most [`CORRELATION_RECORD_MAX`] samples can be requested.
    pub fn correlation_record(&mut self, samples: &mut [i16]) -> Result<usize, CommE> {
        if samples.len() > CORRELATION_RECORD_MAX {
            return Err(DriverError::InvalidArgument {
                operation: Operation::CorrelationRecord,
            });
        }

        self.write(Operation::CorrelationRecord, REG_MEMORY_BANK, MEMORY_BANK_CORRELATION)?;
        let outcome = self.read_correlation_samples(samples);

        trace!("restoring normal operation after correlation record");
        let restore = self.write(Operation::CorrelationRecord, REG_TEST_MODE, TEST_MODE_OFF);

        let count = outcome?;
        restore?;
        Ok(count)
    }

    fn read_correlation_samples(&mut self, samples: &mut [i16]) -> Result<usize, CommE> {
        self.write(Operation::CorrelationRecord, REG_TEST_MODE, TEST_MODE_CORRELATION)?;

        let mut raw = [0u8; 2];
        for sample in samples.iter_mut() {
            self.read(Operation::CorrelationRecord, REG_CORRELATION_SAMPLE, &mut raw, false)?;
            *sample = decode_correlation_sample(raw[0], raw[1]);
        }

        Ok(samples.len())
    }

    // ==================================================================
    // == Identification & Addressing ===================================
    // ==================================================================
    /// Reads the two serial number bytes as stored by the sensor.
    pub fn serial_number(&mut self) -> Result<[u8; 2], CommE> {
        let mut raw = [0u8; 2];
        self.read(Operation::SerialNumber, REG_SERIAL_NUMBER_AUTOINC, &mut raw, false)?;
        Ok(raw)
    }

    /// Moves the sensor to `new_address`.
    ///
    /// The sensor only accepts the change when its own serial number is echoed back, so the
    /// serial is read first and staged together with the new address before the commit.
    /// With `disable_primary` the factory address stops responding. The handle targets
    /// `new_address` from then on.
    pub fn change_address(&mut self, new_address: u8, disable_primary: bool) -> Result<u8, CommE> {
        validate_address(new_address).map_err(|_| DriverError::InvalidArgument {
            operation: Operation::ChangeAddress,
        })?;

        let mut serial = [0u8; 2];
        self.read(Operation::ChangeAddress, REG_SERIAL_NUMBER_AUTOINC, &mut serial, false)?;

        // Order matters: serial low, serial high, address, commit.
        self.write(Operation::ChangeAddress, REG_SERIAL_STAGE_LOW, serial[0])?;
        self.write(Operation::ChangeAddress, REG_SERIAL_STAGE_HIGH, serial[1])?;
        self.write(Operation::ChangeAddress, REG_ADDRESS_STAGE, new_address)?;
        let commit = if disable_primary {
            ADDRESS_COMMIT_DISABLE_PRIMARY
        } else {
            ADDRESS_COMMIT_KEEP_PRIMARY
        };
        self.write(Operation::ChangeAddress, REG_ADDRESS_COMMIT, commit)?;

        info!(
            "address changed from {:#x} to {:#x}",
            self.config.address,
            new_address
        );
        self.config.address = new_address;
        Ok(new_address)
    }

    // ==================================================================
    // == Internal Transaction Helpers ==================================
    // ==================================================================
    fn write(&mut self, operation: Operation, register: u8, value: u8) -> Result<(), CommE> {
        self.write_register(register, value)
            .map_err(|err| DriverError::register(operation, register, err))
    }

    fn read(
        &mut self,
        operation: Operation,
        register: u8,
        buf: &mut [u8],
        monitor_busy: bool,
    ) -> Result<(), CommE> {
        self.read_register(register, buf, monitor_busy)
            .map_err(|err| DriverError::register(operation, register, err))
    }
}

#[cfg(test)]
mod tests {
    use super::{LidarLite, CORRELATION_RECORD_MAX};
    use crate::client::tests::{Event, ScriptedBus};
    use crate::client::BUSY_POLL_LIMIT;
    use crate::config::Config;
    use crate::error::{DriverError, Operation, ReadError};
    use crate::interface::i2c::I2cInterface;
    use crate::params::{AcquisitionProfile, VelocityScale};
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    const ADDR: u8 = 0x62;

    fn lidar(expectations: &[Transaction]) -> LidarLite<I2cInterface<Mock>, NoopDelay> {
        LidarLite::new_i2c(Mock::new(expectations), NoopDelay, Config::default())
    }

    fn finish(lidar: LidarLite<I2cInterface<Mock>, NoopDelay>) {
        let (mut i2c, _, _) = lidar.release_i2c();
        i2c.done();
    }

    fn not_busy() -> [Transaction; 2] {
        [
            Transaction::write(ADDR, vec![0x01]),
            Transaction::read(ADDR, vec![0x00]),
        ]
    }

    #[test]
    fn distance_with_stabilization_decodes_big_endian() {
        let mut expectations = vec![Transaction::write(ADDR, vec![0x00, 0x04])];
        expectations.extend(not_busy());
        expectations.push(Transaction::write(ADDR, vec![0x8F]));
        expectations.push(Transaction::read(ADDR, vec![0x01, 0x2C]));
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.distance(true).unwrap(), 300);
        finish(lidar);
    }

    #[test]
    fn distance_without_stabilization_uses_plain_acquire() {
        let mut expectations = vec![Transaction::write(ADDR, vec![0x00, 0x03])];
        expectations.extend(not_busy());
        expectations.push(Transaction::write(ADDR, vec![0x8F]));
        expectations.push(Transaction::read(ADDR, vec![0x00, 0x07]));
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.distance(false).unwrap(), 7);
        finish(lidar);
    }

    #[test]
    fn distance_bails_out_when_sensor_stays_busy() {
        let mut expectations = vec![Transaction::write(ADDR, vec![0x00, 0x04])];
        for _ in 0..BUSY_POLL_LIMIT {
            expectations.push(Transaction::write(ADDR, vec![0x01]));
            expectations.push(Transaction::read(ADDR, vec![0x01]));
        }
        let mut lidar = lidar(&expectations);

        let err = lidar.distance(true).unwrap_err();
        assert_eq!(
            err,
            DriverError::Register {
                operation: Operation::Distance,
                register: 0x8F,
                source: ReadError::Bailout,
            }
        );
        finish(lidar);
    }

    #[test]
    fn begin_continuous_writes_setup_then_acquires() {
        let expectations = [
            Transaction::write(ADDR, vec![0x45, 0x04]),
            Transaction::write(ADDR, vec![0x04, 0x21]),
            Transaction::write(ADDR, vec![0x11, 0xFF]),
            Transaction::write(ADDR, vec![0x00, 0x04]),
        ];
        let mut lidar = lidar(&expectations);

        lidar.begin_continuous(true, 0x04, 0xFF).unwrap();
        finish(lidar);
    }

    #[test]
    fn begin_continuous_without_pin_uses_plain_mode() {
        let expectations = [
            Transaction::write(ADDR, vec![0x45, 0x10]),
            Transaction::write(ADDR, vec![0x04, 0x20]),
            Transaction::write(ADDR, vec![0x11, 0x05]),
            Transaction::write(ADDR, vec![0x00, 0x04]),
        ];
        let mut lidar = lidar(&expectations);

        lidar.begin_continuous(false, 0x10, 0x05).unwrap();
        finish(lidar);
    }

    #[test]
    fn distance_continuous_skips_busy_poll() {
        let expectations = [
            Transaction::write(ADDR, vec![0x8F]),
            Transaction::read(ADDR, vec![0x02, 0x00]),
        ];
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.distance_continuous().unwrap(), 512);
        finish(lidar);
    }

    #[test]
    fn velocity_is_signed() {
        let mut expectations = vec![
            Transaction::write(ADDR, vec![0x00, 0x04]),
            Transaction::write(ADDR, vec![0x04, 0x80]),
        ];
        expectations.extend(not_busy());
        expectations.push(Transaction::write(ADDR, vec![0x09]));
        expectations.push(Transaction::read(ADDR, vec![0xFE]));
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.velocity().unwrap(), -2);
        finish(lidar);
    }

    #[test]
    fn set_velocity_scale_loads_preset() {
        let expectations = [Transaction::write(ADDR, vec![0x68, 0x14])];
        let mut lidar = lidar(&expectations);

        lidar.set_velocity_scale(VelocityScale::Mps1_00).unwrap();
        assert_eq!(lidar.config().velocity_scale, Some(VelocityScale::Mps1_00));
        finish(lidar);
    }

    #[test]
    fn signal_strength_is_unsigned() {
        let expectations = [
            Transaction::write(ADDR, vec![0x0E]),
            Transaction::read(ADDR, vec![0xF0]),
        ];
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.signal_strength().unwrap(), 0xF0);
        finish(lidar);
    }

    #[test]
    fn nack_on_register_select_is_reported_without_reading() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
        let expectations = [Transaction::write(ADDR, vec![0x0E]).with_error(nack)];
        let mut lidar = lidar(&expectations);

        let err = lidar.signal_strength().unwrap_err();
        assert_eq!(err.operation(), Operation::SignalStrength);
        assert_eq!(err.register_address(), Some(0x0E));
        assert_eq!(err.read_error(), Some(&ReadError::Nack(nack)));
        finish(lidar);
    }

    #[test]
    fn nack_on_write_stops_sequence() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
        let expectations = [
            Transaction::write(ADDR, vec![0x45, 0x04]),
            Transaction::write(ADDR, vec![0x04, 0x21]).with_error(nack),
        ];
        let mut lidar = lidar(&expectations);

        let err = lidar.begin_continuous(true, 0x04, 0xFF).unwrap_err();
        assert_eq!(
            err,
            DriverError::Register {
                operation: Operation::BeginContinuous,
                register: 0x04,
                source: ReadError::Nack(nack),
            }
        );
        finish(lidar);
    }

    #[test]
    fn correlation_record_decodes_and_restores() {
        let expectations = [
            Transaction::write(ADDR, vec![0x5D, 0xC0]),
            Transaction::write(ADDR, vec![0x40, 0x07]),
            Transaction::write(ADDR, vec![0xD2]),
            Transaction::read(ADDR, vec![0x05, 0x00]),
            Transaction::write(ADDR, vec![0xD2]),
            Transaction::read(ADDR, vec![0xFE, 0x01]),
            Transaction::write(ADDR, vec![0x40, 0x00]),
        ];
        let mut lidar = lidar(&expectations);

        let mut samples = [0i16; 2];
        assert_eq!(lidar.correlation_record(&mut samples).unwrap(), 2);
        assert_eq!(samples, [5, -2]);
        finish(lidar);
    }

    #[test]
    fn correlation_record_restores_after_failed_read() {
        let bus = ScriptedBus::default()
            .reply(&[0x05, 0x00])
            .reply(&[0x06, 0x00])
            .nack_read();
        let mut lidar = LidarLite::new(bus, NoopDelay, Config::default());

        let mut samples = [0i16; 8];
        let err = lidar.correlation_record(&mut samples).unwrap_err();
        assert_eq!(err.operation(), Operation::CorrelationRecord);
        assert_eq!(err.register_address(), Some(0xD2));
        assert_eq!(samples[..2], [5, 6]);

        let (bus, _, _) = lidar.release();
        let restores = bus
            .events
            .iter()
            .filter(|event| **event == Event::Write(ADDR, vec![0x40, 0x00]))
            .count();
        assert_eq!(restores, 1);
        assert_eq!(bus.events.last(), Some(&Event::Write(ADDR, vec![0x40, 0x00])));
    }

    #[test]
    fn correlation_record_restores_when_test_mode_write_fails() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
        let expectations = [
            Transaction::write(ADDR, vec![0x5D, 0xC0]),
            Transaction::write(ADDR, vec![0x40, 0x07]).with_error(nack),
            Transaction::write(ADDR, vec![0x40, 0x00]),
        ];
        let mut lidar = lidar(&expectations);

        let mut samples = [0i16; 4];
        let err = lidar.correlation_record(&mut samples).unwrap_err();
        assert_eq!(err.register_address(), Some(0x40));
        finish(lidar);
    }

    #[test]
    fn correlation_record_rejects_oversized_request() {
        let mut lidar = lidar(&[]);

        let mut samples = [0i16; CORRELATION_RECORD_MAX + 1];
        let err = lidar.correlation_record(&mut samples).unwrap_err();
        assert_eq!(
            err,
            DriverError::InvalidArgument {
                operation: Operation::CorrelationRecord,
            }
        );
        finish(lidar);
    }

    #[test]
    fn change_address_writes_in_protocol_order() {
        let bus = ScriptedBus::default().reply(&[0xAB, 0xCD]);
        let mut lidar = LidarLite::new(bus, NoopDelay, Config::default());

        assert_eq!(lidar.change_address(0x66, true).unwrap(), 0x66);
        assert_eq!(lidar.address(), 0x66);

        let (bus, _, _) = lidar.release();
        assert_eq!(bus.events[..2], [Event::Write(ADDR, vec![0x96]), Event::Read(ADDR, 2)]);
        assert_eq!(
            bus.writes(),
            [
                vec![0x18, 0xAB],
                vec![0x19, 0xCD],
                vec![0x1A, 0x66],
                vec![0x1E, 0x08],
            ]
        );
        assert!(bus.events.iter().all(|event| match event {
            Event::Write(address, _) | Event::Read(address, _) => *address == ADDR,
        }));
    }

    #[test]
    fn change_address_can_keep_primary() {
        let expectations = [
            Transaction::write(ADDR, vec![0x96]),
            Transaction::read(ADDR, vec![0x12, 0x34]),
            Transaction::write(ADDR, vec![0x18, 0x12]),
            Transaction::write(ADDR, vec![0x19, 0x34]),
            Transaction::write(ADDR, vec![0x1A, 0x44]),
            Transaction::write(ADDR, vec![0x1E, 0x00]),
        ];
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.change_address(0x44, false).unwrap(), 0x44);
        finish(lidar);
    }

    #[test]
    fn change_address_rejects_odd_address_before_bus_traffic() {
        let mut lidar = lidar(&[]);

        let err = lidar.change_address(0x63, false).unwrap_err();
        assert_eq!(
            err,
            DriverError::InvalidArgument {
                operation: Operation::ChangeAddress,
            }
        );
        assert_eq!(lidar.address(), ADDR);
        finish(lidar);
    }

    #[test]
    fn serial_number_reads_autoincrement_pair() {
        let expectations = [
            Transaction::write(ADDR, vec![0x96]),
            Transaction::read(ADDR, vec![0x0A, 0x0B]),
        ];
        let mut lidar = lidar(&expectations);

        assert_eq!(lidar.serial_number().unwrap(), [0x0A, 0x0B]);
        finish(lidar);
    }

    #[test]
    fn init_applies_profile_and_scale() {
        let expectations = [
            Transaction::write(0x66, vec![0x04, 0x00]),
            Transaction::write(0x66, vec![0x68, 0x50]),
        ];
        let config = Config::new()
            .address(0x66)
            .profile(AcquisitionProfile::HighSpeed)
            .velocity_scale(VelocityScale::Mps0_25)
            .build();
        let mut lidar = LidarLite::new_i2c(Mock::new(&expectations), NoopDelay, config);

        lidar.init().unwrap();
        finish(lidar);
    }

    #[test]
    fn init_with_defaults_is_silent() {
        let mut lidar = lidar(&[]);

        lidar.init().unwrap();
        finish(lidar);
    }

    #[test]
    fn init_rejects_invalid_address() {
        let config = Config::new().address(0x61).build();
        let mut lidar = LidarLite::new_i2c(Mock::new(&[]), NoopDelay, config);

        let err = lidar.init().unwrap_err();
        assert_eq!(err, DriverError::InvalidArgument { operation: Operation::Init });
        finish(lidar);
    }

    #[test]
    fn handles_share_nothing_but_the_bus() {
        let expectations = [
            Transaction::write(0x62, vec![0x0E]),
            Transaction::read(0x62, vec![0x10]),
            Transaction::write(0x64, vec![0x0E]),
            Transaction::read(0x64, vec![0x20]),
        ];
        let i2c = Mock::new(&expectations);
        let mut first = LidarLite::new_i2c(i2c.clone(), NoopDelay, Config::default());
        let mut second =
            LidarLite::new_i2c(i2c.clone(), NoopDelay, Config::new().address(0x64).build());

        assert_eq!(first.signal_strength().unwrap(), 0x10);
        assert_eq!(second.signal_strength().unwrap(), 0x20);

        // Clones share one expectation queue, so `done` runs once.
        drop(second);
        finish(first);
    }
}
