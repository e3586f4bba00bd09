//! Register map definitions for the LIDAR-Lite v2 rangefinder.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Register address of `ACQ_COMMAND`.
pub const REG_ACQ_COMMAND: u8 = 0x00;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x01;
/// Register address of `MODE_CONTROL`.
pub const REG_MODE_CONTROL: u8 = 0x04;
/// Register address of `VELOCITY`.
pub const REG_VELOCITY: u8 = 0x09;
/// Register address of `SIGNAL_STRENGTH`.
pub const REG_SIGNAL_STRENGTH: u8 = 0x0E;
/// Register address of `CONTINUOUS_COUNT`.
pub const REG_CONTINUOUS_COUNT: u8 = 0x11;
/// Register address of `TEST_MODE`, also read back as the diagnostic error code.
pub const REG_TEST_MODE: u8 = 0x40;
/// Register address of `CONTINUOUS_INTERVAL`.
pub const REG_CONTINUOUS_INTERVAL: u8 = 0x45;
/// Register address of `MEMORY_BANK`.
pub const REG_MEMORY_BANK: u8 = 0x5D;
/// Register address of `VELOCITY_SCALE`.
pub const REG_VELOCITY_SCALE: u8 = 0x68;
/// Register address of `DISTANCE_HIGH`.
pub const REG_DISTANCE: u8 = 0x0F;
/// Register address of `SERIAL_NUMBER_HIGH`.
pub const REG_SERIAL_NUMBER: u8 = 0x16;
/// Register address of `SERIAL_STAGE_LOW`.
pub const REG_SERIAL_STAGE_LOW: u8 = 0x18;
/// Register address of `SERIAL_STAGE_HIGH`.
pub const REG_SERIAL_STAGE_HIGH: u8 = 0x19;
/// Register address of `ADDRESS_STAGE`.
pub const REG_ADDRESS_STAGE: u8 = 0x1A;
/// Register address of `ADDRESS_COMMIT`.
pub const REG_ADDRESS_COMMIT: u8 = 0x1E;
/// Register address of `CORRELATION_SAMPLE`.
pub const REG_CORRELATION_SAMPLE: u8 = 0xD2;

/// Setting the top bit of a register address makes the sensor advance the address after
/// every byte read within one transaction.
pub const AUTOINCREMENT: u8 = 0x80;

/// Applies the autoincrement flag to a register address.
pub const fn autoincrement(register: u8) -> u8 {
    register | AUTOINCREMENT
}

/// Distance result pair, read in one autoincrementing transaction (`0x8F`).
pub const REG_DISTANCE_AUTOINC: u8 = autoincrement(REG_DISTANCE);
/// Serial number pair, read in one autoincrementing transaction (`0x96`).
pub const REG_SERIAL_NUMBER_AUTOINC: u8 = autoincrement(REG_SERIAL_NUMBER);

/// Memory bank holding the correlation record.
pub const MEMORY_BANK_CORRELATION: u8 = 0xC0;
/// Test-mode selection that exposes the correlation record at `0xD2`.
pub const TEST_MODE_CORRELATION: u8 = 0x07;
/// Null command restoring normal operation of the test-mode register.
pub const TEST_MODE_OFF: u8 = 0x00;
/// Commit value that disables the factory default address.
pub const ADDRESS_COMMIT_DISABLE_PRIMARY: u8 = 0x08;
/// Commit value that keeps the factory default address responding.
pub const ADDRESS_COMMIT_KEEP_PRIMARY: u8 = 0x00;

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `STATUS` register (address `0x01`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // Acquisition in progress (bit 0).
    pub busy: bool,
    #[skip]
    __: B7,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `MODE_CONTROL` register (address `0x04`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeControl {
    // Ready pin pulls low when a continuous reading completes (bit 0).
    pub ready_pin_low: bool,
    #[skip]
    __: B4,
    // Continuous (free-running) acquisition (bit 5).
    pub continuous: bool,
    #[skip]
    __: B1,
    // Velocity measurement mode (bit 7).
    pub velocity: bool,
}

impl From<u8> for ModeControl {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<ModeControl> for u8 {
    fn from(value: ModeControl) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const RESET_VALUE: Option<Self::Raw> = None;
}

impl Register for ModeControl {
    type Raw = u8;
    const ADDRESS: u8 = REG_MODE_CONTROL;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}
