//! Configuration primitives for the LIDAR-Lite driver.

use crate::params::{AcquisitionProfile, VelocityScale};

/// Factory default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x62;

/// User-facing configuration for the LIDAR-Lite sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit peripheral address the handle talks to.
    pub address: u8,
    /// Read the error-code register after a busy-poll bailout and log it.
    pub error_reporting: bool,
    /// Acquisition setup applied during `init`.
    pub profile: AcquisitionProfile,
    /// Velocity scaling preset applied during `init`, if any.
    pub velocity_scale: Option<VelocityScale>,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid for the sensor.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        validate_address(self.address)
    }
}

/// The sensor only accepts even 7-bit addresses.
pub(crate) fn validate_address(address: u8) -> core::result::Result<(), ConfigError> {
    if address > 0x7F || address & 0x01 != 0 {
        return Err(ConfigError::InvalidAddress);
    }

    Ok(())
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the peripheral address.
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Enables or disables the bailout diagnostic read.
    pub fn error_reporting(mut self, enabled: bool) -> Self {
        self.config.error_reporting = enabled;
        self
    }

    /// Sets the startup acquisition profile.
    pub fn profile(mut self, profile: AcquisitionProfile) -> Self {
        self.config.profile = profile;
        self
    }

    /// Sets the velocity scaling preset.
    pub fn velocity_scale(mut self, scale: VelocityScale) -> Self {
        self.config.velocity_scale = Some(scale);
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            error_reporting: false,
            profile: AcquisitionProfile::Balanced,
            velocity_scale: None,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Address is odd or does not fit in seven bits.
    InvalidAddress,
}
