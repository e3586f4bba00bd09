//! `#![no_std]` driver for the PulsedLight LIDAR-Lite v2 laser rangefinder.
//!
//! The sensor exposes a byte-addressable register map over I²C. Every measurement is a
//! fixed sequence of register writes and reads; see [`LidarLite`] for the operations.
//!
//! ```rust,no_run
//! use embedded_hal_mock::eh1::delay::NoopDelay;
//! use embedded_hal_mock::eh1::i2c::Mock;
//! use lidarlite::{Config, LidarLite};
//!
//! let i2c = Mock::new(&[]);
//! let mut lidar = LidarLite::new_i2c(i2c, NoopDelay, Config::default());
//!
//! lidar.init().unwrap();
//! let cm = lidar.distance(true).unwrap();
//! let _ = cm;
//! ```
#![cfg_attr(not(test), no_std)]

mod log; // <-- must be first module!

mod error;

pub mod client;
pub mod config;
pub mod decode;
pub mod device;
pub mod diagnostics;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::config::Config;
pub use crate::device::LidarLite;
pub use crate::error::{DriverError, Operation, ReadError, Result, TransportError};
