//! Error handling primitives for the LIDAR-Lite driver.

use core::fmt;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, DriverError<E>>;

/// Failure of a single bus transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<E> {
    /// The bus reported a non-zero completion status for the transmission.
    Nack(E),
}

/// Failure of a register read transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The bus reported a non-zero completion status during the transaction.
    Nack(E),
    /// The busy flag never cleared within the poll budget.
    Bailout,
    /// The peripheral supplied fewer bytes than requested.
    ShortRead {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes the transport had available.
        received: usize,
    },
}

impl<E> From<TransportError<E>> for ReadError<E> {
    fn from(err: TransportError<E>) -> Self {
        match err {
            TransportError::Nack(inner) => Self::Nack(inner),
        }
    }
}

/// Measurement-level operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// Startup configuration.
    Init,
    /// Single distance acquisition.
    Distance,
    /// Arming free-running acquisition.
    BeginContinuous,
    /// Free-running distance readout.
    DistanceContinuous,
    /// Velocity period load.
    SetVelocityScale,
    /// Velocity acquisition.
    Velocity,
    /// Return signal strength read.
    SignalStrength,
    /// Correlation record readout.
    CorrelationRecord,
    /// Serial number read.
    SerialNumber,
    /// Bus address change.
    ChangeAddress,
    /// Diagnostic error-code read.
    ErrorCode,
}

impl Operation {
    /// Short lowercase name used in log output and `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Distance => "distance",
            Self::BeginContinuous => "begin_continuous",
            Self::DistanceContinuous => "distance_continuous",
            Self::SetVelocityScale => "set_velocity_scale",
            Self::Velocity => "velocity",
            Self::SignalStrength => "signal_strength",
            Self::CorrelationRecord => "correlation_record",
            Self::SerialNumber => "serial_number",
            Self::ChangeAddress => "change_address",
            Self::ErrorCode => "error_code",
        }
    }
}

/// Error variants produced by the measurement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<E> {
    /// A register transaction failed.
    Register {
        /// Operation that issued the transaction.
        operation: Operation,
        /// Register address targeted by the failing transaction.
        register: u8,
        /// Underlying transaction failure.
        source: ReadError<E>,
    },
    /// An argument was rejected before any bus traffic.
    InvalidArgument {
        /// Operation that rejected the argument.
        operation: Operation,
    },
}

impl<E> DriverError<E> {
    pub(crate) fn register(operation: Operation, register: u8, source: impl Into<ReadError<E>>) -> Self {
        Self::Register {
            operation,
            register,
            source: source.into(),
        }
    }

    /// Operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Register { operation, .. } | Self::InvalidArgument { operation } => *operation,
        }
    }

    /// Register targeted by the failing transaction, if the bus was involved.
    pub fn register_address(&self) -> Option<u8> {
        match self {
            Self::Register { register, .. } => Some(*register),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Underlying transaction failure, if the bus was involved.
    pub fn read_error(&self) -> Option<&ReadError<E>> {
        match self {
            Self::Register { source, .. } => Some(source),
            Self::InvalidArgument { .. } => None,
        }
    }

    /// Returns `true` when the busy-poll budget was exhausted.
    pub fn is_bailout(&self) -> bool {
        matches!(self.read_error(), Some(ReadError::Bailout))
    }
}

impl<E: fmt::Debug> fmt::Display for TransportError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nack(inner) => write!(f, "bus nack: {inner:?}"),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nack(inner) => write!(f, "bus nack: {inner:?}"),
            Self::Bailout => f.write_str("busy flag never cleared, bailed out"),
            Self::ShortRead { requested, received } => {
                write!(f, "short read: requested {requested} bytes, received {received}")
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for DriverError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register {
                operation,
                register,
                source,
            } => write!(f, "{} failed at register {register:#04x}: {source}", operation.name()),
            Self::InvalidArgument { operation } => {
                write!(f, "{} rejected an invalid argument", operation.name())
            }
        }
    }
}

impl<E: fmt::Debug> core::error::Error for TransportError<E> {}

impl<E: fmt::Debug> core::error::Error for ReadError<E> {}

impl<E: fmt::Debug> core::error::Error for DriverError<E> {}
