//! Raw register byte decoding.

/// Distance in centimetres from the big-endian high/low result bytes.
#[inline]
pub const fn decode_distance(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

/// Velocity register holds a two's-complement count.
#[inline]
pub const fn decode_velocity(raw: u8) -> i8 {
    raw as i8
}

/// Correlation record sample: low byte is the magnitude, a high byte of `1` marks it negative.
///
/// Negative samples are sign-extended by filling the upper byte, so `(0xFE, 1)` is `-2`.
#[inline]
pub const fn decode_correlation_sample(magnitude: u8, sign: u8) -> i16 {
    if sign == 1 {
        (magnitude as u16 | 0xFF00) as i16
    } else {
        magnitude as i16
    }
}
