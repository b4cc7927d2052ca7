//! # Byte swap primitives
//!
//! Unconditional byte reversal at each supported width.
//! These never look at the host or device order;
//! that decision lives in [`DeviceEndian`](crate::DeviceEndian).
//!
//! Integer swaps are written out as masks and shifts.
//! Floats are swapped through their raw bit patterns ([`f32::to_bits`] / [`f32::from_bits`]),
//! so the value is never touched arithmetically and NaN payloads survive intact.

/// Reverses the two bytes of a 16-bit value.
#[inline]
pub const fn swap_u16(v: u16) -> u16 {
    ((v & 0xff00) >> 8) | ((v & 0x00ff) << 8)
}

/// Reverses the four bytes of a 32-bit value (byte 0↔3, 1↔2).
#[inline]
pub const fn swap_u32(v: u32) -> u32 {
    ((v & 0xff00_0000) >> 24)
        | ((v & 0x00ff_0000) >> 8)
        | ((v & 0x0000_ff00) << 8)
        | ((v & 0x0000_00ff) << 24)
}

/// Reverses the eight bytes of a 64-bit value (byte 0↔7, 1↔6, 2↔5, 3↔4).
#[inline]
pub const fn swap_u64(v: u64) -> u64 {
    (v << 56)
        | ((v << 40) & 0x00ff_0000_0000_0000)
        | ((v << 24) & 0x0000_ff00_0000_0000)
        | ((v << 8) & 0x0000_00ff_0000_0000)
        | ((v >> 8) & 0x0000_0000_ff00_0000)
        | ((v >> 24) & 0x0000_0000_00ff_0000)
        | ((v >> 40) & 0x0000_0000_0000_ff00)
        | (v >> 56)
}

// Signed values go through the unsigned swap of the same width.
// The casts are bit-preserving reinterpretations.

#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub const fn swap_i16(v: i16) -> i16 {
    swap_u16(v as u16) as i16
}

#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub const fn swap_i32(v: i32) -> i32 {
    swap_u32(v as u32) as i32
}

#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub const fn swap_i64(v: i64) -> i64 {
    swap_u64(v as u64) as i64
}

/// Reverses the byte layout of a single precision float.
#[inline]
pub const fn swap_f32(v: f32) -> f32 {
    f32::from_bits(swap_u32(v.to_bits()))
}

/// Reverses the byte layout of a double precision float.
#[inline]
pub const fn swap_f64(v: f64) -> f64 {
    f64::from_bits(swap_u64(v.to_bits()))
}
