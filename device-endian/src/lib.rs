//! # Device byte order conversion
//!
//! Converts fixed-width integers and IEEE-754 floats between the host's byte order
//! and a fixed "device" byte order used by an external wire or file format.
//! The device order is little-endian unless the `big-endian-device` feature is enabled.
//!
//! When the host and device orders match, every conversion compiles down to the identity.
//! Otherwise, the bytes are reversed.
//! Floats are reinterpreted through their raw bits, so NaN payloads are preserved exactly.
//!
//! ```
//! use device_endian::{ByteOrder, DeviceEndian};
//!
//! let wire = 0x0102_0304u32.to_device();
//! assert_eq!(wire.from_device(), 0x0102_0304);
//! assert_eq!(1u32.to_order_bytes(ByteOrder::Big), [0, 0, 0, 1]);
//! ```

mod byte_order;
pub mod bytes;
pub mod conv;
mod convert;
mod error;
pub mod swap;

pub use byte_order::ByteOrder;
pub use convert::{
    DeviceEndian, from_device_f32, from_device_f64, from_device_u16, from_device_u32,
    from_device_u64, to_device_f32, to_device_f64, to_device_u16, to_device_u32, to_device_u64,
};
pub use error::EndianError;
