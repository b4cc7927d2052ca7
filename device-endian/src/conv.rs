//! Device-order field types, and helpers for converting between them and native values.
//!
//! The `Device*` aliases are zerocopy byte-order-aware integers and floats,
//! pinned to the configured device order.
//! They are unaligned and can be used directly as `#[repr(C)]` struct fields
//! when reading or writing device-order records.

#[cfg(not(feature = "big-endian-device"))]
pub type DeviceOrder = zerocopy::LE;

#[cfg(feature = "big-endian-device")]
pub type DeviceOrder = zerocopy::BE;

pub type DeviceU16 = zerocopy::U16<DeviceOrder>;
pub type DeviceU32 = zerocopy::U32<DeviceOrder>;
pub type DeviceU64 = zerocopy::U64<DeviceOrder>;
pub type DeviceF32 = zerocopy::F32<DeviceOrder>;
pub type DeviceF64 = zerocopy::F64<DeviceOrder>;

pub mod conv_u64 {
    use super::DeviceU64;
    pub const fn from_inner(n: u64) -> DeviceU64 {
        DeviceU64::new(n)
    }
    pub const fn into_inner(v: DeviceU64) -> u64 {
        v.get()
    }
}

pub mod conv_u32 {
    use super::DeviceU32;
    pub const fn from_inner(n: u32) -> DeviceU32 {
        DeviceU32::new(n)
    }
    pub const fn into_inner(v: DeviceU32) -> u32 {
        v.get()
    }
}

pub mod conv_u16 {
    use super::DeviceU16;
    pub const fn from_inner(n: u16) -> DeviceU16 {
        DeviceU16::new(n)
    }
    pub const fn into_inner(v: DeviceU16) -> u16 {
        v.get()
    }
}

pub mod conv_f32 {
    use super::DeviceF32;
    pub fn from_inner(n: f32) -> DeviceF32 {
        DeviceF32::new(n)
    }
    pub fn into_inner(v: DeviceF32) -> f32 {
        v.get()
    }
}

pub mod conv_f64 {
    use super::DeviceF64;
    pub fn from_inner(n: f64) -> DeviceF64 {
        DeviceF64::new(n)
    }
    pub fn into_inner(v: DeviceF64) -> f64 {
        v.get()
    }
}
