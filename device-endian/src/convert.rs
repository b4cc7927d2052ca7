//! # Host/device conversion
//!
//! [`DeviceEndian`] gives every supported numeric type a `to_device` / `from_device` pair,
//! so one call site picks the right width from the static type of its argument.
//! The named functions at the bottom of this module are thin wrappers
//! for callers that prefer to spell the width out.

use crate::ByteOrder;
use crate::swap::{swap_f32, swap_f64, swap_i16, swap_i32, swap_i64, swap_u16, swap_u32, swap_u64};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width numeric value that can be converted between host and device byte order.
///
/// Every conversion is total and pure.
/// Converting to an order and back again always yields the original bit pattern,
/// and when the order in question is the host order, conversion is the identity.
pub trait DeviceEndian: Copy + sealed::Sealed {
    /// The in-memory representation of the value (`[u8; size_of::<Self>()]`).
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Unconditionally reverses the bytes of the value.
    #[must_use]
    fn swap(self) -> Self;

    /// Converts a host-order value to the given byte order.
    #[inline]
    #[must_use]
    fn to_order(self, order: ByteOrder) -> Self {
        if order.needs_swap() { self.swap() } else { self }
    }

    /// Converts a value in the given byte order to host order.
    ///
    /// Swapping is self-inverse, so this is the same operation as [`DeviceEndian::to_order`].
    #[inline]
    #[must_use]
    #[allow(clippy::wrong_self_convention)]
    fn from_order(self, order: ByteOrder) -> Self {
        self.to_order(order)
    }

    /// Converts a host-order value to device order.
    #[inline]
    #[must_use]
    fn to_device(self) -> Self {
        self.to_order(ByteOrder::DEVICE)
    }

    /// Converts a device-order value to host order.
    #[inline]
    #[must_use]
    #[allow(clippy::wrong_self_convention)]
    fn from_device(self) -> Self {
        self.from_order(ByteOrder::DEVICE)
    }

    /// The bytes of this (host-order) value as they appear when laid out in `order`.
    fn to_order_bytes(self, order: ByteOrder) -> Self::Bytes;

    /// Reads a host-order value from bytes laid out in `order`.
    fn from_order_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self;

    /// The bytes of this value as they go on the wire (or disk) in device order.
    #[inline]
    fn to_device_bytes(self) -> Self::Bytes {
        self.to_order_bytes(ByteOrder::DEVICE)
    }

    /// Reads a value from device-order bytes.
    #[inline]
    fn from_device_bytes(bytes: Self::Bytes) -> Self {
        Self::from_order_bytes(bytes, ByteOrder::DEVICE)
    }
}

macro_rules! impl_device_endian {
    ($($type:ty => $swap:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $type {}

            impl DeviceEndian for $type {
                type Bytes = [u8; size_of::<$type>()];

                #[inline]
                fn swap(self) -> Self {
                    $swap(self)
                }

                #[inline]
                fn to_order_bytes(self, order: ByteOrder) -> Self::Bytes {
                    self.to_order(order).to_ne_bytes()
                }

                #[inline]
                fn from_order_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
                    <$type>::from_ne_bytes(bytes).from_order(order)
                }
            }
        )*
    };
}

impl_device_endian!(
    u16 => swap_u16,
    u32 => swap_u32,
    u64 => swap_u64,
    i16 => swap_i16,
    i32 => swap_i32,
    i64 => swap_i64,
    f32 => swap_f32,
    f64 => swap_f64,
);

macro_rules! device_fns {
    ($($type:ty => $to:ident, $from:ident);* $(;)?) => {
        $(
            #[doc = concat!("Converts a host-order `", stringify!($type), "` to device order.")]
            #[inline]
            pub fn $to(v: $type) -> $type {
                v.to_device()
            }

            #[doc = concat!("Converts a device-order `", stringify!($type), "` to host order.")]
            #[inline]
            pub fn $from(v: $type) -> $type {
                v.from_device()
            }
        )*
    };
}

device_fns!(
    u16 => to_device_u16, from_device_u16;
    u32 => to_device_u32, from_device_u32;
    u64 => to_device_u64, from_device_u64;
    f32 => to_device_f32, from_device_f32;
    f64 => to_device_f64, from_device_f64;
);
