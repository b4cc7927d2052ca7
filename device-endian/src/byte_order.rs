use crate::EndianError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(not(any(target_endian = "little", target_endian = "big")))]
compile_error!("device-endian only supports little-endian and big-endian hosts");

/// The order in which the bytes of a multi-byte value are laid out in memory.
///
/// Three orders matter to this crate, and all of them are fixed at compile time:
///
/// - [`ByteOrder::HOST`] - the native order of the target CPU.
/// - [`ByteOrder::DEVICE`] - the order required by the wire or file format we interoperate with.
///   This is little-endian unless the `big-endian-device` feature is enabled.
/// - [`ByteOrder::INVERSE`] - the opposite of the device order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    #[cfg(target_endian = "little")]
    pub const HOST: ByteOrder = ByteOrder::Little;

    #[cfg(target_endian = "big")]
    pub const HOST: ByteOrder = ByteOrder::Big;

    #[cfg(not(feature = "big-endian-device"))]
    pub const DEVICE: ByteOrder = ByteOrder::Little;

    #[cfg(feature = "big-endian-device")]
    pub const DEVICE: ByteOrder = ByteOrder::Big;

    pub const INVERSE: ByteOrder = Self::DEVICE.opposite();

    /// The other byte order.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> ByteOrder {
        match self {
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::Big => ByteOrder::Little,
        }
    }

    /// Is this the native byte order of the host?
    ///
    /// When it is, converting to or from this order is the identity.
    #[inline]
    pub const fn is_host(self) -> bool {
        matches!(
            (self, Self::HOST),
            (ByteOrder::Little, ByteOrder::Little) | (ByteOrder::Big, ByteOrder::Big)
        )
    }

    /// Does converting between the host and this order require a byte swap?
    #[inline]
    pub const fn needs_swap(self) -> bool {
        !self.is_host()
    }
}

impl Display for ByteOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteOrder::Little => f.write_str("little"),
            ByteOrder::Big => f.write_str("big"),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = EndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(ByteOrder::Little),
            "big" | "be" => Ok(ByteOrder::Big),
            _ => Err(EndianError::UnknownByteOrder(s.to_string())),
        }
    }
}
