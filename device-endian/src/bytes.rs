//! Reading and writing device-order values through byte slices.

use crate::{ByteOrder, DeviceEndian, EndianError};

/// Decodes a value laid out in `order` from a slice of exactly `size_of::<T>()` bytes.
///
/// # Errors
///
/// Returns [`EndianError::SliceLength`] if the slice is not exactly the width of `T`.
pub fn read_order<T: DeviceEndian>(bytes: &[u8], order: ByteOrder) -> Result<T, EndianError> {
    let mut buf = T::Bytes::default();
    check_len(buf.as_ref().len(), bytes.len())?;
    buf.as_mut().copy_from_slice(bytes);
    Ok(T::from_order_bytes(buf, order))
}

/// Encodes a value in `order` into a slice of exactly `size_of::<T>()` bytes.
///
/// # Errors
///
/// Returns [`EndianError::SliceLength`] if the slice is not exactly the width of `T`.
pub fn write_order<T: DeviceEndian>(
    value: T,
    out: &mut [u8],
    order: ByteOrder,
) -> Result<(), EndianError> {
    let encoded = value.to_order_bytes(order);
    check_len(encoded.as_ref().len(), out.len())?;
    out.copy_from_slice(encoded.as_ref());
    Ok(())
}

/// Decodes a device-order value from a slice.
///
/// # Errors
///
/// See [`read_order`].
#[inline]
pub fn read_device<T: DeviceEndian>(bytes: &[u8]) -> Result<T, EndianError> {
    read_order(bytes, ByteOrder::DEVICE)
}

/// Encodes a value into a slice in device order.
///
/// # Errors
///
/// See [`write_order`].
#[inline]
pub fn write_device<T: DeviceEndian>(value: T, out: &mut [u8]) -> Result<(), EndianError> {
    write_order(value, out, ByteOrder::DEVICE)
}

fn check_len(expected: usize, actual: usize) -> Result<(), EndianError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EndianError::SliceLength { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_one_big_endian() {
        let mut out = [0xaa; 4];
        write_order(1u32, &mut out, ByteOrder::Big).unwrap();
        insta::assert_snapshot!(format!("{out:02x?}"), @"[00, 00, 00, 01]");
        assert_eq!(read_order::<u32>(&out, ByteOrder::Big), Ok(1));
    }

    #[test]
    fn test_device_round_trip_through_buffer() {
        let mut buf = [0u8; 14];
        write_device(0xdead_beefu32, &mut buf[0..4]).unwrap();
        write_device(-3i16, &mut buf[4..6]).unwrap();
        write_device(core::f64::consts::PI, &mut buf[6..14]).unwrap();

        assert_eq!(&buf[0..4], 0xdead_beefu32.to_device_bytes());
        assert_eq!(read_device::<u32>(&buf[0..4]), Ok(0xdead_beef));
        assert_eq!(read_device::<i16>(&buf[4..6]), Ok(-3));
        assert_eq!(
            read_device::<f64>(&buf[6..14]).map(f64::to_bits),
            Ok(core::f64::consts::PI.to_bits())
        );
    }

    #[test]
    fn test_short_slice() {
        assert_eq!(
            read_device::<u64>(&[0; 7]),
            Err(EndianError::SliceLength {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_long_slice() {
        let mut out = [0u8; 3];
        assert_eq!(
            write_device(0u16, &mut out),
            Err(EndianError::SliceLength {
                expected: 2,
                actual: 3
            })
        );
        // Nothing is written on failure
        assert_eq!(out, [0; 3]);
    }

    #[test]
    fn test_nan_survives_slice_round_trip() {
        let mut out = [0u8; 4];
        write_order(f32::from_bits(0x7fa0_0001), &mut out, ByteOrder::Big).unwrap();
        assert_eq!(out, [0x7f, 0xa0, 0x00, 0x01]);
        assert_eq!(
            read_order::<f32>(&out, ByteOrder::Big).map(f32::to_bits),
            Ok(0x7fa0_0001)
        );
    }
}
