use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use device_endian::{ByteOrder, DeviceEndian};
use serde_json::Value as JsonValue;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "device-endian-cli", author, version, about, long_about = None)]
struct Cli {
    /// Subcommand/tool to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the host, device and inverse byte orders
    Info,
    /// Convert a host value to the device byte order and show its wire bytes
    Convert {
        /// Numeric type of the value
        #[arg(value_enum)]
        kind: NumericKind,
        /// The value; integers accept 0x hex, and for floats 0x hex is the raw bit pattern
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target byte order (defaults to the configured device order)
        #[arg(long, env = "DEVICE_ENDIAN_ORDER")]
        order: Option<ByteOrder>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum NumericKind {
    U16,
    U32,
    U64,
    I16,
    I32,
    I64,
    F32,
    F64,
}

fn order_info() -> JsonValue {
    serde_json::json!({
        "host": ByteOrder::HOST,
        "device": ByteOrder::DEVICE,
        "inverse": ByteOrder::INVERSE,
        "swaps": ByteOrder::DEVICE.needs_swap(),
    })
}

/// Parses a decimal or `0x` hex integer, with an optional leading minus sign.
fn parse_integer(input: &str) -> anyhow::Result<i128> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let (digits, radix) = match hex_literal(digits) {
        Some(hex) => (hex, 16),
        None => (digits, 10),
    };
    let magnitude = parse_digits(digits, radix)
        .with_context(|| format!("invalid integer `{input}`"))?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn parse_int_as<T: TryFrom<i128>>(input: &str, kind: NumericKind) -> anyhow::Result<T> {
    let n = parse_integer(input)?;
    T::try_from(n).map_err(|_| anyhow!("{input} is out of range for {kind:?}"))
}

/// Parses unsigned digits (with optional `_` separators) in the given radix.
///
/// Unlike [`i128::from_str_radix`], this rejects a leading sign,
/// so a sign is only ever accepted once, by the caller.
fn parse_digits(digits: &str, radix: u32) -> anyhow::Result<i128> {
    if digits.is_empty() || !digits.chars().all(|c| c == '_' || c.is_digit(radix)) {
        return Err(anyhow!("expected base {radix} digits, got `{digits}`"));
    }
    Ok(i128::from_str_radix(&digits.replace('_', ""), radix)?)
}

fn hex_literal(input: &str) -> Option<&str> {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
}

fn parse_f32(input: &str) -> anyhow::Result<f32> {
    if let Some(hex) = hex_literal(input) {
        let bits = parse_digits(hex, 16)
            .and_then(|n| Ok(u32::try_from(n)?))
            .with_context(|| format!("invalid f32 bit pattern `{input}`"))?;
        Ok(f32::from_bits(bits))
    } else {
        input
            .parse()
            .with_context(|| format!("invalid f32 `{input}`"))
    }
}

fn parse_f64(input: &str) -> anyhow::Result<f64> {
    if let Some(hex) = hex_literal(input) {
        let bits = parse_digits(hex, 16)
            .and_then(|n| Ok(u64::try_from(n)?))
            .with_context(|| format!("invalid f64 bit pattern `{input}`"))?;
        Ok(f64::from_bits(bits))
    } else {
        input
            .parse()
            .with_context(|| format!("invalid f64 `{input}`"))
    }
}

/// Formats bytes in their memory order, space separated.
fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the raw bits of a host-order value as a hex number.
fn hex_bits<T: DeviceEndian>(value: T) -> String {
    // Big-endian bytes read left to right are the number as written
    let bytes = value.to_order_bytes(ByteOrder::Big);
    let digits: String = bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect();
    format!("0x{digits}")
}

fn conversion_report<T: DeviceEndian>(
    kind: NumericKind,
    input: T,
    order: ByteOrder,
) -> JsonValue {
    let converted = input.to_order(order);
    serde_json::json!({
        "kind": format!("{kind:?}").to_lowercase(),
        "order": order,
        "swapped": order.needs_swap(),
        "input": hex_bits(input),
        "converted": hex_bits(converted),
        "bytes": hex_bytes(input.to_order_bytes(order).as_ref()),
    })
}

fn convert(kind: NumericKind, value: &str, order: ByteOrder) -> anyhow::Result<JsonValue> {
    debug!(?kind, value, %order, "Converting value");
    let report = match kind {
        NumericKind::U16 => conversion_report(kind, parse_int_as::<u16>(value, kind)?, order),
        NumericKind::U32 => conversion_report(kind, parse_int_as::<u32>(value, kind)?, order),
        NumericKind::U64 => conversion_report(kind, parse_int_as::<u64>(value, kind)?, order),
        NumericKind::I16 => conversion_report(kind, parse_int_as::<i16>(value, kind)?, order),
        NumericKind::I32 => conversion_report(kind, parse_int_as::<i32>(value, kind)?, order),
        NumericKind::I64 => conversion_report(kind, parse_int_as::<i64>(value, kind)?, order),
        NumericKind::F32 => conversion_report(kind, parse_f32(value)?, order),
        NumericKind::F64 => conversion_report(kind, parse_f64(value)?, order),
    };
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        // Standard logger, configured via the RUST_LOG env variable
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::from_default_env()))
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Info => order_info(),
        Commands::Convert { kind, value, order } => {
            let order = if let Some(order) = order {
                info!(%order, "Using byte order override");
                order
            } else {
                ByteOrder::DEVICE
            };
            convert(kind, &value, order)?
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer("-0x10").unwrap(), -16);
        assert_eq!(parse_integer("0x0102_0304").unwrap(), 0x0102_0304);
        assert!(parse_integer("0xzz").is_err());
    }

    #[test]
    fn test_parse_integer_rejects_extra_signs() {
        assert!(parse_integer("--5").is_err());
        assert!(parse_integer("-0x-5").is_err());
        assert!(parse_integer("0x+5").is_err());
        assert!(parse_integer("+7").is_err());
        assert!(parse_integer("-").is_err());
        assert!(parse_integer("0x").is_err());
        assert!(parse_int_as::<u16>("--5", NumericKind::U16).is_err());
    }

    #[test]
    fn test_parse_int_range() {
        assert_eq!(parse_int_as::<u16>("65535", NumericKind::U16).unwrap(), u16::MAX);
        assert!(parse_int_as::<u16>("65536", NumericKind::U16).is_err());
        assert!(parse_int_as::<u32>("-1", NumericKind::U32).is_err());
        assert_eq!(parse_int_as::<i64>("-1", NumericKind::I64).unwrap(), -1);
    }

    #[test]
    fn test_parse_float_bit_pattern() {
        assert_eq!(parse_f32("0x7fc00001").unwrap().to_bits(), 0x7fc0_0001);
        assert_eq!(parse_f64("1.5").unwrap().to_bits(), 1.5f64.to_bits());
        assert!(parse_f32("one").is_err());
        assert!(parse_f32("0x-1").is_err());
        assert!(parse_f64("0x+7ff8000000000000").is_err());
        // Too wide for 32 bits
        assert!(parse_f32("0x1_0000_0000").is_err());
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(hex_bytes(&[0, 0x0a, 0xff]), "00 0a ff");
        assert_eq!(hex_bits(0x0102_0304u32), "0x01020304");
        assert_eq!(hex_bits(1.0f32), "0x3f800000");
    }

    #[test]
    fn test_info_report() {
        let info = order_info();
        assert_eq!(info["device"], json!(ByteOrder::DEVICE.to_string()));
        assert_eq!(info["host"], json!(ByteOrder::HOST.to_string()));
        assert_eq!(info["swaps"], json!(ByteOrder::DEVICE != ByteOrder::HOST));
    }

    #[test]
    fn test_convert_to_big_endian() {
        let report = convert(NumericKind::U32, "1", ByteOrder::Big).unwrap();
        assert_eq!(report["bytes"], json!("00 00 00 01"));
        assert_eq!(report["order"], json!("big"));
        assert_eq!(report["input"], json!("0x00000001"));

        let report = convert(NumericKind::U64, "0x0102030405060708", ByteOrder::Little).unwrap();
        assert_eq!(report["bytes"], json!("08 07 06 05 04 03 02 01"));
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_convert_swaps_on_little_endian_host() {
        let report = convert(NumericKind::U32, "0x01020304", ByteOrder::Big).unwrap();
        insta::assert_snapshot!(serde_json::to_string_pretty(&report).unwrap(), @r#"
        {
          "bytes": "01 02 03 04",
          "converted": "0x04030201",
          "input": "0x01020304",
          "kind": "u32",
          "order": "big",
          "swapped": true
        }
        "#);

        let report = convert(NumericKind::I16, "-2", ByteOrder::Big).unwrap();
        insta::assert_snapshot!(serde_json::to_string_pretty(&report).unwrap(), @r#"
        {
          "bytes": "ff fe",
          "converted": "0xfeff",
          "input": "0xfffe",
          "kind": "i16",
          "order": "big",
          "swapped": true
        }
        "#);

        let report = convert(NumericKind::F32, "0x7fc00001", ByteOrder::Little).unwrap();
        assert_eq!(report["swapped"], json!(false));
        assert_eq!(report["converted"], json!("0x7fc00001"));
    }
}
