// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    mask::{expand_prefix, mask_prefix},
    notation::canonicalize,
    strings::{BIN_PREFIX, HEX_PREFIX},
    structs::IpValue,
    NotationError,
};
use std::net::Ipv4Addr;

/**
Resolve any input into canonical octets.

`Prefix` inputs are mask-typed and expand through the CIDR path (their
failures are mask errors); everything else goes through the notation
parser and fails as an address error.
*/
fn resolve(value: &IpValue) -> Result<[u8; 4], NotationError> {
    match value {
        IpValue::Prefix(k) => expand_prefix(*k),
        other => {
            canonicalize(other).ok_or_else(|| NotationError::InvalidAddress(other.to_string()))
        }
    }
}

/// Render as dotted-decimal, e.g. `192.168.0.1`.
pub fn to_dotted_dec<'a>(value: impl Into<IpValue<'a>>) -> Result<String, NotationError> {
    let o: [u8; 4] = resolve(&value.into())?;
    Ok(format!("{}.{}.{}.{}", o[0], o[1], o[2], o[3]))
}

/// Render as prefixed binary: `0b` + 32 digits, every octet left-padded
/// to 8 digits. Without the padding, leading zero bits would be dropped
/// by the numeric conversion and the groups would shift.
pub fn to_binary<'a>(value: impl Into<IpValue<'a>>) -> Result<String, NotationError> {
    let o: [u8; 4] = resolve(&value.into())?;
    Ok(format!("{BIN_PREFIX}{:08b}{:08b}{:08b}{:08b}", o[0], o[1], o[2], o[3]))
}

/// Render as dotted-binary: 4 groups of 8 digits joined with `.`, no prefix.
pub fn to_bits<'a>(value: impl Into<IpValue<'a>>) -> Result<String, NotationError> {
    let o: [u8; 4] = resolve(&value.into())?;
    Ok(format!("{:08b}.{:08b}.{:08b}.{:08b}", o[0], o[1], o[2], o[3]))
}

/// Render as prefixed hexadecimal: `0x` + 8 uppercase digits, every
/// octet left-padded to 2 digits.
pub fn to_hex<'a>(value: impl Into<IpValue<'a>>) -> Result<String, NotationError> {
    let o: [u8; 4] = resolve(&value.into())?;
    Ok(format!("{HEX_PREFIX}{:02X}{:02X}{:02X}{:02X}", o[0], o[1], o[2], o[3]))
}

/// The 4 octets as an ordered tuple.
pub fn to_octets<'a>(value: impl Into<IpValue<'a>>) -> Result<(u8, u8, u8, u8), NotationError> {
    let o: [u8; 4] = resolve(&value.into())?;
    Ok((o[0], o[1], o[2], o[3]))
}

/// The canonical octets as a [std::net::Ipv4Addr].
pub fn to_ipv4<'a>(value: impl Into<IpValue<'a>>) -> Result<Ipv4Addr, NotationError> {
    Ok(Ipv4Addr::from(resolve(&value.into())?))
}

/**
Prefix length of a mask input, in `1..=32`.

The input must be a valid contiguous mask in any accepted notation.
This operation is mask-typed throughout: parse failures are reported as
mask errors, not address errors.
*/
pub fn to_cidr<'a>(value: impl Into<IpValue<'a>>) -> Result<u8, NotationError> {
    let value: IpValue = value.into();
    let octets: [u8; 4] = match value {
        IpValue::Prefix(k) => expand_prefix(k)?,
        ref other => canonicalize(other)
            .ok_or_else(|| NotationError::InvalidSubnetMask(other.to_string()))?,
    };
    mask_prefix(octets).ok_or_else(|| NotationError::InvalidSubnetMask(value.to_string()))
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const DEC_1: &str = "192.168.0.1";
    const BIN_1: &str = "0b11000000101010000000000000000001";
    const HEX_1: &str = "0xC0A80001";
    const BITS_1: &str = "11000000.10101000.00000000.00000001";
    const OCTETS_1: (u8, u8, u8, u8) = (192, 168, 0, 1);

    const NON_CONTIG: &str = "10101000.10101000.10101000.10101000";
    const OUT_OF_RANGE: &str = "192.168.256.256";

    #[test]
    fn test_renderings() {
        assert_eq!(to_binary(DEC_1).unwrap(), BIN_1);
        assert_eq!(to_hex(OCTETS_1).unwrap(), HEX_1);
        assert_eq!(to_bits(HEX_1).unwrap(), BITS_1);
        assert_eq!(to_dotted_dec(BIN_1).unwrap(), DEC_1);
        assert_eq!(to_octets(BITS_1).unwrap(), OCTETS_1);
        assert_eq!(to_ipv4(DEC_1).unwrap(), Ipv4Addr::new(192, 168, 0, 1));
    }

    #[test]
    fn test_padding_is_fixed_width() {
        assert_eq!(to_hex("0.0.0.1").unwrap(), "0x00000001");
        assert_eq!(to_binary("1.2.3.4").unwrap(), "0b00000001000000100000001100000100");
        assert_eq!(to_bits("10.0.0.1").unwrap(), "00001010.00000000.00000000.00000001");
    }

    #[test]
    fn test_round_trip_identity() {
        let dec: String = to_dotted_dec(OCTETS_1).unwrap();
        assert_eq!(to_octets(&dec).unwrap(), OCTETS_1);

        let bin: String = to_binary(OCTETS_1).unwrap();
        assert_eq!(to_octets(&bin).unwrap(), OCTETS_1);

        let bits: String = to_bits(OCTETS_1).unwrap();
        assert_eq!(to_octets(&bits).unwrap(), OCTETS_1);

        let hex: String = to_hex(OCTETS_1).unwrap();
        assert_eq!(to_octets(&hex).unwrap(), OCTETS_1);
    }

    #[test]
    fn test_prefix_inputs_expand_as_masks() {
        assert_eq!(to_dotted_dec(24u32).unwrap(), "255.255.255.0");
        assert_eq!(to_hex(16u32).unwrap(), "0xFFFF0000");
        assert_eq!(to_binary(1u32).unwrap(), "0b10000000000000000000000000000000");
        assert_eq!(to_bits(9u32).unwrap(), "11111111.10000000.00000000.00000000");
        assert_eq!(to_octets(19u32).unwrap(), (255, 255, 224, 0));
    }

    #[test]
    fn test_cidr_round_trip() {
        for k in 1..=32u32 {
            let dec: String = to_dotted_dec(k).unwrap();
            assert_eq!(to_cidr(&dec).unwrap() as u32, k, "{dec}");
        }
    }

    #[test]
    fn test_to_cidr() {
        assert_eq!(to_cidr("255.255.255.0").unwrap(), 24);
        assert_eq!(to_cidr("255.255.255.255").unwrap(), 32);
        assert_eq!(to_cidr("0xFFFFFF00").unwrap(), 24);
        assert_eq!(to_cidr(32u32).unwrap(), 32);
        assert!(matches!(
            to_cidr(NON_CONTIG),
            Err(NotationError::InvalidSubnetMask(_))
        ));
        assert!(matches!(
            to_cidr("0.0.0.0"),
            Err(NotationError::InvalidSubnetMask(_))
        ));
        // mask-typed throughout: even a parse failure is a mask error
        assert!(matches!(
            to_cidr("garbage"),
            Err(NotationError::InvalidSubnetMask(_))
        ));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            to_dotted_dec(33u32),
            Err(NotationError::InvalidSubnetMask("/33".to_string()))
        );
        assert_eq!(
            to_binary(OUT_OF_RANGE),
            Err(NotationError::InvalidAddress(OUT_OF_RANGE.to_string()))
        );
        assert!(matches!(
            to_hex("192.168.0"),
            Err(NotationError::InvalidAddress(_))
        ));
        assert!(matches!(
            to_octets("192.168.0.1.1"),
            Err(NotationError::InvalidAddress(_))
        ));
    }
}
