// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{notation::canonicalize, structs::IpValue, NotationError, IPV4_BITS, OCTET_COUNT};
use ipnet::ipv4_mask_to_prefix;
use std::net::Ipv4Addr;
use tracing::debug;

pub(crate) const MIN_PREFIX: u32 = 1;

/// Partial-octet mask values for the 0..=7 leftover prefix bits.
const PARTIAL_OCTET: [u8; 8] = [0, 128, 192, 224, 240, 248, 252, 254];

/**
Whether the input is a valid subnet mask.

Accepts a CIDR prefix length in `1..=32`, or any address notation whose
32-bit pattern is a contiguous run of ones followed by zeroes. The
all-zero mask is invalid; the all-ones mask is valid.
*/
pub fn valid_mask<'a>(value: impl Into<IpValue<'a>>) -> bool {
    match value.into() {
        IpValue::Prefix(k) => (MIN_PREFIX..=IPV4_BITS as u32).contains(&k),
        other => canonicalize(&other).and_then(mask_prefix).is_some(),
    }
}

/**
Expand a CIDR prefix length into mask octets: whole `255` octets for
each complete group of 8 bits, one partial octet for the leftover bits,
zero padding for the rest.
*/
pub(crate) fn expand_prefix(k: u32) -> Result<[u8; 4], NotationError> {
    if !(MIN_PREFIX..=IPV4_BITS as u32).contains(&k) {
        debug!("prefix length {} outside 1..=32", k);
        return Err(NotationError::InvalidSubnetMask(IpValue::Prefix(k).to_string()));
    }

    let mut octets: [u8; 4] = [0; OCTET_COUNT];
    let full: usize = (k / 8) as usize;
    for o in octets.iter_mut().take(full) {
        *o = u8::MAX;
    }
    if full < OCTET_COUNT {
        octets[full] = PARTIAL_OCTET[(k % 8) as usize];
    }
    Ok(octets)
}

/**
Prefix length of a contiguous mask in `1..=32`.

Returns `None` for a non-contiguous bit pattern (a `1` after a `0`) and
for the all-zero mask.
*/
pub(crate) fn mask_prefix(octets: [u8; 4]) -> Option<u8> {
    let prefix: u8 = match ipv4_mask_to_prefix(Ipv4Addr::from(octets)) {
        Ok(p) => p,
        Err(_) => {
            debug!("non-contiguous mask bits in {:?}", octets);
            return None;
        }
    };
    if prefix == 0 {
        debug!("all-zero mask rejected");
        return None;
    }
    Some(prefix)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const CONTIG: &str = "11111111.11111111.11111111.00000000";
    const NON_CONTIG: &str = "10101000.10101000.10101000.10101000";
    const ZERO_MASK: &str = "0.0.0.0";
    const ONES_MASK: &str = "255.255.255.255";
    const DEC_MASK: &str = "255.255.0.0";
    const HEX_MASK: &str = "0xFFFFFF00";

    #[test]
    fn test_cidr_bounds() {
        assert!(!valid_mask(0u32));
        assert!(valid_mask(1u32));
        assert!(valid_mask(32u32));
        assert!(!valid_mask(33u32));
    }

    #[test]
    fn test_contiguous_rule() {
        assert!(valid_mask(CONTIG));
        assert!(!valid_mask(NON_CONTIG));
        assert!(!valid_mask(ZERO_MASK));
        assert!(valid_mask(ONES_MASK));
        assert!(valid_mask(DEC_MASK));
        assert!(valid_mask(HEX_MASK));
        assert!(valid_mask((255u8, 255u8, 224u8, 0u8)));
        assert!(!valid_mask((255u8, 0u8, 255u8, 0u8)));
    }

    #[test]
    fn test_garbage_is_not_a_mask() {
        assert!(!valid_mask("not-a-mask"));
        assert!(!valid_mask("255.255.256.0"));
    }

    #[test]
    fn test_expand_prefix() {
        assert_eq!(expand_prefix(1).unwrap(), [128, 0, 0, 0]);
        assert_eq!(expand_prefix(8).unwrap(), [255, 0, 0, 0]);
        assert_eq!(expand_prefix(19).unwrap(), [255, 255, 224, 0]);
        assert_eq!(expand_prefix(24).unwrap(), [255, 255, 255, 0]);
        assert_eq!(expand_prefix(32).unwrap(), [255, 255, 255, 255]);
        assert!(expand_prefix(0).is_err());
        assert!(expand_prefix(33).is_err());
    }

    #[test]
    fn test_mask_prefix() {
        assert_eq!(mask_prefix([255, 255, 255, 0]), Some(24));
        assert_eq!(mask_prefix([255, 255, 224, 0]), Some(19));
        assert_eq!(mask_prefix([128, 0, 0, 0]), Some(1));
        assert_eq!(mask_prefix([255, 255, 255, 255]), Some(32));
        assert_eq!(mask_prefix([0, 0, 0, 0]), None);
        assert_eq!(mask_prefix([255, 0, 255, 0]), None);
    }

    #[test]
    fn test_expansion_and_extraction_agree() {
        for k in 1..=32u32 {
            let octets: [u8; 4] = expand_prefix(k).unwrap();
            assert_eq!(mask_prefix(octets), Some(k as u8), "prefix {k}");
        }
    }
}
