// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    notation::canonicalize,
    structs::{IpValue, ReservedBlock},
    NotationError,
};

/**
Classify an address into its reserved block.

The input may be in any accepted address notation; unparseable input is
an address error rather than `public`.
*/
pub fn block<'a>(value: impl Into<IpValue<'a>>) -> Result<ReservedBlock, NotationError> {
    let value: IpValue = value.into();
    let octets: [u8; 4] =
        canonicalize(&value).ok_or_else(|| NotationError::InvalidAddress(value.to_string()))?;
    Ok(classify(octets))
}

/// Whether the address falls in any reserved block (i.e. [block] does
/// not return [ReservedBlock::Public]).
pub fn is_reserved<'a>(value: impl Into<IpValue<'a>>) -> Result<bool, NotationError> {
    Ok(block(value)?.is_reserved())
}

/// Ordered range rules, most specific first. The arm order is load
/// bearing: 192.0.2.0 must hit the documentation arm before any wider
/// 192.x rule, and 255.255.255.255 is excluded from the future-use
/// range by its fourth octet.
pub(crate) fn classify(octets: [u8; 4]) -> ReservedBlock {
    use ReservedBlock::*;

    match octets {
        [0, ..] => ThisNetwork,
        [10, ..] => Rfc1918,
        [100, 64..=127, ..] => Rfc6598,
        [127, ..] => Loopback,
        [169, 254, ..] => LinkLocal,
        [172, 16..=31, ..] => Rfc1918,
        [192, 0, 0, _] => Rfc5736,
        [192, 0, 2, 0] => Rfc5737,
        [192, 88, 99, _] => Rfc3068,
        [192, 168, ..] => Rfc1918,
        [198, 18..=19, ..] => Rfc2544,
        [198, 51, 100, _] => Rfc5737,
        [203, 0, 113, _] => Rfc5737,
        [224..=239, ..] => Multicast,
        [240..=255, _, _, 0..=254] => Future,
        [255, 255, 255, 255] => LimitedBroadcast,
        _ => Public,
    }
}

/* -------------------------------------------------------------------------- */
