// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    strings::DOT,
    structs::{IpValue, Notation},
    OCTET_COUNT,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// `0x` + 8 hex digits
const HEX_LEN: usize = 10;
/// `0b` + 32 binary digits
const BIN_LEN: usize = 34;
const HEX_GROUP: usize = 2;
const BIN_GROUP: usize = 8;
const MAX_DOTS: usize = 3;
/// dotted segments longer than this flip the whole string to base-2
const MAX_DEC_SEGMENT: usize = 3;

lazy_static! {
    /// digit characters of a prefixed-binary or dotted-binary string
    static ref BINARY_DIGITS: Regex = Regex::new(r"^[01]+$").unwrap();
}

/**
Structurally classify an input value into one of the accepted notations.

String detection goes by shape, never by parse attempts or caller flags:
a recognized two-character prefix wins first (`0x` hex, `0b` binary),
then dotted forms are told apart by segment length - any segment longer
than 3 characters makes the whole string dotted-binary.

Returns `None` when the value matches no accepted shape. Classification
says nothing about validity; a tagged value can still fail to parse.
*/
pub fn notation_of(value: &IpValue) -> Option<Notation> {
    match value {
        IpValue::Prefix(_) => Some(Notation::Cidr),
        IpValue::Quad(..) => Some(Notation::Quad),
        IpValue::Text(s) => notation_of_str(s),
    }
}

fn notation_of_str(s: &str) -> Option<Notation> {
    match s.as_bytes().get(1) {
        Some(b'x') => Some(Notation::Hex),
        Some(b'b') => Some(Notation::Binary),
        _ if s.contains(DOT) => {
            if s.split(DOT).any(|seg| seg.len() > MAX_DEC_SEGMENT) {
                Some(Notation::Bits)
            } else {
                Some(Notation::Decimal)
            }
        }
        _ => None,
    }
}

/* -------------------------------------------------------------------------- */

/**
Check that a candidate element sequence is a well-formed set of IPv4
octets: exactly 4 elements, each within `0..=255`.

This is the single gate every conversion and validation path passes
through before a canonical address is built; sequences of any other
length are invalid outright.
*/
pub fn valid_octets(seq: &[u32]) -> bool {
    seq.len() == OCTET_COUNT && seq.iter().all(|&v| v <= u8::MAX as u32)
}

/**
Whether the input is a well-formed IPv4 address in any accepted
notation. Integer (CIDR) inputs are mask-typed, not addresses, and
always return false here.
*/
pub fn valid_address<'a>(value: impl Into<IpValue<'a>>) -> bool {
    canonicalize(&value.into()).is_some()
}

/**
Normalize a non-integer input into canonical network-order octets.

Integer (CIDR) inputs are handled by the mask expansion path instead;
see [super::mask].
*/
pub(crate) fn canonicalize(value: &IpValue) -> Option<[u8; 4]> {
    let vals: Vec<u32> = match value {
        IpValue::Prefix(_) => return None,
        IpValue::Quad(a, b, c, d) => vec![*a, *b, *c, *d],
        IpValue::Text(s) => parse_text(s)?,
    };
    if !valid_octets(&vals) {
        debug!("octet validation failed for '{}'", value);
        return None;
    }
    Some([vals[0] as u8, vals[1] as u8, vals[2] as u8, vals[3] as u8])
}

/* ---------------------------------- */

fn parse_text(s: &str) -> Option<Vec<u32>> {
    match notation_of_str(s)? {
        Notation::Hex => parse_hex(s),
        Notation::Binary => parse_binary(s),
        Notation::Bits => parse_dotted(s, 2),
        Notation::Decimal => parse_dotted(s, 10),
        Notation::Cidr | Notation::Quad => None,
    }
}

fn parse_hex(s: &str) -> Option<Vec<u32>> {
    if s.len() != HEX_LEN {
        debug!("hex notation must be {} chars, got {}: '{}'", HEX_LEN, s.len(), s);
        return None;
    }
    parse_grouped(s.get(2..)?, HEX_GROUP, 16)
}

fn parse_binary(s: &str) -> Option<Vec<u32>> {
    if s.len() != BIN_LEN {
        debug!("binary notation must be {} chars, got {}: '{}'", BIN_LEN, s.len(), s);
        return None;
    }
    let digits: &str = s.get(2..)?;
    if !BINARY_DIGITS.is_match(digits) {
        debug!("non-binary digits in '{}'", s);
        return None;
    }
    parse_grouped(digits, BIN_GROUP, 2)
}

/// Split a digit run into 4 fixed-width groups and parse each one.
fn parse_grouped(digits: &str, group: usize, radix: u32) -> Option<Vec<u32>> {
    let mut vals: Vec<u32> = Vec::with_capacity(OCTET_COUNT);
    for i in 0..OCTET_COUNT {
        let chunk: &str = digits.get(i * group..(i + 1) * group)?;
        vals.push(u32::from_str_radix(chunk, radix).ok()?);
    }
    Some(vals)
}

/// Parse a dotted string with every segment in the given radix. The
/// element count is checked later by [valid_octets], but more than 3
/// dots is rejected up front.
fn parse_dotted(s: &str, radix: u32) -> Option<Vec<u32>> {
    if s.matches(DOT).count() > MAX_DOTS {
        debug!("more than {} dots in '{}'", MAX_DOTS, s);
        return None;
    }
    s.split(DOT)
        .map(|seg| u32::from_str_radix(seg, radix).ok())
        .collect()
}

/* -------------------------------------------------------------------------- */
