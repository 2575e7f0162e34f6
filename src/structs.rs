// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::{fmt, net::Ipv4Addr};

/**
Closed set of input shapes accepted by the public operations.

Every entry point takes `impl Into<IpValue>`, so callers can hand in
integers, octet tuples, arrays, [Ipv4Addr] values or strings directly.
Strings are further classified by shape (see [crate::notation_of]).
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IpValue<'a> {
    /// CIDR prefix length - subnet mask form only
    Prefix(u32),
    /// 4-tuple of octet candidates (range checked during canonicalization)
    Quad(u32, u32, u32, u32),
    /// any accepted string notation
    Text(&'a str),
}

impl<'a> From<u32> for IpValue<'a> {
    fn from(v: u32) -> Self {
        IpValue::Prefix(v)
    }
}

impl<'a> From<u8> for IpValue<'a> {
    fn from(v: u8) -> Self {
        IpValue::Prefix(v as u32)
    }
}

impl<'a> From<(u32, u32, u32, u32)> for IpValue<'a> {
    fn from((a, b, c, d): (u32, u32, u32, u32)) -> Self {
        IpValue::Quad(a, b, c, d)
    }
}

impl<'a> From<(u8, u8, u8, u8)> for IpValue<'a> {
    fn from((a, b, c, d): (u8, u8, u8, u8)) -> Self {
        IpValue::Quad(a as u32, b as u32, c as u32, d as u32)
    }
}

impl<'a> From<[u8; 4]> for IpValue<'a> {
    fn from(o: [u8; 4]) -> Self {
        IpValue::Quad(o[0] as u32, o[1] as u32, o[2] as u32, o[3] as u32)
    }
}

impl<'a> From<Ipv4Addr> for IpValue<'a> {
    fn from(addr: Ipv4Addr) -> Self {
        IpValue::from(addr.octets())
    }
}

impl<'a> From<&'a str> for IpValue<'a> {
    fn from(s: &'a str) -> Self {
        IpValue::Text(s)
    }
}

impl<'a> From<&'a String> for IpValue<'a> {
    fn from(s: &'a String) -> Self {
        IpValue::Text(s.as_str())
    }
}

impl fmt::Display for IpValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpValue::Prefix(k) => write!(f, "/{k}"),
            IpValue::Quad(a, b, c, d) => write!(f, "({a}, {b}, {c}, {d})"),
            IpValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/* -------------------------------------------------------------------------- */

/// Structurally detected notation of an input value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// integer prefix length (mask form)
    Cidr,
    /// 4-tuple of octets
    Quad,
    /// `0x` + 8 hex digits
    Hex,
    /// `0b` + 32 binary digits
    Binary,
    /// 4 groups of 8 binary digits separated by `.`
    Bits,
    /// dotted-decimal
    Decimal,
}

/* -------------------------------------------------------------------------- */

/**
Named special-purpose address range an IPv4 address falls into.

`Public` is the catch-all for addresses outside every reserved range.
*/
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservedBlock {
    /// 0.0.0.0/8 "this network"
    ThisNetwork,
    /// private ranges (10/8, 172.16/12, 192.168/16)
    Rfc1918,
    /// shared address space 100.64/10
    Rfc6598,
    /// 127.0.0.0/8
    Loopback,
    /// 169.254.0.0/16
    LinkLocal,
    /// IETF protocol assignments 192.0.0.0/24
    Rfc5736,
    /// documentation ranges
    Rfc5737,
    /// 6to4 relay anycast 192.88.99.0/24
    Rfc3068,
    /// benchmarking 198.18.0.0/15
    Rfc2544,
    /// 224.0.0.0/4
    Multicast,
    /// 240.0.0.0/4 reserved for future use
    Future,
    /// 255.255.255.255
    LimitedBroadcast,
    Public,
}

impl ReservedBlock {
    /// The snake_case tag name of the block.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservedBlock::ThisNetwork => "this_network",
            ReservedBlock::Rfc1918 => "rfc1918",
            ReservedBlock::Rfc6598 => "rfc6598",
            ReservedBlock::Loopback => "loopback",
            ReservedBlock::LinkLocal => "link_local",
            ReservedBlock::Rfc5736 => "rfc5736",
            ReservedBlock::Rfc5737 => "rfc5737",
            ReservedBlock::Rfc3068 => "rfc3068",
            ReservedBlock::Rfc2544 => "rfc2544",
            ReservedBlock::Multicast => "multicast",
            ReservedBlock::Future => "future",
            ReservedBlock::LimitedBroadcast => "limited_broadcast",
            ReservedBlock::Public => "public",
        }
    }

    /// Whether the block is anything other than [ReservedBlock::Public].
    pub fn is_reserved(&self) -> bool {
        !matches!(self, ReservedBlock::Public)
    }
}

impl fmt::Display for ReservedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/* -------------------------------------------------------------------------- */
