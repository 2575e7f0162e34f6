// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static DOT: &str = ".";
pub(crate) static HEX_PREFIX: &str = "0x";
pub(crate) static BIN_PREFIX: &str = "0b";

// lib.rs
pub(crate) static ERR_INVALID_ADDR: &str = "not a valid IPv4 address";
pub(crate) static ERR_INVALID_MASK: &str = "not a valid IPv4 subnet mask";
