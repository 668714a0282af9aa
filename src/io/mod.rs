// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: background image loading and poster export.

pub mod export;
pub mod media;
