// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: points, rectangles and the click session.

pub mod annotation;
pub mod session;
