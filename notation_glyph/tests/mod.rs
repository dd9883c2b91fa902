// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod relative;
mod util;
