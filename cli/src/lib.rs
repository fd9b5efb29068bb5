// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! bazaar-admin CLI library - exposes testable components
//!
//! # Architecture
//!
//! - **Layer:** Interface / Presentation Layer
//! - **Purpose:** Wires the model factories over a catalog fixture and
//!   renders prepared models as JSON

pub mod commands;
pub mod embedded;
