// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # `bazaar-admin-core`: Administration Model Factories
//!
//! Translates persisted catalog entities into the view models rendered by the
//! administration area, and back.
//!
//! ## Crate Layout
//!
//! | Module | Layer | Contents |
//! |--------|-------|----------|
//! | [`domain`] | Domain | Entities, settings, service ports, plugin capabilities |
//! | [`models`] | Presentation models | Search, list, detail and locale models |
//! | [`application`] | Application | `*ModelFactory` traits and their standard implementations |
//! | [`infrastructure`] | Infrastructure | In-memory ports, YAML fixtures, official feed HTTP client |
//!
//! ## Key Concepts
//!
//! - **Search model**: filter + paging input of a grid screen.
//! - **List model**: one page of rows plus the unpaginated total.
//! - **Detail model**: editable representation of one entity with one
//!   locale overlay per display language.

pub mod domain;
pub mod models;
pub mod application;
pub mod infrastructure;

pub use domain::*;
