// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # View Models
//!
//! Request-scoped models rendered by the administration area. Every model is
//! built fresh per call and serialises in camelCase for the grid widgets.
//!
//! | Module | Screens |
//! |--------|---------|
//! | [`common`] | Paging, list wrapper, select lists, locale contract |
//! | [`attribute`] | Customer and vendor attributes and their values |
//! | [`affiliate`] | Affiliates, affiliated orders and customers |
//! | [`product`] | Products and the product page sub-grids |
//! | [`measure`] | Dimensions and weights |
//! | [`plugin`] | Local plugins and the official feed browser |

pub mod common;
pub mod attribute;
pub mod affiliate;
pub mod product;
pub mod measure;
pub mod plugin;

pub use common::*;
