// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Application Layer
//!
//! One `*ModelFactory` trait per screen family, each with a `Standard*`
//! implementation injected with service ports and settings.
//!
//! Every factory follows the same four shapes:
//!
//! - **search preparers** fill paging defaults and select lists,
//! - **list preparers** fetch the full collection, page it in memory and map
//!   each row; `total` is the unpaginated count,
//! - **detail preparers** build a model from its entity (a supplied model
//!   wins) and attach one locale overlay per display language unless
//!   `exclude_properties` is set,
//! - parent-scoped variants require the parent entity and stamp its id.
//!
//! Missing required arguments fail fast with [`error::FactoryError::MissingArgument`].

pub mod error;
pub mod paging;
pub mod localized;
pub mod base_admin;
pub mod attribute;
pub mod affiliate;
pub mod product;
pub mod measure;
pub mod plugin;

pub use error::{FactoryError, FactoryResult};
