// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

//! # Infrastructure Layer
//!
//! Concrete adapters behind the service ports of [`crate::domain::repository`].
//!
//! | Module | Provides |
//! |--------|----------|
//! | [`memory`] | `InMemoryCatalog`, `InMemoryPluginFinder`, `StaticPlugin` |
//! | [`fixture`] | `CatalogFixture` YAML loader seeding the in-memory ports |
//! | [`official_feed_client`] | `HttpOfficialFeedClient` for the remote plugin catalog |

pub mod memory;
pub mod fixture;
pub mod official_feed_client;
