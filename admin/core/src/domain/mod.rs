// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Domain Layer
//!
//! Entities owned by the persistence layer (read-only from here), the
//! settings objects the factories consult, and the service ports they are
//! injected with.
//!
//! | Module | Key Types |
//! |--------|-----------|
//! | [`attribute`] | `Attribute<K>`, `AttributeValue<K>`, `AttributeControlType` |
//! | [`affiliate`] | `Affiliate`, `Address`, `Order`, `Customer` |
//! | [`product`] | `Product`, `ProductTag`, `TierPrice`, `ProductAttributeMapping` |
//! | [`measure`] | `MeasureDimension`, `MeasureWeight` |
//! | [`plugin`] | `PluginDescriptor`, `Plugin`, `PluginCapability` |
//! | [`official_feed`] | Remote catalog categories, versions and plugins |
//! | [`localization`] | `Language`, localized entity and enum contracts |
//! | [`admin_config`] | `AdminConfigManifest` and every settings object |
//! | [`repository`] | `ServiceError` and the service ports |

pub mod attribute;
pub mod affiliate;
pub mod product;
pub mod measure;
pub mod plugin;
pub mod official_feed;
pub mod localization;
pub mod store;
pub mod admin_config;
pub mod repository;
