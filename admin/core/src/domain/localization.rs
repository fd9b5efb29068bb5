// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Display languages and the contracts entities implement to have their
//! fields translated.

use serde::{Deserialize, Serialize};

/// A display language configured for the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: i32,
    pub name: String,
    /// Culture code, e.g. `en-US`
    pub language_culture: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// An entity whose fields may carry per-language translations.
///
/// Translations are addressed by `(key_group, entity_id, key, language_id)`,
/// where `key_group` names the entity type and `key` the field.
pub trait LocalizedEntity {
    /// Key group under which translations of this entity type are stored
    fn key_group(&self) -> &'static str;

    /// Identifier of the entity instance
    fn entity_id(&self) -> i32;
}

/// An enum whose variants have translatable display labels.
///
/// Labels are looked up under the resource `Enums.<TYPE_NAME>.<variant>`.
pub trait LocalizedEnum {
    /// Type segment of the resource name
    const TYPE_NAME: &'static str;

    /// Variant segment of the resource name, also the fallback label
    fn variant_name(&self) -> &'static str;

    /// Full resource name of this variant's label
    fn resource_name(&self) -> String {
        format!("Enums.{}.{}", Self::TYPE_NAME, self.variant_name())
    }
}

/// Splits a `PascalCase` variant name into words for a fallback label
/// (`MultilineTextbox` → `Multiline Textbox`).
pub fn humanize_variant(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if index > 0 && ch.is_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_variant() {
        assert_eq!(humanize_variant("DropdownList"), "Dropdown List");
        assert_eq!(humanize_variant("TextBox"), "Text Box");
        assert_eq!(humanize_variant("Pending"), "Pending");
    }
}
