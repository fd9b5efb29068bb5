// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Custom Attributes
//!
//! Customer and vendor attributes are structurally identical: a named input
//! with a control type, owning zero or more predefined values. They differ
//! only in the entity type their translations are filed under, so one
//! generic [`Attribute`] / [`AttributeValue`] pair is parameterised by an
//! [`AttributeKind`] marker.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::domain::localization::{LocalizedEntity, LocalizedEnum};

/// Marker describing one family of custom attributes.
pub trait AttributeKind: Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Translation key group of the attribute entity
    const ATTRIBUTE_KEY_GROUP: &'static str;
    /// Translation key group of the attribute value entity
    const VALUE_KEY_GROUP: &'static str;
}

/// Attributes collected at customer registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerAttributes;

impl AttributeKind for CustomerAttributes {
    const ATTRIBUTE_KEY_GROUP: &'static str = "CustomerAttribute";
    const VALUE_KEY_GROUP: &'static str = "CustomerAttributeValue";
}

/// Attributes collected on vendor profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VendorAttributes;

impl AttributeKind for VendorAttributes {
    const ATTRIBUTE_KEY_GROUP: &'static str = "VendorAttribute";
    const VALUE_KEY_GROUP: &'static str = "VendorAttributeValue";
}

/// Input control used to render an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeControlType {
    DropdownList = 1,
    RadioList = 2,
    Checkboxes = 3,
    TextBox = 4,
    MultilineTextbox = 10,
    Datepicker = 20,
    FileUpload = 30,
    ColorSquares = 40,
    ImageSquares = 45,
    ReadonlyCheckboxes = 50,
}

impl AttributeControlType {
    /// Whether the control picks from predefined values
    pub fn should_have_values(&self) -> bool {
        !matches!(
            self,
            Self::TextBox | Self::MultilineTextbox | Self::Datepicker | Self::FileUpload
        )
    }
}

impl LocalizedEnum for AttributeControlType {
    const TYPE_NAME: &'static str = "AttributeControlType";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::DropdownList => "DropdownList",
            Self::RadioList => "RadioList",
            Self::Checkboxes => "Checkboxes",
            Self::TextBox => "TextBox",
            Self::MultilineTextbox => "MultilineTextbox",
            Self::Datepicker => "Datepicker",
            Self::FileUpload => "FileUpload",
            Self::ColorSquares => "ColorSquares",
            Self::ImageSquares => "ImageSquares",
            Self::ReadonlyCheckboxes => "ReadonlyCheckboxes",
        }
    }
}

/// A custom attribute definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute<K: AttributeKind> {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub is_required: bool,
    pub attribute_control_type: AttributeControlType,
    #[serde(default)]
    pub display_order: i32,
    #[serde(skip)]
    pub kind: PhantomData<K>,
}

impl<K: AttributeKind> Attribute<K> {
    pub fn new(id: i32, name: impl Into<String>, control_type: AttributeControlType) -> Self {
        Self {
            id,
            name: name.into(),
            is_required: false,
            attribute_control_type: control_type,
            display_order: 0,
            kind: PhantomData,
        }
    }
}

impl<K: AttributeKind> LocalizedEntity for Attribute<K> {
    fn key_group(&self) -> &'static str {
        K::ATTRIBUTE_KEY_GROUP
    }

    fn entity_id(&self) -> i32 {
        self.id
    }
}

/// A predefined value of a custom attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue<K: AttributeKind> {
    pub id: i32,
    /// Owning attribute
    pub attribute_id: i32,
    pub name: String,
    #[serde(default)]
    pub is_pre_selected: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(skip)]
    pub kind: PhantomData<K>,
}

impl<K: AttributeKind> AttributeValue<K> {
    pub fn new(id: i32, attribute_id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            attribute_id,
            name: name.into(),
            is_pre_selected: false,
            display_order: 0,
            kind: PhantomData,
        }
    }
}

impl<K: AttributeKind> LocalizedEntity for AttributeValue<K> {
    fn key_group(&self) -> &'static str {
        K::VALUE_KEY_GROUP
    }

    fn entity_id(&self) -> i32 {
        self.id
    }
}

pub type CustomerAttribute = Attribute<CustomerAttributes>;
pub type CustomerAttributeValue = AttributeValue<CustomerAttributes>;
pub type VendorAttribute = Attribute<VendorAttributes>;
pub type VendorAttributeValue = AttributeValue<VendorAttributes>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_groups_follow_kind() {
        let customer = CustomerAttribute::new(1, "Gender", AttributeControlType::RadioList);
        let vendor = VendorAttributeValue::new(2, 1, "Wholesale");

        assert_eq!(customer.key_group(), "CustomerAttribute");
        assert_eq!(vendor.key_group(), "VendorAttributeValue");
        assert_eq!(vendor.entity_id(), 2);
    }

    #[test]
    fn test_control_type_resource_name() {
        assert_eq!(
            AttributeControlType::DropdownList.resource_name(),
            "Enums.AttributeControlType.DropdownList"
        );
        assert!(AttributeControlType::Checkboxes.should_have_values());
        assert!(!AttributeControlType::Datepicker.should_have_values());
    }
}
