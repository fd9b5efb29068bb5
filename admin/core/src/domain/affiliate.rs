// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Affiliates
//!
//! An affiliate refers customers to the store through a tracking URL. Orders
//! and customers attributed to the affiliate are read-only summaries here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::localization::LocalizedEnum;

/// Postal address of an affiliate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub country_id: Option<i32>,
    pub state_province_id: Option<i32>,
    pub county: String,
    pub city: String,
    pub address1: String,
    pub address2: String,
    pub zip_postal_code: String,
    pub phone_number: String,
    pub fax_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliate {
    pub id: i32,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub admin_comment: String,
    /// Optional vanity value used in the tracking URL instead of the id
    #[serde(default)]
    pub friendly_url_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub deleted: bool,
}

impl Affiliate {
    /// Tracking URL handed out to the affiliate.
    ///
    /// `store_location` is the store base URL (with trailing slash).
    pub fn generate_url(&self, store_location: &str) -> String {
        let value = if self.friendly_url_name.trim().is_empty() {
            self.id.to_string()
        } else {
            self.friendly_url_name.trim().to_string()
        };
        let separator = if store_location.contains('?') { '&' } else { '?' };
        format!("{}{}affiliate={}", store_location, separator, value)
    }
}

/// Criteria for listing affiliates; empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffiliateFilter {
    pub friendly_url_name: String,
    pub first_name: String,
    pub last_name: String,
    pub load_only_with_orders: bool,
    pub orders_created_from_utc: Option<DateTime<Utc>>,
    pub orders_created_to_utc: Option<DateTime<Utc>>,
    pub show_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending = 10,
    Processing = 20,
    Complete = 30,
    Cancelled = 40,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Complete,
        Self::Cancelled,
    ];
}

impl LocalizedEnum for OrderStatus {
    const TYPE_NAME: &'static str = "OrderStatus";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Complete => "Complete",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending = 10,
    Authorized = 20,
    Paid = 30,
    PartiallyRefunded = 35,
    Refunded = 40,
    Voided = 50,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 6] = [
        Self::Pending,
        Self::Authorized,
        Self::Paid,
        Self::PartiallyRefunded,
        Self::Refunded,
        Self::Voided,
    ];
}

impl LocalizedEnum for PaymentStatus {
    const TYPE_NAME: &'static str = "PaymentStatus";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Authorized => "Authorized",
            Self::Paid => "Paid",
            Self::PartiallyRefunded => "PartiallyRefunded",
            Self::Refunded => "Refunded",
            Self::Voided => "Voided",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingStatus {
    ShippingNotRequired = 10,
    NotYetShipped = 20,
    PartiallyShipped = 25,
    Shipped = 30,
    Delivered = 40,
}

impl ShippingStatus {
    pub const ALL: [ShippingStatus; 5] = [
        Self::ShippingNotRequired,
        Self::NotYetShipped,
        Self::PartiallyShipped,
        Self::Shipped,
        Self::Delivered,
    ];
}

impl LocalizedEnum for ShippingStatus {
    const TYPE_NAME: &'static str = "ShippingStatus";

    fn variant_name(&self) -> &'static str {
        match self {
            Self::ShippingNotRequired => "ShippingNotRequired",
            Self::NotYetShipped => "NotYetShipped",
            Self::PartiallyShipped => "PartiallyShipped",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }
}

/// Placed order; `affiliate_id` is 0 when no affiliate referred the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub custom_order_number: String,
    #[serde(default)]
    pub affiliate_id: i32,
    #[serde(default)]
    pub store_id: i32,
    #[serde(default)]
    pub customer_email: String,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_status: ShippingStatus,
    pub order_total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_on_utc: DateTime<Utc>,
}

impl Order {
    pub fn contains_product(&self, product_id: i32) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Criteria for listing affiliated orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffiliatedOrderFilter {
    pub created_from_utc: Option<DateTime<Utc>>,
    pub created_to_utc: Option<DateTime<Utc>>,
    pub order_status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub shipping_status: Option<ShippingStatus>,
}

impl AffiliatedOrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.created_from_utc.is_none_or(|from| order.created_on_utc >= from)
            && self.created_to_utc.is_none_or(|to| order.created_on_utc <= to)
            && self.order_status.is_none_or(|status| order.order_status == status)
            && self.payment_status.is_none_or(|status| order.payment_status == status)
            && self.shipping_status.is_none_or(|status| order.shipping_status == status)
    }
}

/// Customer referred by an affiliate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub affiliate_id: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_on_utc: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn affiliate(friendly_url_name: &str) -> Affiliate {
        Affiliate {
            id: 7,
            address: Address::default(),
            admin_comment: String::new(),
            friendly_url_name: friendly_url_name.to_string(),
            active: true,
            deleted: false,
        }
    }

    #[test]
    fn test_generate_url_prefers_friendly_name() {
        assert_eq!(
            affiliate("partner").generate_url("https://shop.example/"),
            "https://shop.example/?affiliate=partner"
        );
        assert_eq!(
            affiliate("  ").generate_url("https://shop.example/"),
            "https://shop.example/?affiliate=7"
        );
        assert_eq!(
            affiliate("").generate_url("https://shop.example/?lang=en"),
            "https://shop.example/?lang=en&affiliate=7"
        );
    }

    #[test]
    fn test_order_filter() {
        let order = Order {
            id: 1,
            custom_order_number: "1".to_string(),
            affiliate_id: 7,
            store_id: 1,
            customer_email: String::new(),
            order_status: OrderStatus::Complete,
            payment_status: PaymentStatus::Paid,
            shipping_status: ShippingStatus::Delivered,
            order_total: 10.0,
            items: vec![OrderItem { product_id: 4, quantity: 2 }],
            created_on_utc: Utc::now(),
        };

        assert!(order.contains_product(4));
        assert!(!order.contains_product(5));
        assert!(AffiliatedOrderFilter::default().matches(&order));
        let filter = AffiliatedOrderFilter {
            payment_status: Some(PaymentStatus::Pending),
            ..Default::default()
        };
        assert!(!filter.matches(&order));
    }
}
