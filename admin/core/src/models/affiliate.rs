// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! Models of the affiliate screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::affiliate::{OrderStatus, PaymentStatus, ShippingStatus};
use crate::models::common::{impl_search_model, PagingParams, SelectListItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateSearchModel {
    pub search_friendly_url_name: String,
    pub search_first_name: String,
    pub search_last_name: String,
    pub load_only_with_orders: bool,
    pub orders_created_from_utc: Option<DateTime<Utc>>,
    pub orders_created_to_utc: Option<DateTime<Utc>>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressModel {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateModel {
    pub id: i32,
    /// Tracking URL handed to the affiliate
    pub url: String,
    pub admin_comment: String,
    pub friendly_url_name: String,
    pub active: bool,
    pub address: AddressModel,
    pub affiliated_order_search_model: AffiliatedOrderSearchModel,
    pub affiliated_customer_search_model: AffiliatedCustomerSearchModel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliatedOrderSearchModel {
    pub affiliate_id: i32,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub order_status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub shipping_status: Option<ShippingStatus>,
    pub available_order_statuses: Vec<SelectListItem>,
    pub available_payment_statuses: Vec<SelectListItem>,
    pub available_shipping_statuses: Vec<SelectListItem>,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliatedOrderModel {
    pub id: i32,
    pub custom_order_number: String,
    pub order_status: String,
    pub order_status_id: i32,
    pub payment_status: String,
    pub shipping_status: String,
    pub order_total: String,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliatedCustomerSearchModel {
    pub affiliate_id: i32,
    pub paging: PagingParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliatedCustomerModel {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl_search_model!(
    AffiliateSearchModel,
    AffiliatedOrderSearchModel,
    AffiliatedCustomerSearchModel,
);
