// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # Affiliate Model Factory
//!
//! Affiliate grid and form, plus the affiliated orders and customers grids
//! hosted on the affiliate form. Affiliates carry no translated fields.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::base_admin::BaseAdminModelFactory;
use crate::application::error::{require, FactoryResult};
use crate::application::paging::{paginate_by_request, set_grid_page_size};
use crate::domain::admin_config::{AdminAreaSettings, SystemSettings};
use crate::domain::affiliate::{
    Address, Affiliate, AffiliateFilter, AffiliatedOrderFilter, OrderStatus, PaymentStatus,
    ShippingStatus,
};
use crate::domain::repository::AffiliateService;
use crate::models::affiliate::{
    AddressModel, AffiliateModel, AffiliateSearchModel, AffiliatedCustomerModel,
    AffiliatedCustomerSearchModel, AffiliatedOrderModel, AffiliatedOrderSearchModel,
};
use crate::models::common::ListModel;

#[async_trait]
pub trait AffiliateModelFactory: Send + Sync {
    async fn prepare_affiliate_search_model(&self, model: AffiliateSearchModel) -> FactoryResult<AffiliateSearchModel>;

    async fn prepare_affiliate_list_model(
        &self,
        search: &AffiliateSearchModel,
    ) -> FactoryResult<ListModel<AffiliateModel>>;

    /// Fields come from the affiliate only when no model is supplied; a
    /// posted model keeps its edited fields and only gains the id, the
    /// tracking URL and the nested search models.
    async fn prepare_affiliate_model(
        &self,
        model: Option<AffiliateModel>,
        affiliate: Option<&Affiliate>,
        exclude_properties: bool,
    ) -> FactoryResult<AffiliateModel>;

    async fn prepare_affiliated_order_search_model(
        &self,
        model: AffiliatedOrderSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<AffiliatedOrderSearchModel>;

    async fn prepare_affiliated_order_list_model(
        &self,
        search: &AffiliatedOrderSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<ListModel<AffiliatedOrderModel>>;

    async fn prepare_affiliated_customer_search_model(
        &self,
        model: AffiliatedCustomerSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<AffiliatedCustomerSearchModel>;

    async fn prepare_affiliated_customer_list_model(
        &self,
        search: &AffiliatedCustomerSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<ListModel<AffiliatedCustomerModel>>;
}

pub struct StandardAffiliateModelFactory {
    affiliates: Arc<dyn AffiliateService>,
    base: BaseAdminModelFactory,
    admin_area: AdminAreaSettings,
    system: SystemSettings,
}

impl StandardAffiliateModelFactory {
    pub fn new(
        affiliates: Arc<dyn AffiliateService>,
        base: BaseAdminModelFactory,
        admin_area: AdminAreaSettings,
        system: SystemSettings,
    ) -> Self {
        Self {
            affiliates,
            base,
            admin_area,
            system,
        }
    }

    fn to_model(&self, affiliate: &Affiliate) -> AffiliateModel {
        AffiliateModel {
            id: affiliate.id,
            url: affiliate.generate_url(&self.system.store_location),
            admin_comment: affiliate.admin_comment.clone(),
            friendly_url_name: affiliate.friendly_url_name.clone(),
            active: affiliate.active,
            address: to_address_model(&affiliate.address),
            ..Default::default()
        }
    }
}

fn to_address_model(address: &Address) -> AddressModel {
    AddressModel {
        id: address.id,
        first_name: address.first_name.clone(),
        last_name: address.last_name.clone(),
        email: address.email.clone(),
        company: address.company.clone(),
        country_id: address.country_id,
        state_province_id: address.state_province_id,
        county: address.county.clone(),
        city: address.city.clone(),
        address1: address.address1.clone(),
        address2: address.address2.clone(),
        zip_postal_code: address.zip_postal_code.clone(),
        phone_number: address.phone_number.clone(),
        fax_number: address.fax_number.clone(),
    }
}

#[async_trait]
impl AffiliateModelFactory for StandardAffiliateModelFactory {
    async fn prepare_affiliate_search_model(
        &self,
        mut model: AffiliateSearchModel,
    ) -> FactoryResult<AffiliateSearchModel> {
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_affiliate_list_model(
        &self,
        search: &AffiliateSearchModel,
    ) -> FactoryResult<ListModel<AffiliateModel>> {
        let filter = AffiliateFilter {
            friendly_url_name: search.search_friendly_url_name.clone(),
            first_name: search.search_first_name.clone(),
            last_name: search.search_last_name.clone(),
            load_only_with_orders: search.load_only_with_orders,
            orders_created_from_utc: search.orders_created_from_utc,
            orders_created_to_utc: search.orders_created_to_utc,
            show_hidden: true,
        };
        let affiliates = self.affiliates.get_all_affiliates(&filter).await?;
        tracing::debug!(count = affiliates.len(), "Preparing affiliate list");

        Ok(paginate_by_request(affiliates, search).into_list_model(|affiliate| self.to_model(&affiliate)))
    }

    async fn prepare_affiliate_model(
        &self,
        model: Option<AffiliateModel>,
        affiliate: Option<&Affiliate>,
        _exclude_properties: bool,
    ) -> FactoryResult<AffiliateModel> {
        let Some(affiliate) = affiliate else {
            return require(model, "model");
        };

        let mut model = model.unwrap_or_else(|| self.to_model(affiliate));
        model.id = affiliate.id;
        model.url = affiliate.generate_url(&self.system.store_location);

        let orders = std::mem::take(&mut model.affiliated_order_search_model);
        model.affiliated_order_search_model = self
            .prepare_affiliated_order_search_model(orders, Some(affiliate))
            .await?;
        let customers = std::mem::take(&mut model.affiliated_customer_search_model);
        model.affiliated_customer_search_model = self
            .prepare_affiliated_customer_search_model(customers, Some(affiliate))
            .await?;

        Ok(model)
    }

    async fn prepare_affiliated_order_search_model(
        &self,
        mut model: AffiliatedOrderSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<AffiliatedOrderSearchModel> {
        let affiliate = require(affiliate, "affiliate")?;
        model.affiliate_id = affiliate.id;

        model.available_order_statuses.clear();
        self.base
            .prepare_enum_items(&mut model.available_order_statuses, &OrderStatus::ALL, |s| *s as i32, true)
            .await?;
        model.available_payment_statuses.clear();
        self.base
            .prepare_enum_items(&mut model.available_payment_statuses, &PaymentStatus::ALL, |s| *s as i32, true)
            .await?;
        model.available_shipping_statuses.clear();
        self.base
            .prepare_enum_items(&mut model.available_shipping_statuses, &ShippingStatus::ALL, |s| *s as i32, true)
            .await?;

        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_affiliated_order_list_model(
        &self,
        search: &AffiliatedOrderSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<ListModel<AffiliatedOrderModel>> {
        let affiliate = require(affiliate, "affiliate")?;

        let filter = AffiliatedOrderFilter {
            created_from_utc: search.start_date,
            created_to_utc: search.end_date,
            order_status: search.order_status,
            payment_status: search.payment_status,
            shipping_status: search.shipping_status,
        };
        let orders = self.affiliates.get_affiliated_orders(affiliate.id, &filter).await?;
        tracing::debug!(affiliate_id = affiliate.id, count = orders.len(), "Preparing affiliated order list");

        let page = paginate_by_request(orders, search);
        let total = page.total_count();
        let localized = self.base.localized();
        let mut data = Vec::with_capacity(page.items().len());
        for order in page.into_items() {
            data.push(AffiliatedOrderModel {
                id: order.id,
                custom_order_number: order.custom_order_number,
                order_status: localized.localized_enum(&order.order_status).await?,
                order_status_id: order.order_status as i32,
                payment_status: localized.localized_enum(&order.payment_status).await?,
                shipping_status: localized.localized_enum(&order.shipping_status).await?,
                order_total: format!("{:.2}", order.order_total),
                created_on: order.created_on_utc,
            });
        }

        Ok(ListModel { data, total })
    }

    async fn prepare_affiliated_customer_search_model(
        &self,
        mut model: AffiliatedCustomerSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<AffiliatedCustomerSearchModel> {
        let affiliate = require(affiliate, "affiliate")?;

        model.affiliate_id = affiliate.id;
        set_grid_page_size(&mut model.paging, &self.admin_area);
        Ok(model)
    }

    async fn prepare_affiliated_customer_list_model(
        &self,
        search: &AffiliatedCustomerSearchModel,
        affiliate: Option<&Affiliate>,
    ) -> FactoryResult<ListModel<AffiliatedCustomerModel>> {
        let affiliate = require(affiliate, "affiliate")?;

        let customers = self.affiliates.get_affiliated_customers(affiliate.id).await?;
        Ok(paginate_by_request(customers, search).into_list_model(|customer| AffiliatedCustomerModel {
            id: customer.id,
            name: customer.full_name(),
            email: customer.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::FactoryError;
    use crate::domain::affiliate::{Customer, Order};
    use crate::infrastructure::memory::{InMemoryCatalog, InMemoryPluginFinder};
    use crate::models::common::PagingParams;
    use chrono::{TimeZone, Utc};

    fn affiliate(id: i32, friendly_url_name: &str, first_name: &str) -> Affiliate {
        Affiliate {
            id,
            address: Address {
                first_name: first_name.to_string(),
                last_name: "Partner".to_string(),
                ..Default::default()
            },
            admin_comment: String::new(),
            friendly_url_name: friendly_url_name.to_string(),
            active: true,
            deleted: false,
        }
    }

    fn order(id: i32, affiliate_id: i32, payment_status: PaymentStatus) -> Order {
        Order {
            id,
            custom_order_number: format!("ORD-{id}"),
            affiliate_id,
            store_id: 1,
            customer_email: format!("buyer{id}@example.com"),
            order_status: OrderStatus::Complete,
            payment_status,
            shipping_status: ShippingStatus::Delivered,
            order_total: 19.5,
            items: Vec::new(),
            created_on_utc: Utc.with_ymd_and_hms(2026, 3, id as u32, 12, 0, 0).unwrap(),
        }
    }

    fn setup() -> (Arc<InMemoryCatalog>, StandardAffiliateModelFactory) {
        let catalog = Arc::new(InMemoryCatalog::with_default_language());
        catalog.add_affiliate(affiliate(1, "summer-deals", "Ann"));
        catalog.add_affiliate(affiliate(2, "", "Bob"));
        catalog.add_order(order(1, 1, PaymentStatus::Paid));
        catalog.add_order(order(2, 1, PaymentStatus::Pending));
        catalog.add_order(order(3, 2, PaymentStatus::Paid));
        catalog.add_customer(Customer {
            id: 10,
            email: "ann@example.com".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            affiliate_id: 1,
            active: true,
            created_on_utc: Utc::now(),
        });

        let base = catalog.base_admin_model_factory(Arc::new(InMemoryPluginFinder::new()));
        let factory = StandardAffiliateModelFactory::new(
            catalog.clone(),
            base,
            AdminAreaSettings::default(),
            SystemSettings {
                current_version: "4.10".to_string(),
                store_location: "https://shop.example/".to_string(),
            },
        );
        (catalog, factory)
    }

    #[tokio::test]
    async fn test_list_rows_carry_tracking_url() {
        let (_, factory) = setup();
        let search = AffiliateSearchModel {
            paging: PagingParams::new(1, 10),
            ..Default::default()
        };

        let list = factory.prepare_affiliate_list_model(&search).await.unwrap();

        assert_eq!(list.total, 2);
        assert_eq!(list.data[0].url, "https://shop.example/?affiliate=summer-deals");
        assert_eq!(list.data[1].url, "https://shop.example/?affiliate=2");
        assert_eq!(list.data[1].address.first_name, "Bob");
    }

    #[tokio::test]
    async fn test_list_filters_by_first_name() {
        let (_, factory) = setup();
        let search = AffiliateSearchModel {
            search_first_name: "bo".to_string(),
            ..Default::default()
        };

        let list = factory.prepare_affiliate_list_model(&search).await.unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.data[0].id, 2);
    }

    #[tokio::test]
    async fn test_order_list_filters_by_payment_status() {
        let (catalog, factory) = setup();
        let ann = catalog.affiliate(1).unwrap();
        let search = AffiliatedOrderSearchModel {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };

        let list = factory.prepare_affiliated_order_list_model(&search, Some(&ann)).await.unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.data[0].custom_order_number, "ORD-1");
        assert_eq!(list.data[0].payment_status, "Paid");
        assert_eq!(list.data[0].order_total, "19.50");
    }

    #[tokio::test]
    async fn test_detail_prepares_nested_search_models() {
        let (catalog, factory) = setup();
        let ann = catalog.affiliate(1).unwrap();

        let model = factory.prepare_affiliate_model(None, Some(&ann), false).await.unwrap();

        assert_eq!(model.affiliated_order_search_model.affiliate_id, 1);
        assert_eq!(model.affiliated_customer_search_model.affiliate_id, 1);
        let statuses = &model.affiliated_order_search_model.available_payment_statuses;
        assert_eq!(statuses.len(), PaymentStatus::ALL.len() + 1);
        assert_eq!(statuses[0].value, "0");
        assert_eq!(statuses[0].text, "Admin.Common.All");

        let customers = factory
            .prepare_affiliated_customer_list_model(&model.affiliated_customer_search_model, Some(&ann))
            .await
            .unwrap();
        assert_eq!(customers.data[0].name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_posted_model_keeps_edited_fields() {
        let (catalog, factory) = setup();
        let ann = catalog.affiliate(1).unwrap();
        let posted = AffiliateModel {
            admin_comment: "edited".to_string(),
            friendly_url_name: "autumn-deals".to_string(),
            active: false,
            ..Default::default()
        };

        for exclude_properties in [false, true] {
            let model = factory
                .prepare_affiliate_model(Some(posted.clone()), Some(&ann), exclude_properties)
                .await
                .unwrap();

            assert_eq!(model.id, 1);
            assert_eq!(model.admin_comment, "edited");
            assert_eq!(model.friendly_url_name, "autumn-deals");
            assert!(!model.active);
            assert_eq!(model.address.first_name, "");
            assert_eq!(model.url, "https://shop.example/?affiliate=summer-deals");
            assert_eq!(model.affiliated_order_search_model.affiliate_id, 1);
        }
    }

    #[tokio::test]
    async fn test_parent_scoped_lists_require_affiliate() {
        let (_, factory) = setup();
        let result = factory
            .prepare_affiliated_customer_list_model(&AffiliatedCustomerSearchModel::default(), None)
            .await;
        assert!(matches!(result, Err(FactoryError::MissingArgument("affiliate"))));
    }
}
