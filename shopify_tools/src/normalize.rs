use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Address, Customer, ShopifyOrder};

/// Display name used when an order carries no name parts and no usable email.
pub const GUEST_CUSTOMER_NAME: &str = "Guest";
/// Delivery status used when no fulfillment reports a shipment status.
pub const NO_DELIVERY_STATUS: &str = "Not Available";

/// A flattened, display-ready view of a [`ShopifyOrder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedOrder {
    pub name: String,
    pub customer_name: String,
    pub customer_id: String,
    pub email: String,
    pub created_at: String,
    pub total_price: String,
    pub currency: String,
    pub financial_status: String,
    pub fulfillment_status: String,
    pub delivery_status: String,
    pub tags: String,
}

impl From<&ShopifyOrder> for NormalizedOrder {
    fn from(order: &ShopifyOrder) -> Self {
        let text = |s: Option<&str>| s.unwrap_or_default().to_string();
        Self {
            name: text(order.name()),
            customer_name: order.customer_name(),
            customer_id: order.customer_id(),
            email: text(order.email()),
            created_at: text(order.created_at()),
            total_price: text(order.total_price()),
            currency: text(order.currency()),
            financial_status: text(order.financial_status()),
            fulfillment_status: text(order.fulfillment_status()),
            delivery_status: order.delivery_status(),
            tags: order.tags(),
        }
    }
}

/// Joins a first and last name if at least one of them is non-empty. Whitespace is only stripped from the ends of the
/// joined result.
fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let first = first.unwrap_or_default();
    let last = last.unwrap_or_default();
    if first.is_empty() && last.is_empty() {
        return None;
    }
    Some(format!("{first} {last}").trim().to_string())
}

impl Customer<'_> {
    pub fn full_name(&self) -> Option<String> {
        full_name(self.first_name(), self.last_name())
    }
}

impl Address<'_> {
    pub fn full_name(&self) -> Option<String> {
        full_name(self.first_name(), self.last_name())
    }
}

impl ShopifyOrder {
    /// The customer name as the Shopify admin shows it. In order of preference:
    /// 1. the registered customer's name,
    /// 2. the shipping address name,
    /// 3. the billing address name,
    /// 4. the local part of the email address,
    /// 5. "Guest".
    pub fn customer_name(&self) -> String {
        self.customer()
            .and_then(|c| c.full_name())
            .or_else(|| self.shipping_address().and_then(|a| a.full_name()))
            .or_else(|| self.billing_address().and_then(|a| a.full_name()))
            .or_else(|| self.email().and_then(|email| email.split_once('@')).map(|(local, _)| local.to_string()))
            .unwrap_or_else(|| GUEST_CUSTOMER_NAME.to_string())
    }

    /// The registered customer's id, or an empty string for guest checkouts.
    pub fn customer_id(&self) -> String {
        match self.customer().and_then(|c| c.id()) {
            None | Some(Value::Null) => String::default(),
            Some(Value::String(id)) => id.clone(),
            Some(id) => id.to_string(),
        }
    }

    /// All non-empty shipment statuses, in fulfillment order, joined with ", ".
    pub fn delivery_status(&self) -> String {
        let statuses = self
            .fulfillments()
            .filter_map(|f| f.shipment_status())
            .filter(|s| !s.is_empty())
            .collect::<Vec<&str>>();
        if statuses.is_empty() {
            NO_DELIVERY_STATUS.to_string()
        } else {
            statuses.join(", ")
        }
    }

    pub fn tags(&self) -> String {
        self.tag_list().unwrap_or_default().to_string()
    }
}
