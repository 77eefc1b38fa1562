//! Order records as returned by the REST Admin API `orders.json` endpoint.
//!
//! A [`ShopifyOrder`] holds the JSON object exactly as the server sent it, key order included, and serializes back to
//! the same object. The fields the normalizer needs are read through accessors. A field that is missing, `null` or of
//! an unexpected type reads as absent; it never makes the record itself unreadable.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopifyOrder(Map<String, Value>);

/// Read-only view of an order's `customer` object.
#[derive(Debug, Clone, Copy)]
pub struct Customer<'a>(&'a Map<String, Value>);

/// Read-only view of an order's `shipping_address` or `billing_address` object.
#[derive(Debug, Clone, Copy)]
pub struct Address<'a>(&'a Map<String, Value>);

/// Read-only view of one element of an order's `fulfillments` list.
#[derive(Debug, Clone, Copy)]
pub struct Fulfillment<'a>(&'a Map<String, Value>);

fn text<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn object<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    fields.get(key).and_then(Value::as_object)
}

impl From<Map<String, Value>> for ShopifyOrder {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl ShopifyOrder {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// The store-facing order name, e.g. "#1001"
    pub fn name(&self) -> Option<&str> {
        text(&self.0, "name")
    }

    pub fn email(&self) -> Option<&str> {
        text(&self.0, "email")
    }

    pub fn created_at(&self) -> Option<&str> {
        text(&self.0, "created_at")
    }

    pub fn total_price(&self) -> Option<&str> {
        text(&self.0, "total_price")
    }

    pub fn currency(&self) -> Option<&str> {
        text(&self.0, "currency")
    }

    pub fn financial_status(&self) -> Option<&str> {
        text(&self.0, "financial_status")
    }

    pub fn fulfillment_status(&self) -> Option<&str> {
        text(&self.0, "fulfillment_status")
    }

    /// Comma-separated, exactly as stored by Shopify
    pub fn tag_list(&self) -> Option<&str> {
        text(&self.0, "tags")
    }

    pub fn customer(&self) -> Option<Customer<'_>> {
        object(&self.0, "customer").map(Customer)
    }

    pub fn shipping_address(&self) -> Option<Address<'_>> {
        object(&self.0, "shipping_address").map(Address)
    }

    pub fn billing_address(&self) -> Option<Address<'_>> {
        object(&self.0, "billing_address").map(Address)
    }

    /// Fulfillments in server order. Elements that are not objects are skipped.
    pub fn fulfillments(&self) -> impl Iterator<Item = Fulfillment<'_>> {
        self.0
            .get("fulfillments")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .map(Fulfillment)
    }
}

impl<'a> Customer<'a> {
    /// Numeric in the REST API, but returned untouched.
    pub fn id(&self) -> Option<&'a Value> {
        self.0.get("id").filter(|v| !v.is_null())
    }

    pub fn first_name(&self) -> Option<&'a str> {
        text(self.0, "first_name")
    }

    pub fn last_name(&self) -> Option<&'a str> {
        text(self.0, "last_name")
    }
}

impl<'a> Address<'a> {
    pub fn first_name(&self) -> Option<&'a str> {
        text(self.0, "first_name")
    }

    pub fn last_name(&self) -> Option<&'a str> {
        text(self.0, "last_name")
    }
}

impl<'a> Fulfillment<'a> {
    pub fn shipment_status(&self) -> Option<&'a str> {
        text(self.0, "shipment_status")
    }
}
