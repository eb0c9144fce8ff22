use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::dto::fields::{into_object, optional, optional_date, optional_nullable, required_date};
use crate::error::Result;
use crate::models::order::Order;
use crate::utils::date::wire_date;

/// Body of `POST /orders/`. Only the two dates are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewOrder {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = String, example = "03/01/2024")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, example = "03/10/2024")]
    pub end_date: NaiveDate,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub customer_id: Option<i64>,
    pub executor_id: Option<i64>,
}

impl NewOrder {
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let body = into_object(value)?;
        Ok(Self {
            name: optional(&body, "name")?,
            description: optional(&body, "description")?,
            start_date: required_date(&body, "start_date")?,
            end_date: required_date(&body, "end_date")?,
            address: optional(&body, "address")?,
            price: optional(&body, "price")?,
            customer_id: optional(&body, "customer_id")?,
            executor_id: optional(&body, "executor_id")?,
        })
    }
}

/// Body of `PUT /orders/{id}`.
///
/// Dates are parsed when the body supplies them; an absent or `null` date keeps the stored
/// value as is. Every other field is nullable: absent keeps, `null` clears, a value sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct OrderPatch {
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[schema(value_type = Option<String>, example = "03/01/2024")]
    pub start_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "03/10/2024")]
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[schema(value_type = Option<i64>)]
    pub price: Option<Option<i64>>,
    #[schema(value_type = Option<i64>)]
    pub customer_id: Option<Option<i64>>,
    #[schema(value_type = Option<i64>)]
    pub executor_id: Option<Option<i64>>,
}

impl OrderPatch {
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let body = into_object(value)?;
        Ok(Self {
            name: optional_nullable(&body, "name")?,
            description: optional_nullable(&body, "description")?,
            start_date: optional_date(&body, "start_date")?,
            end_date: optional_date(&body, "end_date")?,
            address: optional_nullable(&body, "address")?,
            price: optional_nullable(&body, "price")?,
            customer_id: optional_nullable(&body, "customer_id")?,
            executor_id: optional_nullable(&body, "executor_id")?,
        })
    }

    pub fn apply(self, existing: Order) -> Order {
        Order {
            id: existing.id,
            name: self.name.unwrap_or(existing.name),
            description: self.description.unwrap_or(existing.description),
            start_date: self.start_date.unwrap_or(existing.start_date),
            end_date: self.end_date.unwrap_or(existing.end_date),
            address: self.address.unwrap_or(existing.address),
            price: self.price.unwrap_or(existing.price),
            customer_id: self.customer_id.unwrap_or(existing.customer_id),
            executor_id: self.executor_id.unwrap_or(existing.executor_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(with = "wire_date")]
    #[schema(value_type = String, example = "03/01/2024")]
    pub start_date: NaiveDate,
    #[serde(with = "wire_date")]
    #[schema(value_type = String, example = "03/10/2024")]
    pub end_date: NaiveDate,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub customer_id: Option<i64>,
    pub executor_id: Option<i64>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            address: value.address,
            price: value.price,
            customer_id: value.customer_id,
            executor_id: value.executor_id,
        }
    }
}
