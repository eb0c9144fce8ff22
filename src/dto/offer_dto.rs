use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::dto::fields::{into_object, optional, optional_nullable};
use crate::error::Result;
use crate::models::offer::Offer;

/// Body of `POST /offers/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewOffer {
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}

impl NewOffer {
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let body = into_object(value)?;
        Ok(Self {
            order_id: optional(&body, "order_id")?,
            executor_id: optional(&body, "executor_id")?,
        })
    }
}

/// Body of `PUT /offers/{id}`. Absent keeps, `null` clears, a value sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct OfferPatch {
    #[schema(value_type = Option<i64>)]
    pub order_id: Option<Option<i64>>,
    #[schema(value_type = Option<i64>)]
    pub executor_id: Option<Option<i64>>,
}

impl OfferPatch {
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let body = into_object(value)?;
        Ok(Self {
            order_id: optional_nullable(&body, "order_id")?,
            executor_id: optional_nullable(&body, "executor_id")?,
        })
    }

    pub fn apply(self, existing: Offer) -> Offer {
        Offer {
            id: existing.id,
            order_id: self.order_id.unwrap_or(existing.order_id),
            executor_id: self.executor_id.unwrap_or(existing.executor_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OfferResponse {
    pub id: i64,
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}

impl From<Offer> for OfferResponse {
    fn from(value: Offer) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            executor_id: value.executor_id,
        }
    }
}
