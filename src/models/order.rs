use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `customer_id` and `executor_id` point at `users.id` but are never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: Option<String>,
    pub price: Option<i64>,
    pub customer_id: Option<i64>,
    pub executor_id: Option<i64>,
}
