use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Offer {
    pub id: i64,
    pub order_id: Option<i64>,
    pub executor_id: Option<i64>,
}
