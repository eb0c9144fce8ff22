use std::path::Path;

use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use tracing::info;

use crate::dto::{offer_dto::NewOffer, order_dto::NewOrder, user_dto::NewUser};
use crate::error::{Error, Result};
use crate::services::{
    offer_service::OfferService, order_service::OrderService, user_service::UserService,
};

pub const USERS_FILE: &str = "user_json.json";
pub const ORDERS_FILE: &str = "order_json.json";
pub const OFFERS_FILE: &str = "offer_json.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub orders: u64,
    pub offers: u64,
}

/// Bulk import of the bundled fixture files. Each entity batch is its own transaction.
#[derive(Clone)]
pub struct SeedService {
    users: UserService,
    orders: OrderService,
    offers: OfferService,
}

impl SeedService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: UserService::new(pool.clone()),
            orders: OrderService::new(pool.clone()),
            offers: OfferService::new(pool),
        }
    }

    /// Every file is read and decoded before anything is written, so a malformed record
    /// aborts the import without touching the database.
    pub async fn load_from_dir(&self, dir: impl AsRef<Path>) -> Result<SeedReport> {
        let dir = dir.as_ref();
        info!("Loading seed data from {}", dir.display());

        let users = decode_all(read_records(&dir.join(USERS_FILE)).await?, NewUser::from_json)?;
        let orders =
            decode_all(read_records(&dir.join(ORDERS_FILE)).await?, NewOrder::from_json)?;
        let offers =
            decode_all(read_records(&dir.join(OFFERS_FILE)).await?, NewOffer::from_json)?;

        let report = SeedReport {
            users: self.users.insert_many(users).await?,
            orders: self.orders.insert_many(orders).await?,
            offers: self.offers.insert_many(offers).await?,
        };

        info!(
            users = report.users,
            orders = report.orders,
            offers = report.offers,
            "Seed data imported"
        );
        Ok(report)
    }
}

async fn read_records(path: &Path) -> Result<Vec<JsonValue>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!("Failed to read seed file {}: {}", path.display(), e);
        Error::Io(e)
    })?;
    match serde_json::from_str::<JsonValue>(&raw)? {
        JsonValue::Array(records) => Ok(records),
        _ => Err(Error::BadRequest(format!(
            "seed file {} must contain a JSON array",
            path.display()
        ))),
    }
}

fn decode_all<T>(records: Vec<JsonValue>, decode: fn(JsonValue) -> Result<T>) -> Result<Vec<T>> {
    records.into_iter().map(decode).collect()
}
