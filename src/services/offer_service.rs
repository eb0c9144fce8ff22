use crate::dto::offer_dto::{NewOffer, OfferPatch};
use crate::error::{Error, Result};
use crate::models::offer::Offer;
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct OfferService {
    pool: SqlitePool,
}

impl OfferService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Offer>> {
        let offers = sqlx::query_as::<_, Offer>(
            "SELECT id, order_id, executor_id FROM offers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(offers)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Offer> {
        sqlx::query_as::<_, Offer>("SELECT id, order_id, executor_id FROM offers WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Offer {} not found", id)))
    }

    /// Duplicate offers for the same order and executor are allowed.
    pub async fn create(&self, payload: NewOffer) -> Result<Offer> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (order_id, executor_id)
            VALUES (?1, ?2)
            RETURNING id, order_id, executor_id
            "#,
        )
        .bind(payload.order_id)
        .bind(payload.executor_id)
        .fetch_one(&self.pool)
        .await?;

        info!(offer_id = offer.id, "offer created");
        Ok(offer)
    }

    pub async fn insert_many(&self, payloads: Vec<NewOffer>) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for payload in payloads {
            inserted += sqlx::query("INSERT INTO offers (order_id, executor_id) VALUES (?1, ?2)")
                .bind(payload.order_id)
                .bind(payload.executor_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;

        info!(count = inserted, "offers imported");
        Ok(inserted)
    }

    pub async fn update(&self, id: i64, patch: OfferPatch) -> Result<Offer> {
        let merged = patch.apply(self.get_by_id(id).await?);

        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET order_id = ?2, executor_id = ?3
            WHERE id = ?1
            RETURNING id, order_id, executor_id
            "#,
        )
        .bind(merged.id)
        .bind(merged.order_id)
        .bind(merged.executor_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Offer {} not found", id)))?;

        info!(offer_id = id, "offer updated");
        Ok(offer)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM offers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Offer {} not found", id)));
        }

        info!(offer_id = id, "offer deleted");
        Ok(())
    }
}
