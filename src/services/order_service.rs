use crate::dto::order_dto::{NewOrder, OrderPatch};
use crate::error::{Error, Result};
use crate::models::order::Order;
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct OrderService {
    pool: SqlitePool,
}

impl OrderService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, name, description, start_date, end_date, address, price, customer_id, executor_id
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Order> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, name, description, start_date, end_date, address, price, customer_id, executor_id
            FROM orders
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Order {} not found", id)))
    }

    /// `customer_id` and `executor_id` are stored as given, whether or not those users exist.
    pub async fn create(&self, payload: NewOrder) -> Result<Order> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (
                name, description, start_date, end_date, address, price, customer_id, executor_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id, name, description, start_date, end_date, address, price, customer_id, executor_id
            "#,
        )
        .bind(payload.name)
        .bind(payload.description)
        .bind(payload.start_date)
        .bind(payload.end_date)
        .bind(payload.address)
        .bind(payload.price)
        .bind(payload.customer_id)
        .bind(payload.executor_id)
        .fetch_one(&self.pool)
        .await?;

        info!(order_id = order.id, "order created");
        Ok(order)
    }

    pub async fn insert_many(&self, payloads: Vec<NewOrder>) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for payload in payloads {
            inserted += sqlx::query(
                r#"
                INSERT INTO orders (
                    name, description, start_date, end_date, address, price, customer_id, executor_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
            )
            .bind(payload.name)
            .bind(payload.description)
            .bind(payload.start_date)
            .bind(payload.end_date)
            .bind(payload.address)
            .bind(payload.price)
            .bind(payload.customer_id)
            .bind(payload.executor_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        info!(count = inserted, "orders imported");
        Ok(inserted)
    }

    pub async fn update(&self, id: i64, patch: OrderPatch) -> Result<Order> {
        let merged = patch.apply(self.get_by_id(id).await?);

        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET
                name = ?2,
                description = ?3,
                start_date = ?4,
                end_date = ?5,
                address = ?6,
                price = ?7,
                customer_id = ?8,
                executor_id = ?9
            WHERE id = ?1
            RETURNING id, name, description, start_date, end_date, address, price, customer_id, executor_id
            "#,
        )
        .bind(merged.id)
        .bind(merged.name)
        .bind(merged.description)
        .bind(merged.start_date)
        .bind(merged.end_date)
        .bind(merged.address)
        .bind(merged.price)
        .bind(merged.customer_id)
        .bind(merged.executor_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Order {} not found", id)))?;

        info!(order_id = id, "order updated");
        Ok(order)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Order {} not found", id)));
        }

        info!(order_id = id, "order deleted");
        Ok(())
    }
}
