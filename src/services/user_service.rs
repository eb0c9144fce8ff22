use crate::dto::user_dto::{NewUser, UserPatch};
use crate::error::{Error, Result};
use crate::models::user::User;
use sqlx::SqlitePool;
use tracing::info;

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, age, email, role, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, age, email, role, phone
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("User {} not found", id)))
    }

    pub async fn create(&self, payload: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, age, email, role, phone)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, first_name, last_name, age, email, role, phone
            "#,
        )
        .bind(payload.first_name)
        .bind(payload.last_name)
        .bind(payload.age)
        .bind(payload.email)
        .bind(payload.role)
        .bind(payload.phone)
        .fetch_one(&self.pool)
        .await?;

        info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Inserts the whole batch in one transaction: either every user lands or none does.
    pub async fn insert_many(&self, payloads: Vec<NewUser>) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for payload in payloads {
            inserted += sqlx::query(
                r#"
                INSERT INTO users (first_name, last_name, age, email, role, phone)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(payload.first_name)
            .bind(payload.last_name)
            .bind(payload.age)
            .bind(payload.email)
            .bind(payload.role)
            .bind(payload.phone)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;

        info!(count = inserted, "users imported");
        Ok(inserted)
    }

    pub async fn update(&self, id: i64, patch: UserPatch) -> Result<User> {
        let merged = patch.apply(self.get_by_id(id).await?);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                first_name = ?2,
                last_name = ?3,
                age = ?4,
                email = ?5,
                role = ?6,
                phone = ?7
            WHERE id = ?1
            RETURNING id, first_name, last_name, age, email, role, phone
            "#,
        )
        .bind(merged.id)
        .bind(merged.first_name)
        .bind(merged.last_name)
        .bind(merged.age)
        .bind(merged.email)
        .bind(merged.role)
        .bind(merged.phone)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("User {} not found", id)))?;

        info!(user_id = id, "user updated");
        Ok(user)
    }

    /// Orders and offers pointing at the user are left untouched.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("User {} not found", id)));
        }

        info!(user_id = id, "user deleted");
        Ok(())
    }
}
