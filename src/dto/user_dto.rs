use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::dto::fields::{into_object, optional, required};
use crate::error::Result;
use crate::models::user::User;

/// Body of `POST /users/`. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "Ann")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
    #[schema(example = 30)]
    pub age: i64,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "customer")]
    pub role: String,
    #[schema(example = "123")]
    pub phone: String,
}

impl NewUser {
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let body = into_object(value)?;
        Ok(Self {
            first_name: required(&body, "first_name")?,
            last_name: required(&body, "last_name")?,
            age: required(&body, "age")?,
            email: required(&body, "email")?,
            role: required(&body, "role")?,
            phone: required(&body, "phone")?,
        })
    }
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let body = into_object(value)?;
        Ok(Self {
            first_name: optional(&body, "first_name")?,
            last_name: optional(&body, "last_name")?,
            age: optional(&body, "age")?,
            email: optional(&body, "email")?,
            role: optional(&body, "role")?,
            phone: optional(&body, "phone")?,
        })
    }

    pub fn apply(self, existing: User) -> User {
        User {
            id: existing.id,
            first_name: self.first_name.unwrap_or(existing.first_name),
            last_name: self.last_name.unwrap_or(existing.last_name),
            age: self.age.unwrap_or(existing.age),
            email: self.email.unwrap_or(existing.email),
            role: self.role.unwrap_or(existing.role),
            phone: self.phone.unwrap_or(existing.phone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            age: value.age,
            email: value.email,
            role: value.role,
            phone: value.phone,
        }
    }
}
