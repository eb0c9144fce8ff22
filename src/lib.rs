pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    offer_service::OfferService, order_service::OrderService, user_service::UserService,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: UserService,
    pub order_service: OrderService,
    pub offer_service: OfferService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let user_service = UserService::new(pool.clone());
        let order_service = OrderService::new(pool.clone());
        let offer_service = OfferService::new(pool.clone());

        Self {
            pool,
            user_service,
            order_service,
            offer_service,
        }
    }
}
