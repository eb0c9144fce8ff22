pub mod health;
pub mod offers;
pub mod orders;
pub mod users;

use axum::{response::Json, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{openapi::ApiDoc, AppState};

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/orders/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/:id",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route("/offers/", get(offers::list_offers).post(offers::create_offer))
        .route(
            "/offers/:id",
            get(offers::get_offer)
                .put(offers::update_offer)
                .delete(offers::delete_offer),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
