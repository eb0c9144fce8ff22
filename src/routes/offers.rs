use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Json},
};
use serde_json::Value as JsonValue;

use crate::{
    dto::offer_dto::{NewOffer, OfferPatch, OfferResponse},
    error::Result,
    AppState,
};

pub const OFFER_CREATED: &str = "Добавлено новое предложение!";
pub const OFFER_UPDATED: &str = "Обновление информации о предложении выполнено!";
pub const OFFER_DELETED: &str = "Удаление предложения выполнено!";

#[utoipa::path(
    get,
    path = "/offers/",
    tag = "offers",
    responses(
        (status = 200, description = "All offers in insertion order", body = [OfferResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_offers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let offers = state.offer_service.list_all().await?;
    let body: Vec<OfferResponse> = offers.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/offers/",
    tag = "offers",
    request_body = NewOffer,
    responses(
        (status = 200, description = "Offer created", body = String),
        (status = 400, description = "Missing field or malformed body")
    )
)]
#[axum::debug_handler]
pub async fn create_offer(
    State(state): State<AppState>,
    payload: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(body) = payload?;
    state.offer_service.create(NewOffer::from_json(body)?).await?;
    Ok(OFFER_CREATED)
}

#[utoipa::path(
    get,
    path = "/offers/{id}",
    tag = "offers",
    params(
        ("id" = i64, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Offer found", body = OfferResponse),
        (status = 404, description = "Offer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_offer(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let offer = state.offer_service.get_by_id(id).await?;
    Ok(Json(OfferResponse::from(offer)))
}

#[utoipa::path(
    put,
    path = "/offers/{id}",
    tag = "offers",
    params(
        ("id" = i64, Path, description = "Offer ID")
    ),
    request_body = OfferPatch,
    responses(
        (status = 200, description = "Offer updated", body = String),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Offer not found")
    )
)]
#[axum::debug_handler]
pub async fn update_offer(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let Json(body) = payload?;
    state
        .offer_service
        .update(id, OfferPatch::from_json(body)?)
        .await?;
    Ok(OFFER_UPDATED)
}

#[utoipa::path(
    delete,
    path = "/offers/{id}",
    tag = "offers",
    params(
        ("id" = i64, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Offer deleted", body = String),
        (status = 404, description = "Offer not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_offer(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    state.offer_service.delete(id).await?;
    Ok(OFFER_DELETED)
}
