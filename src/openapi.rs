use utoipa::OpenApi;

use crate::dto::{
    offer_dto::{NewOffer, OfferPatch, OfferResponse},
    order_dto::{NewOrder, OrderPatch, OrderResponse},
    user_dto::{NewUser, UserPatch, UserResponse},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::get_user,
        crate::routes::users::update_user,
        crate::routes::users::delete_user,
        crate::routes::orders::list_orders,
        crate::routes::orders::create_order,
        crate::routes::orders::get_order,
        crate::routes::orders::update_order,
        crate::routes::orders::delete_order,
        crate::routes::offers::list_offers,
        crate::routes::offers::create_offer,
        crate::routes::offers::get_offer,
        crate::routes::offers::update_offer,
        crate::routes::offers::delete_offer,
    ),
    components(
        schemas(
            NewUser,
            UserPatch,
            UserResponse,
            NewOrder,
            OrderPatch,
            OrderResponse,
            NewOffer,
            OfferPatch,
            OfferResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "orders"),
        (name = "offers")
    )
)]
pub struct ApiDoc;
