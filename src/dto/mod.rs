pub mod fields;
pub mod offer_dto;
pub mod order_dto;
pub mod user_dto;
