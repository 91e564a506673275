use crate::controller::Exhaust;
use application::transfer::RentalDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::RentalStatus;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    id: Uuid,
    customer_id: Uuid,
    stock_id: Uuid,
    rented_at: OffsetDateTime,
    status: RentalStatus,
}

impl From<RentalDto> for RentalResponse {
    fn from(value: RentalDto) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            stock_id: value.stock_id,
            rented_at: value.rented_at,
            status: value.status,
        }
    }
}

impl IntoResponse for RentalResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug)]
pub struct CreatedRentalResponse(RentalResponse);

impl IntoResponse for CreatedRentalResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

pub struct RentPresenter;

impl Exhaust<RentalDto> for RentPresenter {
    type To = CreatedRentalResponse;
    fn emit(&self, input: RentalDto) -> Self::To {
        CreatedRentalResponse(RentalResponse::from(input))
    }
}

pub struct ReturnPresenter;

impl Exhaust<RentalDto> for ReturnPresenter {
    type To = RentalResponse;
    fn emit(&self, input: RentalDto) -> Self::To {
        RentalResponse::from(input)
    }
}
