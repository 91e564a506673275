use crate::controller::Exhaust;
use application::transfer::RentalHistoryDto;
use kernel::prelude::entity::RentalStatus;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RentalHistoryResponse {
    id: Uuid,
    stock_id: Uuid,
    rented_at: OffsetDateTime,
    returned_at: Option<OffsetDateTime>,
    status: RentalStatus,
    customer: String,
}

impl From<RentalHistoryDto> for RentalHistoryResponse {
    fn from(value: RentalHistoryDto) -> Self {
        Self {
            id: value.id,
            stock_id: value.stock_id,
            rented_at: value.rented_at,
            returned_at: value.returned_at,
            status: value.status,
            customer: value.customer,
        }
    }
}

pub struct HistoryPresenter;

impl Exhaust<Vec<RentalHistoryDto>> for HistoryPresenter {
    type To = axum::Json<Vec<RentalHistoryResponse>>;
    fn emit(&self, input: Vec<RentalHistoryDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(RentalHistoryResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}
