use crate::controller::Intake;
use application::transfer::{CreateRentalDto, ReturnRentalDto};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RentRequest {
    customer_id: Uuid,
    stock_id: Uuid,
}

#[derive(Debug)]
pub struct ReturnRequest {
    rental_id: Uuid,
}

impl ReturnRequest {
    pub fn new(rental_id: Uuid) -> Self {
        Self { rental_id }
    }
}

pub struct Transformer;

impl Intake<RentRequest> for Transformer {
    type To = CreateRentalDto;
    fn emit(
        &self,
        RentRequest {
            customer_id,
            stock_id,
        }: RentRequest,
    ) -> Self::To {
        CreateRentalDto {
            customer_id,
            stock_id,
        }
    }
}

impl Intake<ReturnRequest> for Transformer {
    type To = ReturnRentalDto;
    fn emit(&self, input: ReturnRequest) -> Self::To {
        ReturnRentalDto {
            rental_id: input.rental_id,
        }
    }
}
