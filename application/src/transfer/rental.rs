use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{CustomerName, DestructRental, Rental, RentalStatus};

#[derive(Debug, Clone)]
pub struct RentalDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub stock_id: Uuid,
    pub rented_at: OffsetDateTime,
    pub status: RentalStatus,
}

impl From<Rental> for RentalDto {
    fn from(value: Rental) -> Self {
        let DestructRental {
            id,
            customer_id,
            stock_id,
            rented_at,
            status,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            stock_id: stock_id.into(),
            rented_at: rented_at.into(),
            status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RentalHistoryDto {
    pub id: Uuid,
    pub stock_id: Uuid,
    pub rented_at: OffsetDateTime,
    pub returned_at: Option<OffsetDateTime>,
    pub status: RentalStatus,
    pub customer: String,
}

impl RentalHistoryDto {
    pub fn new(rental: Rental, customer: CustomerName) -> Self {
        let DestructRental {
            id,
            stock_id,
            rented_at,
            returned_at,
            status,
            ..
        } = rental.into_destruct();
        Self {
            id: id.into(),
            stock_id: stock_id.into(),
            rented_at: rented_at.into(),
            returned_at: returned_at.map(Into::into),
            status,
            customer: customer.into(),
        }
    }
}

pub struct CreateRentalDto {
    pub customer_id: Uuid,
    pub stock_id: Uuid,
}

pub struct ReturnRentalDto {
    pub rental_id: Uuid,
}

pub struct GetRentalHistoryDto {
    pub movie_id: Uuid,
}
