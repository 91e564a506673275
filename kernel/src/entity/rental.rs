mod id;
mod rented_at;
mod returned_at;
mod status;

pub use self::{id::*, rented_at::*, returned_at::*, status::*};
use crate::entity::{CustomerId, StockId};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Rental {
    id: RentalId,
    customer_id: CustomerId,
    stock_id: StockId,
    rented_at: RentedAt,
    returned_at: Option<ReturnedAt>,
    status: RentalStatus,
}

impl Rental {
    pub fn new(
        id: RentalId,
        customer_id: CustomerId,
        stock_id: StockId,
        rented_at: RentedAt,
        returned_at: Option<ReturnedAt>,
        status: RentalStatus,
    ) -> Self {
        Self {
            id,
            customer_id,
            stock_id,
            rented_at,
            returned_at,
            status,
        }
    }

    pub fn borrowed(
        id: RentalId,
        customer_id: CustomerId,
        stock_id: StockId,
        rented_at: RentedAt,
    ) -> Self {
        Self::new(
            id,
            customer_id,
            stock_id,
            rented_at,
            None,
            RentalStatus::Borrowed,
        )
    }

    pub fn is_returned(&self) -> bool {
        matches!(self.status, RentalStatus::Returned)
    }

    // rented_at is part of the audit trail and never rewritten.
    pub fn into_returned(self, returned_at: ReturnedAt) -> Self {
        let DestructRental {
            id,
            customer_id,
            stock_id,
            rented_at,
            ..
        } = self.into_destruct();
        Self::new(
            id,
            customer_id,
            stock_id,
            rented_at,
            Some(returned_at),
            RentalStatus::Returned,
        )
    }
}
