mod availability;
mod id;

pub use self::{availability::*, id::*};
use crate::entity::MovieId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Stock {
    id: StockId,
    movie_id: MovieId,
    is_available: StockAvailability,
}

impl Stock {
    pub fn new(id: StockId, movie_id: MovieId, is_available: StockAvailability) -> Self {
        Self {
            id,
            movie_id,
            is_available,
        }
    }
}
