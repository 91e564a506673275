use crate::controller::Intake;
use application::transfer::GetRentalHistoryDto;
use uuid::Uuid;

#[derive(Debug)]
pub struct RentalHistoryRequest {
    movie_id: Uuid,
}

impl RentalHistoryRequest {
    pub fn new(movie_id: Uuid) -> Self {
        Self { movie_id }
    }
}

pub struct Transformer;

impl Intake<RentalHistoryRequest> for Transformer {
    type To = GetRentalHistoryDto;
    fn emit(&self, input: RentalHistoryRequest) -> Self::To {
        GetRentalHistoryDto {
            movie_id: input.movie_id,
        }
    }
}
