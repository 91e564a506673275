mod id;
mod title;

pub use self::{id::*, title::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Movie {
    id: MovieId,
    title: MovieTitle,
}

impl Movie {
    pub fn new(id: MovieId, title: MovieTitle) -> Self {
        Self { id, title }
    }
}
