use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentalStatus {
    Borrowed,
    Returned,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Borrowed => "Borrowed",
            RentalStatus::Returned => "Returned",
        }
    }
}
