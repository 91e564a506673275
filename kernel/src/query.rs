pub use self::{customer::*, movie::*, rental::*, stock::*};

mod customer;
mod movie;
mod rental;
mod stock;
