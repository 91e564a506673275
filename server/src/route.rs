pub use self::{movie::*, rental::*};

mod movie;
mod rental;
