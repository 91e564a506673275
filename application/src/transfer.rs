pub use self::rental::*;

mod rental;
