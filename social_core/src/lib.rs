pub mod clock;
pub mod error;
pub mod recent;

pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use recent::*;
