pub mod clock;
pub mod errors;

pub mod achievements;
pub mod goals;
pub mod progress;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ConflictError, Error, NotFoundError, Result, ValidationError};

pub use achievements::*;
pub use goals::*;
pub use progress::*;
