pub mod agenda;
pub mod error;
pub mod greyfinch;
pub mod models;

pub use error::{Error, Operation, TransportError};
pub use greyfinch::{GreyfinchClient, DEFAULT_API_URL};
pub use models::{Booking, Credentials, SessionToken};
