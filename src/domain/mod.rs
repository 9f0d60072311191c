pub mod property;
pub mod reservation;
pub mod search;
pub mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::GuestReservation;
pub use search::SearchCriteria;
pub use user::{NewUser, User};
