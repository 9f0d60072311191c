pub mod connection;
pub mod properties;
pub mod reservations;
pub mod search;
pub mod users;

pub use connection::{apply_schema, init_db, Database};
pub use properties::create_property;
pub use reservations::list_reservations_for_guest;
pub use search::{build_search_query, search_properties, SearchQuery, SqlParam, DEFAULT_LIMIT};
pub use users::{create_user, get_user_by_email, get_user_by_id};
