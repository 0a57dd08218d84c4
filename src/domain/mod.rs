pub mod cql;
pub mod types;

pub use cql::{CqlFilter, CqlParseError};
pub use types::{ContentType, ProfileCounts, SizeProfile};
