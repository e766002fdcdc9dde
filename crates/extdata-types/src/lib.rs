pub mod error;
pub mod query;

pub use error::{Error, Result};
pub use query::Query;
