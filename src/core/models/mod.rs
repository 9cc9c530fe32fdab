//! Model listing: fetch, normalize, sort, filter, and date display.

mod error;
mod fetch;
mod filter;
mod normalize;
mod record;
mod time;


pub use error::FetchError;
pub use fetch::fetch_models;
pub use filter::filter_records;
pub use record::ModelRecord;
pub use time::format_timestamp;
