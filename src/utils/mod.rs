pub mod table;
pub mod time;

pub use time::{minutes_between, month_key, parse_timestamp, round2};
