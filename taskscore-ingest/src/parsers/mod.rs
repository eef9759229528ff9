//! Input parsers: JSON request bodies and CSV task exports.

pub mod csv_tasks;
pub mod json_request;

pub use csv_tasks::{parse_tasks_csv, parse_tasks_csv_str};
pub use json_request::parse_request_json;
