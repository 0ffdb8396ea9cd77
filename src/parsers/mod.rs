pub mod controller;
pub mod types;

pub use controller::{parse, parse_file, ParseError};
pub use types::Table;
