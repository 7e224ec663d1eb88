pub mod errors;
pub mod parser;

pub use errors::DurationError;
pub use parser::parse;
