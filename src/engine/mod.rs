pub mod error;
pub mod notes;
pub mod practice;
pub mod resolver;

pub use error::LookupError;
