pub mod error;
pub mod frontend;

pub use error::DslError;
pub use frontend::{parse, tokenize};
