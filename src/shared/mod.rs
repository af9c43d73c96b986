pub mod error;
pub mod logging;
pub mod result;
pub mod security;

pub use result::Result;
