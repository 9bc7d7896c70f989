mod config;
mod error;

mod tests;

pub use config::*;
pub use error::*;
