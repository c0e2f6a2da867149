pub mod config;
pub mod error;


pub use config::*;
pub use error::*;
