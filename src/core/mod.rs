pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;

pub use config::Config;
pub use error::{AppError, Result};
