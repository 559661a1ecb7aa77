mod config;
pub mod countdown;
mod error;
mod server;

pub use config::Config;
pub use error::{Error, Result};
pub use server::Server;
