pub mod chat;
pub mod config;
pub mod error;
pub mod inference;
pub mod relay;
pub mod server;

pub use error::{Error, Result};
