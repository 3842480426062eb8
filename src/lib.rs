pub mod config;
pub mod error;
pub mod feed;
pub mod source;
pub mod wire;

pub use config::FeedConfig;
pub use error::{FeedError, ProcessingError};
pub use feed::Feeder;
