pub mod config;
pub mod error;
pub mod handler;
pub mod router;
mod utils;

pub use config::Config;
pub use router::build_router;
