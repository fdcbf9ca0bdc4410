//! CLI command implementations

pub mod cache;
pub mod config;
pub mod estimate;

pub use cache::execute as cache;
pub use config::execute as config;
pub use estimate::execute as estimate;
