pub mod config;
pub mod primitives;

pub use config::FilterConfig;
