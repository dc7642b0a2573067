// Configuration module
pub mod arrange_config;

pub use arrange_config::ArrangeConfig;
