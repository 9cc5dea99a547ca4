// Configuration module - the masonry record and the program settings
pub mod app_config;
pub mod masonry_config;

pub use app_config::{AppConfig, DisplayConfig, LoopConfig};
pub use masonry_config::{ceil_draw, coin_flip, Field, MasonryConfig};
