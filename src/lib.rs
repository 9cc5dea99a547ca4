// E-Masonry: a grid of randomly coloured tiles driven by a control panel
// The configuration is a single value; every control maps to a pure transition.

pub mod action;
pub mod app;
pub mod config;
pub mod display;
pub mod errors;
pub mod grid;
pub mod input;
pub mod loop_timer;

pub use action::{apply, Action, Transition};
pub use app::App;
pub use config::{AppConfig, Field, MasonryConfig};
pub use errors::{MasonryError, MasonryResult};
pub use grid::{render, GridTemplate, Placement, Render, Tile};
pub use loop_timer::LoopTimer;
