#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;
pub mod util;

pub use app::SketchApp;
pub use canvas::{BACKGROUND, Canvas, Snapshot};
pub use config::SketchConfig;
pub use controller::SketchController;
pub use error::{SketchError, SketchResult};
pub use input::{InputEvent, InputHandler};
pub use palette::Palette;
pub use renderer::Renderer;
pub use state::StrokeState;
pub use surface::Surface;
pub use tools::Tool;
