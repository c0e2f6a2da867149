pub mod app;
pub mod canvas;
pub mod controls;
pub mod progress;


pub use app::*;
