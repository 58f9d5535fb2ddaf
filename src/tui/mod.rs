pub mod app;
pub mod input;
pub mod render;
pub mod theme;
pub mod timer;

pub use app::run;
