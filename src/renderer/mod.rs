pub mod components;
pub mod context;
pub mod renderer;

pub use components::*;
pub use context::*;
pub use renderer::*;
