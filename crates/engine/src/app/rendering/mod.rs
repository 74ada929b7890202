mod frame;
mod renderer;
mod transform;

pub use frame::Frame;
pub use renderer::Renderer;
pub use transform::{map_to_screen_px, Viewport};
