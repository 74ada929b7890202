mod camera;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use camera::Camera2D;
pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{map_to_screen_px, Frame, Renderer, Viewport};
pub use scene::{InputSnapshot, Scene, SceneCommand};
