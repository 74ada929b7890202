use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use crate::app::Scene;

use super::{Frame, Viewport};

/// Owns the `pixels` framebuffer. The buffer keeps the logical viewport size
/// and is scaled onto the window surface, whatever its physical size.
pub struct Renderer {
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>, viewport: Viewport) -> Result<Self, Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
        let pixels = Pixels::new(viewport.width, viewport.height, surface)?;
        Ok(Self { pixels, viewport })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    /// Lets `scene` draw the whole frame, then presents it.
    pub fn render_scene(&mut self, scene: &dyn Scene) -> Result<(), Error> {
        let viewport = self.viewport;
        let mut frame = Frame::new(self.pixels.frame_mut(), viewport.width, viewport.height);
        scene.render(&mut frame);
        self.pixels.render()
    }
}
