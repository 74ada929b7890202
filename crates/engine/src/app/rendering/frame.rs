use crate::content::Image;
use crate::geometry::PixelRect;

/// RGBA8 draw target borrowed from the framebuffer for one render pass.
///
/// All draws are clipped to the frame; nothing here can fail.
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    /// `pixels` must hold at least `width * height * 4` bytes; any shortfall
    /// shrinks the drawable height.
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        let rows_available = if width == 0 {
            0
        } else {
            (pixels.len() / (width as usize * 4)) as u32
        };
        Self {
            pixels,
            width,
            height: height.min(rows_available),
        }
    }

    pub fn fill(&mut self, color: [u8; 4]) {
        let len = self.width as usize * self.height as usize * 4;
        for chunk in self.pixels[..len].chunks_exact_mut(4) {
            chunk.copy_from_slice(&color);
        }
    }

    #[cfg(test)]
    fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let offset = self.offset_of(x, y)?;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(out)
    }

    /// Copies `region` of `image` with its top-left corner at `(x, y)`.
    ///
    /// Fully transparent source pixels are skipped; partially transparent
    /// ones are blended over what is already in the frame.
    pub fn draw_image(&mut self, image: &Image, region: PixelRect, x: i32, y: i32) {
        let region = clip_region_to_image(region, image);
        if region.is_empty() {
            return;
        }
        let dest = PixelRect::from_origin_size(x, y, region.width(), region.height());
        let left = dest.min_x.max(0);
        let top = dest.min_y.max(0);
        let right = dest.max_x.min(self.width as i32);
        let bottom = dest.max_y.min(self.height as i32);
        if left >= right || top >= bottom {
            return;
        }

        for out_y in top..bottom {
            let src_y = (region.min_y + (out_y - dest.min_y)) as u32;
            for out_x in left..right {
                let src_x = (region.min_x + (out_x - dest.min_x)) as u32;
                let Some(src) = image.pixel(src_x, src_y) else {
                    continue;
                };
                if src[3] == 0 {
                    continue;
                }
                self.blend_pixel(out_x, out_y, src);
            }
        }
    }

    /// One-pixel outline just inside `rect`.
    pub fn stroke_rect(&mut self, rect: PixelRect, color: [u8; 4]) {
        if rect.is_empty() {
            return;
        }
        let right = rect.max_x - 1;
        let bottom = rect.max_y - 1;
        for x in rect.min_x..=right {
            self.write_pixel(x, rect.min_y, color);
            self.write_pixel(x, bottom, color);
        }
        for y in rect.min_y..=bottom {
            self.write_pixel(rect.min_x, y, color);
            self.write_pixel(right, y, color);
        }
    }

    fn offset_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    fn write_pixel(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if let Some(offset) = self.offset_of(x, y) {
            self.pixels[offset..offset + 4].copy_from_slice(&color);
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, src: [u8; 4]) {
        let Some(offset) = self.offset_of(x, y) else {
            return;
        };
        if src[3] == u8::MAX {
            self.pixels[offset..offset + 4].copy_from_slice(&src);
            return;
        }
        let alpha = src[3] as u32;
        let inverse = 255 - alpha;
        for channel in 0..3 {
            let dst = self.pixels[offset + channel] as u32;
            let blended = (src[channel] as u32 * alpha + dst * inverse + 127) / 255;
            self.pixels[offset + channel] = blended as u8;
        }
        let dst_alpha = self.pixels[offset + 3] as u32;
        self.pixels[offset + 3] = (alpha + (dst_alpha * inverse + 127) / 255).min(255) as u8;
    }
}

fn clip_region_to_image(region: PixelRect, image: &Image) -> PixelRect {
    let bounds = image.bounds();
    PixelRect::new(
        region.min_x.clamp(bounds.min_x, bounds.max_x),
        region.min_y.clamp(bounds.min_y, bounds.max_y),
        region.max_x.clamp(bounds.min_x, bounds.max_x),
        region.max_y.clamp(bounds.min_y, bounds.max_y),
    )
}
