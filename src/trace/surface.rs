//! In-memory RGBA surface addressed in layout units, scaled by pixel density.

use ndarray::Array2;

/// Packed 0xRRGGBBAA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xff)
    }
}

/// Raster target for the history trace.
///
/// The layout box is in layout units; the backing store is layout times the
/// device pixel ratio, so strokes stay crisp on dense displays. The backing
/// dimensions are re-derived from the layout box on every render, which also
/// clears the previous frame.
#[derive(Debug, Clone)]
pub struct TraceSurface {
    layout_width: f32,
    layout_height: f32,
    device_pixel_ratio: f32,
    pixels: Array2<u32>,
}

impl TraceSurface {
    pub fn new(layout_width: f32, layout_height: f32, device_pixel_ratio: f32) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let mut surface = Self {
            layout_width,
            layout_height,
            device_pixel_ratio: dpr,
            pixels: Array2::zeros((0, 0)),
        };
        surface.prepare();
        surface
    }

    pub fn layout_width(&self) -> f32 {
        self.layout_width
    }

    pub fn layout_height(&self) -> f32 {
        self.layout_height
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Resize the layout box, e.g. after the containing view changes.
    pub fn set_layout(&mut self, width: f32, height: f32) {
        self.layout_width = width;
        self.layout_height = height;
    }

    /// Backing store size in device pixels, width then height.
    pub fn backing_size(&self) -> (usize, usize) {
        let (rows, cols) = self.pixels.dim();
        (cols, rows)
    }

    /// Re-derive the backing store from the layout box and leave it cleared.
    pub(crate) fn prepare(&mut self) {
        let width = (self.layout_width * self.device_pixel_ratio).round().max(0.0) as usize;
        let height = (self.layout_height * self.device_pixel_ratio).round().max(0.0) as usize;
        if self.pixels.dim() == (height, width) {
            self.clear();
        } else {
            self.pixels = Array2::zeros((height, width));
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        Color(self.pixels[[y, x]])
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| *p == 0)
    }

    /// Stroke a polyline given in layout units. Coordinates are scaled by the
    /// device pixel ratio; joins and caps are round by construction.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let dpr = self.device_pixel_ratio;
        let radius = width * dpr / 2.0;
        for pair in points.windows(2) {
            let (x0, y0) = (pair[0].0 * dpr, pair[0].1 * dpr);
            let (x1, y1) = (pair[1].0 * dpr, pair[1].1 * dpr);
            self.stamp_segment(x0, y0, x1, y1, radius, color);
        }
    }

    /// Stamp overlapping disks along the segment, one radius apart.
    fn stamp_segment(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, radius: f32, color: Color) {
        let dx = x1 - x0;
        let dy = y1 - y0;
        let length = (dx * dx + dy * dy).sqrt();
        let step = radius.max(0.5);
        let steps = ((length / step).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disk(x0 + dx * t, y0 + dy * t, radius, color);
        }
    }

    fn stamp_disk(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let (rows, cols) = self.pixels.dim();
        if rows == 0 || cols == 0 {
            return;
        }
        let r = radius.max(0.5);
        let x0 = ((cx - r).floor() as i64).max(0);
        let x1 = ((cx + r).ceil() as i64).min(cols as i64 - 1);
        let y0 = ((cy - r).floor() as i64).max(0);
        let y1 = ((cy + r).ceil() as i64).min(rows as i64 - 1);
        let r2 = r * r;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[[y as usize, x as usize]] = color.0;
                }
            }
        }
    }
}
