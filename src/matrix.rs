use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::common::metadata::Version;

// Output matrix
//------------------------------------------------------------------------------

// Finished symbol including the quiet zone, dark = true, (0, 0) at top left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    modules: Vec<bool>,
}

impl Matrix {
    pub(crate) fn with_quiet_zone(version: Version, grid: &[bool]) -> Self {
        let symbol_width = version.width();
        let qz = version.quiet_zone_width();
        debug_assert!(grid.len() == symbol_width * symbol_width, "Grid doesn't match version");

        let width = symbol_width + 2 * qz;
        let mut modules = vec![false; width * width];
        for r in 0..symbol_width {
            for c in 0..symbol_width {
                modules[(r + qz) * width + (c + qz)] = grid[r * symbol_width + c];
            }
        }
        Self { width, modules }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.width, "Row out of bound: {r}");
        debug_assert!(c < self.width, "Column out of bound: {c}");

        self.modules[r * self.width + c]
    }

    pub fn render(&self, module_size: u32) -> GrayImage {
        let size = self.width as u32 * module_size;
        let mut canvas = GrayImage::new(size, size);
        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            let r = (y / module_size) as usize;
            let c = (x / module_size) as usize;
            *pixel = if self.get(r, c) { Luma([0]) } else { Luma([255]) };
        }
        canvas
    }

    pub fn render_color(&self, module_size: u32, light: Rgb<u8>, dark: Rgb<u8>) -> RgbImage {
        let size = self.width as u32 * module_size;
        let mut canvas = RgbImage::new(size, size);
        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            let r = (y / module_size) as usize;
            let c = (x / module_size) as usize;
            *pixel = if self.get(r, c) { dark } else { light };
        }
        canvas
    }

    // Terminal preview; light modules print bright
    pub fn to_str(&self) -> String {
        let mut canvas = String::with_capacity(self.width * (2 * self.width + 1));
        for r in 0..self.width {
            for c in 0..self.width {
                canvas.push_str(if self.get(r, c) { "  " } else { "██" });
            }
            canvas.push('\n');
        }
        canvas
    }
}
