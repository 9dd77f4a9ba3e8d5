/// Borrowed row-major RGB image, three bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h*3
}

impl RgbImageView<'_> {
    /// Read one pixel. Coordinates outside the image read as black.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 3] {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return [0, 0, 0];
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        match self.data.get(idx..idx + 3) {
            Some(px) => [px[0], px[1], px[2]],
            None => [0, 0, 0],
        }
    }
}

/// Owned RGB raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbImage {
    /// Allocate a raster filled with a single color.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn view(&self) -> RgbImageView<'_> {
        RgbImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> [u8; 3] {
        self.view().pixel(x, y)
    }

    /// Write one pixel; writes outside the raster are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.data[idx..idx + 3].copy_from_slice(&color);
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`, clipped to the raster.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: [u8; 3]) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i32);
        let y1 = y1.min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.put_pixel(x, y, color);
            }
        }
    }
}
