//! Normalized pixel buffers.
//!
//! Both buffers store values in [0, 1], row-major, and convert to and from
//! 8-bit samples by scaling with 255.
//!
//! Samples are `f64`, so an [`RgbBuffer`] costs 24 bytes per pixel. The
//! default 94-glyph sheet (2240x2240) takes about 120 MB in memory.

/// An RGB pixel with channels in [0, 1].
pub type Rgb = [f64; 3];

/// Single-channel buffer, used for glyph canvases.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a buffer from 8-bit samples, normalizing by 255.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            data: bytes.iter().map(|&b| b as f64 / 255.0).collect(),
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = value;
    }

    /// Convert to 8-bit bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().map(|&v| to_u8(v)).collect()
    }

    /// Returns true if every value lies in [0, 1].
    pub fn is_normalized(&self) -> bool {
        self.data.iter().all(|v| (0.0..=1.0).contains(v))
    }
}

/// Three-channel buffer, used for tile sheets and their cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Rgb>,
}

impl RgbBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new buffer filled with black.
    pub fn new_black(width: u32, height: u32) -> Self {
        Self::new(width, height, [0.0; 3])
    }

    /// Create a buffer from packed 8-bit RGB samples.
    pub fn from_rgb8(width: u32, height: u32, bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), (width as usize) * (height as usize) * 3);
        let data = bytes
            .chunks_exact(3)
            .map(|px| {
                [
                    px[0] as f64 / 255.0,
                    px[1] as f64 / 255.0,
                    px[2] as f64 / 255.0,
                ]
            })
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            bytes.extend(px.iter().map(|&v| to_u8(v)));
        }
        bytes
    }

    /// Returns true if every channel of every pixel is exactly zero.
    pub fn is_all_black(&self) -> bool {
        self.data.iter().all(|px| px.iter().all(|&v| v == 0.0))
    }

    /// Copy `src` into this buffer with its top-left corner at `(x, y)`.
    ///
    /// Pixels that fall outside this buffer are dropped.
    pub fn paste(&mut self, src: &RgbBuffer, x: i64, y: i64) {
        for sy in 0..src.height {
            let dy = y + sy as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + sx as i64;
                if dx < 0 || dx >= self.width as i64 {
                    continue;
                }
                self.set(dx as u32, dy as u32, src.get(sx, sy));
            }
        }
    }

    /// Copy out the `width x height` rectangle at `(x, y)`.
    ///
    /// Pixels outside this buffer read as black.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> RgbBuffer {
        let mut out = RgbBuffer::new_black(width, height);
        out.paste(self, -(x as i64), -(y as i64));
        out
    }
}

/// Conversion of an image into the RGB form the packer places on a sheet.
pub trait ToRgbBuffer {
    /// Returns the image as an RGB buffer.
    fn to_rgb_buffer(&self) -> RgbBuffer;
}

impl ToRgbBuffer for RgbBuffer {
    fn to_rgb_buffer(&self) -> RgbBuffer {
        self.clone()
    }
}

impl ToRgbBuffer for GrayscaleBuffer {
    fn to_rgb_buffer(&self) -> RgbBuffer {
        RgbBuffer {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| [v, v, v]).collect(),
        }
    }
}

impl<T: ToRgbBuffer + ?Sized> ToRgbBuffer for &T {
    fn to_rgb_buffer(&self) -> RgbBuffer {
        (**self).to_rgb_buffer()
    }
}

#[inline]
fn to_u8(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
