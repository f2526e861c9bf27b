/// Texture decoding and bilinear sampling
use image::DynamicImage;
use log::warn;
use std::path::Path;

/// A decoded RGB texture sampled with bilinear filtering
#[derive(Debug, Clone)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>, // RGB8, row-major
}

impl Texture {
    /// Load a texture from an image file on disk.
    ///
    /// A missing or undecodable file is logged and yields `None`; the caller
    /// keeps whatever texture it had before. The lookup is re-attempted only
    /// on the next texture cycle.
    pub fn load(path: &Path) -> Option<Texture> {
        if !path.exists() {
            warn!("image not found: {}", path.display());
            return None;
        }

        match image::open(path) {
            Ok(image) => Some(Texture::from_image(image)),
            Err(e) => {
                warn!("failed to decode image {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn from_image(image: DynamicImage) -> Texture {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Texture {
            width,
            height,
            pixels: rgb.into_raw(),
        }
    }

    /// Build a texture from raw RGB8 pixel data, row-major
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Texture {
        assert_eq!(pixels.len(), (width * height * 3) as usize);
        Texture {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn texel(&self, x: u32, y: u32) -> [f32; 3] {
        let idx = ((y * self.width + x) * 3) as usize;
        [
            self.pixels[idx] as f32,
            self.pixels[idx + 1] as f32,
            self.pixels[idx + 2] as f32,
        ]
    }

    /// Sample the texture at normalized coordinates with bilinear filtering.
    /// Coordinates outside [0, 1] clamp to the edge texels.
    pub fn sample(&self, u: f32, v: f32) -> [u8; 3] {
        let x = u.clamp(0.0, 1.0) * (self.width - 1) as f32;
        let y = v.clamp(0.0, 1.0) * (self.height - 1) as f32;

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let t00 = self.texel(x0, y0);
        let t10 = self.texel(x1, y0);
        let t01 = self.texel(x0, y1);
        let t11 = self.texel(x1, y1);

        let mut out = [0u8; 3];
        for c in 0..3 {
            let top = t00[c] * (1.0 - fx) + t10[c] * fx;
            let bottom = t01[c] * (1.0 - fx) + t11[c] * fx;
            out[c] = (top * (1.0 - fy) + bottom * fy).round() as u8;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_skipped() {
        let result = Texture::load(Path::new("no-such-image.jpg"));
        assert!(result.is_none());
    }

    #[test]
    fn test_bilinear_midpoint() {
        // Two texels, black and white: the midpoint blends to mid-grey.
        let texture = Texture::from_pixels(2, 1, vec![0, 0, 0, 255, 255, 255]);
        let mid = texture.sample(0.5, 0.0);
        assert_eq!(mid, [128, 128, 128]);
    }

    #[test]
    fn test_sample_clamps_to_edges() {
        let texture = Texture::from_pixels(2, 1, vec![10, 20, 30, 200, 210, 220]);
        assert_eq!(texture.sample(-1.0, 0.0), [10, 20, 30]);
        assert_eq!(texture.sample(2.0, 0.0), [200, 210, 220]);
        assert_eq!(texture.sample(0.0, 5.0), [10, 20, 30]);
    }

    #[test]
    fn test_exact_texel_lookup() {
        let texture = Texture::from_pixels(2, 2, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(texture.sample(0.0, 0.0), [1, 2, 3]);
        assert_eq!(texture.sample(1.0, 0.0), [4, 5, 6]);
        assert_eq!(texture.sample(0.0, 1.0), [7, 8, 9]);
        assert_eq!(texture.sample(1.0, 1.0), [10, 11, 12]);
    }
}
