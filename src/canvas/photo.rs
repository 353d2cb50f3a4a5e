use std::path::Path;

use crate::foundation::core::Orientation;
use crate::foundation::error::{PhotocalError, PhotocalResult};

/// A photo held as straight-alpha RGBA pixels.
#[derive(Clone)]
pub struct Photo {
    image: image::RgbaImage,
}

impl Photo {
    /// Decode a photo from disk.
    pub fn open(path: &Path) -> PhotocalResult<Self> {
        let image = image::open(path)
            .map_err(|err| PhotocalError::canvas(format!("{}: {err}", path.display())))?
            .to_rgba8();
        Ok(Self { image })
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: image::RgbaImage) -> Self {
        Self { image }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Landscape or portrait, by pixel dimensions.
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width(), self.height())
    }

    /// The backing pixels.
    pub fn image(&self) -> &image::RgbaImage {
        &self.image
    }

    /// A quarter turn clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            image: image::imageops::rotate90(&self.image),
        }
    }

    /// A quarter turn counter-clockwise.
    pub fn rotated_ccw(&self) -> Self {
        Self {
            image: image::imageops::rotate270(&self.image),
        }
    }

    /// Scale and center-crop to exactly `target`, keeping the photo's
    /// aspect ratio and trimming the overlong axis evenly on both sides.
    ///
    /// With `allow_rotation` set, a target whose orientation disagrees with
    /// the photo's is swapped first, so the caller can rotate the result
    /// into place instead of cropping most of the photo away.
    pub fn cropped_to(&self, target: (u32, u32), allow_rotation: bool) -> Self {
        let (mut tw, mut th) = (target.0.max(1), target.1.max(1));
        if allow_rotation && Orientation::of(tw, th) != self.orientation() {
            std::mem::swap(&mut tw, &mut th);
        }
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 {
            return Self {
                image: image::RgbaImage::new(tw, th),
            };
        }

        let ws = u64::from(w) * u64::from(th);
        let hs = u64::from(h) * u64::from(tw);
        let image = if hs > ws {
            // Taller than the target ratio: fit the width, trim top and
            // bottom evenly.
            let nh = ((f64::from(h) * f64::from(tw)) / f64::from(w)).round() as u32;
            let resized =
                image::imageops::resize(&self.image, tw, nh, image::imageops::FilterType::Lanczos3);
            image::imageops::crop_imm(&resized, 0, (nh - th) / 2, tw, th).to_image()
        } else if ws > hs {
            // Wider: fit the height, trim the sides.
            let nw = ((f64::from(w) * f64::from(th)) / f64::from(h)).round() as u32;
            let resized =
                image::imageops::resize(&self.image, nw, th, image::imageops::FilterType::Lanczos3);
            image::imageops::crop_imm(&resized, (nw - tw) / 2, 0, tw, th).to_image()
        } else {
            image::imageops::resize(&self.image, tw, th, image::imageops::FilterType::Lanczos3)
        };
        Self { image }
    }

    /// Shrink to fit inside `bounds`, preserving the aspect ratio. Photos
    /// already inside the bounds are returned unchanged.
    pub fn resized_to_fit(&self, bounds: (u32, u32)) -> Self {
        let (bw, bh) = (bounds.0.max(1), bounds.1.max(1));
        let (w, h) = (self.width(), self.height());
        if w == 0 || h == 0 || (w <= bw && h <= bh) {
            return self.clone();
        }
        let scale = (f64::from(bw) / f64::from(w)).min(f64::from(bh) / f64::from(h));
        let nw = ((f64::from(w) * scale).round() as u32).max(1);
        let nh = ((f64::from(h) * scale).round() as u32).max(1);
        Self {
            image: image::imageops::resize(
                &self.image,
                nw,
                nh,
                image::imageops::FilterType::Lanczos3,
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/photo.rs"]
mod tests;
