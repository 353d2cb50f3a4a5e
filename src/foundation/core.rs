use crate::foundation::error::{PhotocalError, PhotocalResult};

// Fractional pixel coordinates are snapped with round-half-up, matching the
// rounding used by the partition arithmetic.
pub(crate) fn snap_px(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct PageRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PageRect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn from_f64(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(snap_px(x0), snap_px(y0), snap_px(x1), snap_px(y1))
    }

    pub fn width(self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(self) -> i32 {
        self.y1 - self.y0
    }

    pub fn size(self) -> (f64, f64) {
        (f64::from(self.width()), f64::from(self.height()))
    }

    pub fn is_landscape(self) -> bool {
        self.width() >= self.height()
    }

    pub fn validate(self) -> PhotocalResult<()> {
        if self.x1 < self.x0 || self.y1 < self.y0 {
            return Err(PhotocalError::invalid_rect(format!(
                "{self:?} has negative extent"
            )));
        }
        Ok(())
    }

    pub fn validate_positive(self) -> PhotocalResult<()> {
        self.validate()?;
        if self.width() == 0 || self.height() == 0 {
            return Err(PhotocalError::invalid_rect(format!("{self:?} is empty")));
        }
        Ok(())
    }

    pub fn inset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 - dx, self.y1 - dy)
    }

    /// Map this rectangle onto the canvas produced by rotating a canvas of
    /// height `canvas_height` a quarter turn clockwise.
    pub fn rotated_cw(self, canvas_height: i32) -> Self {
        Self::new(
            canvas_height - self.y1,
            self.x0,
            canvas_height - self.y0,
            self.x1,
        )
    }

    /// Inverse of [`PageRect::rotated_cw`]: map onto the canvas produced by a
    /// quarter turn counter-clockwise of a canvas of width `canvas_width`.
    pub fn rotated_ccw(self, canvas_width: i32) -> Self {
        Self::new(
            self.y0,
            canvas_width - self.x1,
            self.y1,
            canvas_width - self.x0,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if width >= height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn premultiplied(self) -> [u8; 4] {
        let a16 = u16::from(self.a);
        let premul = |c: u8| -> u8 { ((u16::from(c) * a16 + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }
}

impl std::str::FromStr for Rgba8 {
    type Err = PhotocalError;

    fn from_str(s: &str) -> PhotocalResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| PhotocalError::config(format!("color '{s}' must start with '#'")))?;
        if !hex.is_ascii() {
            return Err(PhotocalError::config(format!("color '{s}' is not valid hex")));
        }
        let byte = |at: usize| -> PhotocalResult<u8> {
            u8::from_str_radix(&hex[at..at + 2], 16)
                .map_err(|_| PhotocalError::config(format!("color '{s}' is not valid hex")))
        };
        let nibble = |at: usize| -> PhotocalResult<u8> {
            let v = u8::from_str_radix(&hex[at..at + 1], 16)
                .map_err(|_| PhotocalError::config(format!("color '{s}' is not valid hex")))?;
            Ok(v * 17)
        };
        match hex.len() {
            3 => Ok(Self::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(PhotocalError::config(format!(
                "color '{s}' must be #rgb, #rrggbb or #rrggbbaa"
            ))),
        }
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InkExtent {
    pub w: f64,
    pub h: f64,
    /// Gap between the nominal text origin and the first inked pixel.
    pub dx: f64,
    pub dy: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
