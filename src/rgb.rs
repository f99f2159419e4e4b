use std::ops::{Add, Mul};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGB {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        RGB { r, g, b }
    }

    pub fn all(x: f32) -> Self {
        Self::new(x, x, x)
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Mul for RGB {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul<f32> for RGB {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

/// Shading result for a single pixel, linear channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RGBA {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        RGBA { r, g, b, a }
    }

    pub fn opaque(color: RGB) -> Self {
        RGBA {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 1.0,
        }
    }

    /// Every channel clamped to the unit range.
    pub fn clamped(&self) -> Self {
        RGBA {
            r: self.r.max(0.0).min(1.0),
            g: self.g.max(0.0).min(1.0),
            b: self.b.max(0.0).min(1.0),
            a: self.a.max(0.0).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_and_modulate() {
        let c = RGB::new(1.0, 0.5, 0.0) * 0.5;
        assert_eq!(c, RGB::new(0.5, 0.25, 0.0));
        let m = RGB::all(0.5) * RGB::new(1.0, 0.0, 1.0);
        assert_eq!(m, RGB::new(0.5, 0.0, 0.5));
        let s = RGB::new(0.25, 0.0, 0.0) + RGB::new(0.25, 0.5, 0.0);
        assert_eq!(s, RGB::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn opaque_sets_unit_alpha() {
        let c = RGBA::opaque(RGB::new(0.2, 0.4, 0.6));
        assert_eq!(c.a, 1.0);
        assert_eq!(c.r, 0.2);
    }

    #[test]
    fn clamped_pins_out_of_range_channels() {
        let c = RGBA::new(1.5, -0.25, 0.5, 2.0).clamped();
        assert_eq!(c, RGBA::new(1.0, 0.0, 0.5, 1.0));
    }
}
