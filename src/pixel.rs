use bytemuck::{Pod, Zeroable};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// `self * self + c`
    #[inline]
    pub fn square_plus(self, c: Complex) -> Self {
        Complex {
            real: self.real * self.real - self.imaginary * self.imaginary + c.real,
            imaginary: 2.0 * self.real * self.imaginary + c.imaginary,
        }
    }

    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

/// A single RGBA8 output pixel, laid out so a colour buffer can be handed to
/// the GPU as raw bytes.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_plus_matches_expansion() {
        let z = Complex::new(1.0, 2.0);
        let c = Complex::new(0.5, -0.5);
        // (1 + 2i)^2 = -3 + 4i
        assert_eq!(z.square_plus(c), Complex::new(-2.5, 3.5));
    }

    #[test]
    fn rgba_casts_to_four_bytes() {
        let pixels = [Rgba::opaque(1, 2, 3), Rgba::BLACK];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 255, 0, 0, 0, 255]);
    }
}
