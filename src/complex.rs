use std::fmt;

use num::complex::Complex64;

use crate::error::CalcError;

/// A complex number in polar form, as reported to the user:
/// `r e^(θi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub r: f64,
    pub theta: f64,
}

impl Polar {
    pub fn to_complex(self) -> Complex64 {
        Complex64::from_polar(self.r, self.theta)
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} e^({}i)", self.r, self.theta)
    }
}

pub fn add(a: Complex64, b: Complex64) -> Complex64 {
    a + b
}

pub fn subtract(a: Complex64, b: Complex64) -> Complex64 {
    a - b
}

pub fn multiply(a: Complex64, b: Complex64) -> Complex64 {
    a * b
}

pub fn divide(a: Complex64, b: Complex64) -> Result<Complex64, CalcError> {
    if b.norm_sqr() == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

pub fn modulus(z: Complex64) -> f64 {
    z.norm()
}

pub fn argument(z: Complex64) -> f64 {
    z.arg()
}

pub fn conjugate(z: Complex64) -> Complex64 {
    z.conj()
}

pub fn polar_form(z: Complex64) -> Polar {
    let (r, theta) = z.to_polar();
    Polar { r, theta }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn componentwise_and_product() {
        assert_eq!(add(z(1.0, 2.0), z(3.0, -1.0)), z(4.0, 1.0));
        assert_eq!(subtract(z(1.0, 2.0), z(3.0, -1.0)), z(-2.0, 3.0));
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i - 8 = -5 + 10i
        assert_eq!(multiply(z(1.0, 2.0), z(3.0, 4.0)), z(-5.0, 10.0));
    }

    #[test]
    fn division() {
        let q = divide(z(-5.0, 10.0), z(3.0, 4.0)).unwrap();
        assert!((q.re - 1.0).abs() < 1e-12);
        assert!((q.im - 2.0).abs() < 1e-12);
        assert_eq!(
            divide(z(1.0, 1.0), z(0.0, 0.0)),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn modulus_argument_conjugate() {
        assert_eq!(modulus(z(3.0, 4.0)), 5.0);
        assert_eq!(argument(z(0.0, 1.0)), std::f64::consts::FRAC_PI_2);
        assert_eq!(conjugate(z(3.0, 4.0)), z(3.0, -4.0));
    }

    #[test]
    fn polar_round_trips() {
        let original = z(-2.5, 1.25);
        let polar = polar_form(original);
        let back = polar.to_complex();
        assert!((back.re - original.re).abs() < 1e-12);
        assert!((back.im - original.im).abs() < 1e-12);
    }

    #[test]
    fn polar_renders_as_exponential() {
        let p = Polar { r: 2.0, theta: 0.5 };
        assert_eq!(p.to_string(), "2 e^(0.5i)");
    }
}
