use crate::error::CalcError;

/// Solutions of `a*x + b = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearSolution {
    NoSolution,
    Infinite,
    Root(f64),
}

/// Roots of `a*x^2 + b*x + c = 0`, classified by the discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    Real { x1: f64, x2: f64 },
    Double(f64),
    /// A conjugate pair `re ± im·i`.
    Conjugate { re: f64, im: f64 },
}

pub fn solve_linear(a: f64, b: f64) -> LinearSolution {
    if a == 0.0 {
        if b == 0.0 {
            LinearSolution::Infinite
        } else {
            LinearSolution::NoSolution
        }
    } else {
        LinearSolution::Root(-b / a)
    }
}

pub fn solve_quadratic(
    a: f64,
    b: f64,
    c: f64,
) -> Result<QuadraticRoots, CalcError> {
    if a == 0.0 {
        return Err(CalcError::InvalidCoefficient("a"));
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let root = discriminant.sqrt();
        Ok(QuadraticRoots::Real {
            x1: (-b + root) / (2.0 * a),
            x2: (-b - root) / (2.0 * a),
        })
    } else if discriminant == 0.0 {
        Ok(QuadraticRoots::Double(-b / (2.0 * a)))
    } else {
        Ok(QuadraticRoots::Conjugate {
            re: -b / (2.0 * a),
            im: (-discriminant).sqrt() / (2.0 * a),
        })
    }
}

/// Panel count used by the calculator's integration buttons.
pub const DEFAULT_PANELS: usize = 1000;

/// Composite Simpson's rule over `n` panels (`n` must be even).
/// Weights run 1, 4, 2, 4, ..., 4, 1, scaled by h/3.
pub fn integrate_simpson<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    n: usize,
) -> Result<f64, CalcError>
    where F: FnMut(f64) -> Result<f64, CalcError>
{
    if n == 0 || n % 2 != 0 {
        return Err(CalcError::InvalidInput(
            "Simpson's rule needs an even, nonzero panel count",
        ));
    }
    let h = (upper - lower) / n as f64;
    let mut sum = 0.0;
    for i in 0..=n {
        let weight = if i == 0 || i == n {
            1.0
        } else if i % 2 == 0 {
            2.0
        } else {
            4.0
        };
        sum += weight * f(lower + i as f64 * h)?;
    }
    Ok(sum * h / 3.0)
}

/// Composite trapezoidal rule over `n` panels.
pub fn integrate_trapezoid<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    n: usize,
) -> Result<f64, CalcError>
    where F: FnMut(f64) -> Result<f64, CalcError>
{
    if n == 0 {
        return Err(CalcError::InvalidInput(
            "trapezoidal rule needs a nonzero panel count",
        ));
    }
    let h = (upper - lower) / n as f64;
    let mut sum = 0.0;
    for i in 0..=n {
        let weight = if i == 0 || i == n { 0.5 } else { 1.0 };
        sum += weight * f(lower + i as f64 * h)?;
    }
    Ok(sum * h)
}

/// Central difference `(f(x + h) - f(x - h)) / 2h`. The caller picks
/// `h`; there is no adaptive step control.
pub fn derivative_central<F>(
    mut f: F,
    point: f64,
    h: f64,
) -> Result<f64, CalcError>
    where F: FnMut(f64) -> Result<f64, CalcError>
{
    if h == 0.0 || !h.is_finite() {
        return Err(CalcError::InvalidInput(
            "step size must be finite and nonzero",
        ));
    }
    Ok((f(point + h)? - f(point - h)?) / (2.0 * h))
}

/// Sample count used by the calculator's plotting surface.
pub const DEFAULT_SAMPLES: usize = 200;

/// A sampled curve together with the y-range of its finite points.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub points: Vec<(f64, f64)>,
    pub y_min: f64,
    pub y_max: f64,
}

/// Sample `f` at `n` evenly spaced points across `[x_min, x_max]`.
/// Points where evaluation fails or comes back non-finite are dropped
/// rather than fatal; the axis bounds come from the survivors. A curve
/// with no finite point at all is an empty sample.
pub fn sample<F>(
    mut f: F,
    x_min: f64,
    x_max: f64,
    n: usize,
) -> Result<Plot, CalcError>
    where F: FnMut(f64) -> Result<f64, CalcError>
{
    if n < 2 || !(x_max > x_min) {
        return Err(CalcError::InvalidInput(
            "plot domain must be non-empty and sampled at two points or more",
        ));
    }
    let step = (x_max - x_min) / (n - 1) as f64;
    let mut points = Vec::with_capacity(n);
    let mut y_min = std::f64::INFINITY;
    let mut y_max = std::f64::NEG_INFINITY;
    for i in 0..n {
        let x = x_min + i as f64 * step;
        let y = match f(x) {
            Ok(y) if y.is_finite() => y,
            _ => continue,
        };
        if y < y_min {
            y_min = y;
        }
        if y > y_max {
            y_max = y;
        }
        points.push((x, y));
    }
    if points.is_empty() {
        return Err(CalcError::EmptySample);
    }
    Ok(Plot { points, y_min, y_max })
}
