//! Natural cubic spline over a 4-sample window.
//!
//! The four samples are control points at abscissas `base`, `base + 1`,
//! `base + 2` and `base + 3`. The second derivative (the "moment") is held
//! at zero on the two outer points, which leaves two unknown interior moments.
//! For unit spacing that 2x2 system has a closed-form solution, so no general
//! tridiagonal solver is needed, and the window size is fixed at four.

/// Number of samples in a spline window.
pub const WINDOW: usize = 4;

/// A natural cubic spline through four unit-spaced samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spline {
    y: [f64; WINDOW],
    m1: f64,
    m2: f64,
}

impl Spline {
    /// Builds the spline for `window`, solving the interior moments.
    pub fn new(window: &[f64; WINDOW]) -> Self {
        let [y0, y1, y2, y3] = *window;
        let c1 = 3.0 * ((y2 - y1) - (y1 - y0));
        let c2 = 3.0 * ((y3 - y2) - (y2 - y1));

        // m0 = m3 = 0
        let m1 = (c1 * 2.0 - c2 / 2.0) / 3.75;
        let m2 = (c1 / 2.0 - c2 * 2.0) / -7.75;

        Self { y: *window, m1, m2 }
    }

    /// Returns the interior moments `(m1, m2)`.
    pub fn moments(&self) -> (f64, f64) {
        (self.m1, self.m2)
    }

    /// Evaluates the spline at `x`, with the window's first sample at `base`.
    ///
    /// Positions up to `base + 1` use the first segment, positions up to
    /// `base + 2` the second, and everything beyond the third.
    pub fn eval(&self, base: f64, x: f64) -> f64 {
        let [y0, y1, y2, y3] = self.y;
        if x <= base + 1.0 {
            segment_first(self.m1, base, base + 1.0, y0, y1, x)
        } else if x <= base + 2.0 {
            segment_middle(self.m1, self.m2, base + 1.0, base + 2.0, y1, y2, x)
        } else {
            segment_last(self.m2, base + 2.0, base + 3.0, y2, y3, x)
        }
    }
}

/// Evaluates the spline through `window` at `x`.
///
/// Shorthand for `Spline::new(window).eval(base, x)`.
pub fn evaluate(window: &[f64; WINDOW], base: f64, x: f64) -> f64 {
    Spline::new(window).eval(base, x)
}

// Segment formulas below are the unit-width (h = 1) piecewise cubic. Term
// order is kept stable so results are reproducible to the bit.

fn segment_first(m1: f64, x0: f64, x1: f64, y0: f64, y1: f64, x: f64) -> f64 {
    let v1 = (x - x0) * (x - x0) * (x - x0) * m1 / 6.0;
    let v2 = -y0 * (x - x1);
    let v3 = (y1 - m1 / 6.0) * (x - x0);
    v1 + v2 + v3
}

fn segment_middle(m1: f64, m2: f64, x1: f64, x2: f64, y1: f64, y2: f64, x: f64) -> f64 {
    let v0 = -(x - x2) * (x - x2) * (x - x2) * m1 / 6.0;
    let v1 = (x - x1) * (x - x1) * (x - x1) * m2 / 6.0;
    let v2 = -(y1 - m1 / 6.0) * (x - x2);
    let v3 = (y2 - m2 / 6.0) * (x - x1);
    v0 + v1 + v2 + v3
}

fn segment_last(m2: f64, x2: f64, x3: f64, y2: f64, y3: f64, x: f64) -> f64 {
    let v0 = -(x - x3) * (x - x3) * (x - x3) * m2 / 6.0;
    let v2 = -(y2 - m2 / 6.0) * (x - x3);
    let v3 = y3 * (x - x2);
    v0 + v2 + v3
}
