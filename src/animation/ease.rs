use kurbo::{CubicBez, ParamCurve, Point};

/// Unit-interval timing curve, applied to normalized phase time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Cubic Bézier timing curve through (0,0) and (1,1). Control x
    /// coordinates must lie in `[0, 1]` so the curve is a function of time.
    Bezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

/// Phase-1 curve: eases the outgoing face from identity into full rotation.
pub const FLIP_REMOVE_CURVE: Ease = Ease::Bezier {
    x1: 0.15,
    y1: 0.0,
    x2: 0.7,
    y2: 0.7,
};

/// Phase-2 curve: the point reflection of [`FLIP_REMOVE_CURVE`], so the
/// combined motion is velocity-continuous across the midpoint swap.
pub const FLIP_INSERT_CURVE: Ease = Ease::Bezier {
    x1: 0.3,
    y1: 0.3,
    x2: 0.85,
    y2: 1.0,
};

impl Ease {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Bezier { x1, y1, x2, y2 } => bezier_y_at_x(x1, y1, x2, y2, t),
        }
    }

    /// The time-reversed mirror of this curve: `m(t) == 1 - self(1 - t)`.
    ///
    /// Pairing a curve with its mirror across two half-duration phases keeps
    /// the combined motion free of a velocity discontinuity at the handoff.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Linear => Self::Linear,
            Self::InQuad => Self::OutQuad,
            Self::OutQuad => Self::InQuad,
            Self::InOutQuad => Self::InOutQuad,
            Self::InCubic => Self::OutCubic,
            Self::OutCubic => Self::InCubic,
            Self::InOutCubic => Self::InOutCubic,
            Self::Bezier { x1, y1, x2, y2 } => Self::Bezier {
                x1: 1.0 - x2,
                y1: 1.0 - y2,
                x2: 1.0 - x1,
                y2: 1.0 - y1,
            },
        }
    }
}

/// Solve `y(x)` on a unit-interval timing Bézier by bisection on the curve
/// parameter. `x(s)` is monotone when the control x coordinates are in
/// `[0, 1]`, so bisection converges to full f64 precision in 64 steps.
fn bezier_y_at_x(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let bez = CubicBez::new(
        Point::ZERO,
        Point::new(x1, y1),
        Point::new(x2, y2),
        Point::new(1.0, 1.0),
    );
    let mut lo = 0.0f64;
    let mut hi = 1.0f64;
    for _ in 0..64 {
        let mid = 0.5 * (lo + hi);
        if bez.eval(mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bez.eval(0.5 * (lo + hi)).y
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
