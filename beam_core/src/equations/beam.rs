//! # Simply-Supported Beam Formulas
//!
//! Closed-form shear, moment and reaction expressions for a single load on a
//! pin–roller beam. The solver never calls these; they are the textbook
//! reference its sampled output is checked against.
//!
//! ## Notation
//!
//! - `l` = Span length
//! - `x` = Section position from the left support
//! - `p`, `a` = Point load and its position
//! - `w` = Uniform intensity over [a, b]
//! - `w1`, `w2` = Linear intensities at a and b
//!
//! Loads positive downward, reactions positive upward, sagging moment
//! positive, shear positive when the left side is pushed up.

// =============================================================================
// POINT LOAD
// =============================================================================

/// Reactions for point load P at position a
///
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (p * (l - a) / l, p * a / l)
}

/// Shear at x: R1 left of the load, R1 − P from the load onward
#[inline]
pub fn point_load_shear(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x < a {
        r1
    } else {
        r1 - p
    }
}

/// Moment at x: R1·x − P·⟨x − a⟩
#[inline]
pub fn point_load_moment(p: f64, a: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = point_load_reactions(p, a, l);
    if x <= a {
        r1 * x
    } else {
        r1 * x - p * (x - a)
    }
}

// =============================================================================
// PARTIAL UNIFORM LOAD
// =============================================================================

/// Reactions for uniform load w over [a, b]
///
/// W = w(b-a) at c = (a+b)/2, then R1 = W(L-c)/L, R2 = Wc/L
#[inline]
pub fn partial_uniform_reactions(w: f64, a: f64, b: f64, l: f64) -> (f64, f64) {
    let total = w * (b - a);
    let c = (a + b) / 2.0;
    (total * (l - c) / l, total * c / l)
}

/// Shear at x for uniform load w over [a, b]
///
/// - V = R1                 for x ≤ a
/// - V = R1 − w(x−a)        for a < x < b
/// - V = R1 − w(b−a)        for x ≥ b
#[inline]
pub fn partial_uniform_shear(w: f64, a: f64, b: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = partial_uniform_reactions(w, a, b, l);
    let covered = x.clamp(a, b) - a;
    r1 - w * covered
}

/// Moment at x for uniform load w over [a, b]
///
/// - M = R1·x                       for x ≤ a
/// - M = R1·x − w(x−a)²/2           for a < x < b
/// - M = R1·x − w(b−a)(x − c)       for x ≥ b
#[inline]
pub fn partial_uniform_moment(w: f64, a: f64, b: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = partial_uniform_reactions(w, a, b, l);
    if x <= a {
        r1 * x
    } else if x >= b {
        r1 * x - w * (b - a) * (x - (a + b) / 2.0)
    } else {
        r1 * x - w * (x - a).powi(2) / 2.0
    }
}

// =============================================================================
// LINEARLY VARYING LOAD
// Intensity w1 at a rising (or falling) linearly to w2 at b
// =============================================================================

/// Force and first moment (about x = a) of the part of the load on [a, a + c]
///
/// With w(c) = w1 + (w2 − w1)·c/(b − a):
/// - F = c·(w1 + w(c))/2
/// - M = c²·(w1 + 2·w(c))/6
#[inline]
fn varying_load_portion(w1: f64, w2: f64, a: f64, b: f64, c: f64) -> (f64, f64) {
    let wc = w1 + (w2 - w1) * c / (b - a);
    (c * (w1 + wc) / 2.0, c * c * (w1 + 2.0 * wc) / 6.0)
}

/// Reactions for a linearly varying load over [a, b]
#[inline]
pub fn varying_load_reactions(w1: f64, w2: f64, a: f64, b: f64, l: f64) -> (f64, f64) {
    if b <= a {
        return (0.0, 0.0);
    }
    let (force, moment_about_start) = varying_load_portion(w1, w2, a, b, b - a);
    let r2 = (force * a + moment_about_start) / l;
    (force - r2, r2)
}

/// Shear at x for a linearly varying load over [a, b]
#[inline]
pub fn varying_load_shear(w1: f64, w2: f64, a: f64, b: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = varying_load_reactions(w1, w2, a, b, l);
    if x <= a || b <= a {
        return r1;
    }
    let (force, _) = varying_load_portion(w1, w2, a, b, x.min(b) - a);
    r1 - force
}

/// Moment at x for a linearly varying load over [a, b]
#[inline]
pub fn varying_load_moment(w1: f64, w2: f64, a: f64, b: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = varying_load_reactions(w1, w2, a, b, l);
    if x <= a || b <= a {
        return r1 * x;
    }
    let c = x.min(b) - a;
    let (force, moment_about_start) = varying_load_portion(w1, w2, a, b, c);
    // Moment of the covered portion about the section at x
    r1 * x - (force * (x - a) - moment_about_start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_load_midspan() {
        assert_relative_eq!(point_load_moment(1000.0, 5.0, 10.0, 5.0), 2500.0, epsilon = 1e-9);
        assert_relative_eq!(point_load_shear(1000.0, 5.0, 10.0, 4.0), 500.0, epsilon = 1e-9);
        assert_relative_eq!(point_load_shear(1000.0, 5.0, 10.0, 6.0), -500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_uniform_symmetric() {
        let (r1, r2) = partial_uniform_reactions(100.0, 2.0, 8.0, 10.0);
        assert_relative_eq!(r1, 300.0, epsilon = 1e-9);
        assert_relative_eq!(r2, 300.0, epsilon = 1e-9);
        assert_relative_eq!(partial_uniform_shear(100.0, 2.0, 8.0, 10.0, 5.0), 0.0, epsilon = 1e-9);
        // 300·5 − 100·3²/2
        assert_relative_eq!(partial_uniform_moment(100.0, 2.0, 8.0, 10.0, 5.0), 1050.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_triangle_reactions() {
        // Triangle 0 → w over the full span: R1 = wL/6, R2 = wL/3
        let (r1, r2) = varying_load_reactions(0.0, 60.0, 0.0, 9.0, 9.0);
        assert_relative_eq!(r1, 90.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 180.0, max_relative = 1e-12);
    }

    #[test]
    fn test_full_triangle_max_moment() {
        // M_max = wL²/(9√3) at x = L/√3
        let (w, l) = (60.0, 9.0);
        let x = l / 3f64.sqrt();
        let expected = w * l * l / (9.0 * 3f64.sqrt());
        assert_relative_eq!(varying_load_moment(0.0, w, 0.0, l, l, x), expected, max_relative = 1e-12);
        assert_relative_eq!(varying_load_shear(0.0, w, 0.0, l, l, x), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_varying_equals_uniform_when_flat() {
        for x in [0.0, 1.0, 3.5, 6.0, 9.0, 10.0] {
            assert_relative_eq!(
                varying_load_moment(25.0, 25.0, 1.0, 7.0, 10.0, x),
                partial_uniform_moment(25.0, 1.0, 7.0, 10.0, x),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                varying_load_shear(25.0, 25.0, 1.0, 7.0, 10.0, x),
                partial_uniform_shear(25.0, 1.0, 7.0, 10.0, x),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_varying_closes_at_right_support() {
        let l = 8.0;
        assert_relative_eq!(varying_load_moment(4.0, 10.0, 2.0, 6.0, l, l), 0.0, epsilon = 1e-9);
        let (_, r2) = varying_load_reactions(4.0, 10.0, 2.0, 6.0, l);
        assert_relative_eq!(varying_load_shear(4.0, 10.0, 2.0, 6.0, l, l), -r2, max_relative = 1e-12);
    }
}
