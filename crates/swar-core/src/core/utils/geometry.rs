use nalgebra::{Point2, Vector2};
use rand::Rng;
use std::f64::consts::PI;

#[inline]
pub fn norm(v: &Vector2<f64>) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

#[inline]
pub fn distance(p: &Point2<f64>, q: &Point2<f64>) -> f64 {
    norm(&(p - q))
}

/// Draws a point uniformly distributed over the open unit disk.
///
/// Both coordinates are drawn from `[-1, 1)` and the pair is rejected until it falls
/// strictly inside the unit circle. Each trial succeeds with probability π/4, so the
/// loop is unbounded but terminates almost surely.
pub fn sample_unit_disk(rng: &mut impl Rng) -> Point2<f64> {
    loop {
        let x: f64 = rng.gen_range(-1.0..1.0);
        let y: f64 = rng.gen_range(-1.0..1.0);
        if x * x + y * y < 1.0 {
            return Point2::new(x, y);
        }
    }
}

/// Averages two points in polar form.
///
/// The radius is the mean of both radii and the angle is the mean of both `atan2`
/// angles. When the angles straddle the branch cut (difference above π) the mean
/// angle is rotated by π.
pub fn polar_midpoint(p: &Point2<f64>, q: &Point2<f64>) -> Point2<f64> {
    let theta1 = p.y.atan2(p.x);
    let theta2 = q.y.atan2(q.x);
    let mut theta = (theta1 + theta2) / 2.0;
    if (theta1 - theta2).abs() > PI {
        theta += PI;
    }
    let r = (norm(&p.coords) + norm(&q.coords)) / 2.0;
    Point2::new(r * theta.cos(), r * theta.sin())
}
