//! Orbital separation helpers operating on perihelion/aphelion annuli.
//!
//! These are geometric envelopes, not time-resolved distances: the bodies are never placed
//! at a real phase of their orbits.
use solar_config::OrbitingBody;

/// Mean radius (AU) within which a body is treated as sitting on Earth's orbit.
pub const EARTH_ORBIT_TOLERANCE_AU: f64 = 0.1;

/// Closest and farthest possible separation between two orbits, in AU.
///
/// The minimum is the radial gap between the annuli, clamped to zero when they overlap;
/// the maximum puts both bodies at aphelion on opposite sides of the Sun.
pub fn separation_bounds(a: &OrbitingBody, b: &OrbitingBody) -> (f64, f64) {
    let gap = a.perihelion_au().max(b.perihelion_au()) - a.aphelion_au().min(b.aphelion_au());
    let min = gap.max(0.0);
    let max = a.aphelion_au() + b.aphelion_au();
    (min, max)
}

/// Heuristic "typical" separation between two orbits, in AU.
///
/// Each body sits at its mean radius with a 1 AU perpendicular offset. When either body is
/// on Earth's orbit (mean radius within [`EARTH_ORBIT_TOLERANCE_AU`] of 1 AU) it becomes the
/// origin and the result is the hypotenuse to the other body; otherwise it is the difference
/// of the two hypotenuses. The switch is discontinuous at the tolerance boundary.
pub fn median_distance(a: &OrbitingBody, b: &OrbitingBody) -> f64 {
    let r1 = a.mean_radius_au();
    let r2 = b.mean_radius_au();
    let hypot = |r: f64| (1.0 + r * r).sqrt();

    if on_earth_orbit(r1) {
        hypot(r2)
    } else if on_earth_orbit(r2) {
        hypot(r1)
    } else {
        (hypot(r2) - hypot(r1)).abs()
    }
}

fn on_earth_orbit(mean_radius_au: f64) -> bool {
    (mean_radius_au - 1.0).abs() < EARTH_ORBIT_TOLERANCE_AU
}
