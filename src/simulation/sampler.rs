//! Seeded random sampling helpers for scenario seeding.
//!
//! Provides the Box-Muller standard-normal draw and the circular-orbit
//! velocity construction used when placing the random population.

use std::f64::consts::PI;

use rand::Rng;

use super::states::NVec2;

/// One standard-normal draw via the Box-Muller transform.
///
/// Both uniform draws reject exactly zero so `ln` stays finite.
pub fn standard_normal(rng: &mut impl Rng) -> f64 {
    let mut u1: f64 = 0.0;
    while u1 == 0.0 {
        u1 = rng.gen();
    }
    let mut u2: f64 = 0.0;
    while u2 == 0.0 {
        u2 = rng.gen();
    }
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Speed of a circular orbit of radius `r_m` (meters) about a central
/// mass `central_mass` (kg): `v = sqrt(G M / r)`.
pub fn circular_orbit_speed(g: f64, central_mass: f64, r_m: f64) -> f64 {
    (g * central_mass / r_m).sqrt()
}

/// Velocity tangential to the radius vector at polar angle `angle`,
/// counter-clockwise: `(-v sin, v cos)`.
pub fn tangential_velocity(angle: f64, speed: f64) -> NVec2 {
    NVec2::new(-speed * angle.sin(), speed * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn standard_normal_moments() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 50_000;
        let draws: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.05, "mean too far from 0: {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance too far from 1: {var}");
    }

    #[test]
    fn tangential_velocity_is_perpendicular() {
        let angle = 1.234_f64;
        let radial = NVec2::new(angle.cos(), angle.sin());
        let vel = tangential_velocity(angle, 42.0);

        assert!(vel.dot(&radial).abs() < 1e-12);
        assert!((vel.norm() - 42.0).abs() < 1e-12);
    }
}
