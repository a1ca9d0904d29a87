//! Numerical and physical parameters for the simulation.
//!
//! `Parameters` holds the runtime settings every seeding and stepping
//! call reads:
//! - fixed simulated step size `dt`,
//! - gravitational constant and the position scale factor,
//! - star mass and the planet-B separation,
//! - deterministic RNG seed.

/// Gravitational constant, m^3 kg^-1 s^-2.
pub const G: f64 = 6.6743e-11;

/// Rendering scale: one stored position unit is 1e9 meters.
pub const SCALE_FACTOR: f64 = 1e9;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,           // fixed simulated step per tick, seconds
    pub g: f64,            // gravitational constant
    pub scale_factor: f64, // meters per stored position unit
    pub star_mass: f64,    // kg
    pub separation_m: f64, // planet B orbital radius, meters
    pub seed: u64,         // deterministic seed for reseeding
}
