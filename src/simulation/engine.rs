//! High-level runtime engine settings.
//!
//! Selects how the random population is seeded and which optional
//! rendering features are active. Built once from the config when a
//! `Scenario` is constructed.

/// Radial distribution of the random field population.
#[derive(Debug, Clone)]
pub enum RadialDistribution {
    /// Orbital radius drawn uniformly from `[min_m, max_m)`, meters.
    Uniform { min_m: f64, max_m: f64 },
    /// Orbital radius `|mean_m + g * spread_m|` with `g` a Box-Muller
    /// standard normal draw, meters.
    Gaussian { mean_m: f64, spread_m: f64 },
}

/// Second population clustered around planet B.
#[derive(Debug, Clone)]
pub struct SecondCluster {
    pub count: usize,
    pub spread_m: f64, // per-axis gaussian spread of the offset, meters
}

#[derive(Debug, Clone)]
pub struct Population {
    pub count: usize, // field bodies around the star
    pub distribution: RadialDistribution,
    pub mass_range: [f64; 2], // kg, uniform draw
    pub second_cluster: Option<SecondCluster>,
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub population: Population,
    pub vector_overlay: bool,      // draw per-body acceleration arrows
    pub mass_radius_scaling: bool, // disc radius from log10(mass)
    pub min_radius: f32,           // screen pixels
    pub radius_scale: f32,         // pixels per decade of mass above 1e20 kg
}
