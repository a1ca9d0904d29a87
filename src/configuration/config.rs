//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical parameters (separation, step size, seed)
//! - [`PopulationConfig`] – how the random body population is sampled
//! - [`RenderConfig`]     – optional viewer features
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   separation_m: 227.9e9   # planet B orbital radius, meters (required)
//!   dt: 86400.0             # simulated seconds per rendered frame
//!   seed: 42                # RNG seed; reseeding reuses it
//!   star_mass: 1.989e30     # central mass, kg
//!
//! population:
//!   count: 300
//!   distribution: "uniform" # or "gaussian"
//!   radial_range: [100.0e9, 250.0e9]  # uniform radius bounds, meters
//!   radial_mean_m: 170.0e9  # gaussian only
//!   radial_spread_m: 40.0e9 # gaussian only
//!   mass_range: [1.0e23, 5.1e24]      # kg
//!   second_cluster_count: 0
//!   second_cluster_spread_m: 10.0e9
//!
//! render:
//!   vector_overlay: false
//!   mass_radius_scaling: true
//!   min_radius: 3.0
//!   radius_scale: 1.5
//! ```
//!
//! [`ScenarioConfig::validate`] runs before any system is seeded, so a
//! missing or non-finite separation never reaches the physics.

use std::fmt;

use serde::Deserialize;

/// Validation failure raised before any simulation state is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field was NaN or infinite.
    NonFinite { field: &'static str, value: f64 },
    /// A field that must be strictly positive was not.
    NonPositive { field: &'static str, value: f64 },
    /// A `[min, max]` range with min >= max.
    EmptyRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    /// A field required by the selected distribution was absent.
    MissingField { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFinite { field, value } => {
                write!(f, "configuration field `{field}` must be finite, got {value}")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "configuration field `{field}` must be > 0, got {value}")
            }
            ConfigError::EmptyRange { field, min, max } => {
                write!(f, "configuration range `{field}` is empty: [{min}, {max}]")
            }
            ConfigError::MissingField { field } => {
                write!(f, "configuration field `{field}` is required here")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// How the random population's orbital radii are drawn.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionConfig {
    #[serde(rename = "uniform")] // radius uniform over `radial_range`
    Uniform,

    #[serde(rename = "gaussian")] // Box-Muller around `radial_mean_m`
    Gaussian,
}

/// Physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub separation_m: f64, // planet B orbital radius, meters; required
    #[serde(default = "default_dt")]
    pub dt: f64, // simulated seconds per tick
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic RNG seed
    #[serde(default = "default_star_mass")]
    pub star_mass: f64, // kg
}

fn default_dt() -> f64 {
    86_400.0 // one simulated day per frame
}

fn default_seed() -> u64 {
    42
}

fn default_star_mass() -> f64 {
    1.989e30
}

/// Configuration of the random body population.
#[derive(Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub count: usize, // field bodies orbiting the star
    pub distribution: DistributionConfig,
    #[serde(default = "default_radial_range")]
    pub radial_range: [f64; 2], // uniform radius bounds, meters
    pub radial_mean_m: Option<f64>, // gaussian mean, meters
    #[serde(default = "default_radial_spread")]
    pub radial_spread_m: f64, // gaussian spread, meters
    #[serde(default = "default_mass_range")]
    pub mass_range: [f64; 2], // kg
    #[serde(default)]
    pub second_cluster_count: usize, // bodies clustered around planet B
    #[serde(default = "default_cluster_spread")]
    pub second_cluster_spread_m: f64, // per-axis offset spread, meters
}

fn default_radial_range() -> [f64; 2] {
    [100.0e9, 250.0e9]
}

fn default_radial_spread() -> f64 {
    40.0e9
}

fn default_mass_range() -> [f64; 2] {
    [1.0e23, 5.1e24]
}

fn default_cluster_spread() -> f64 {
    10.0e9
}

/// Optional viewer features.
#[derive(Deserialize, Debug, Clone)]
pub struct RenderConfig {
    #[serde(default)]
    pub vector_overlay: bool, // per-body acceleration arrows
    #[serde(default)]
    pub mass_radius_scaling: bool, // disc radius from log10(mass)
    #[serde(default = "default_min_radius")]
    pub min_radius: f32, // screen pixels
    #[serde(default = "default_radius_scale")]
    pub radius_scale: f32, // pixels per decade of mass above 1e20 kg
}

fn default_min_radius() -> f32 {
    5.0
}

fn default_radius_scale() -> f32 {
    1.5
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            vector_overlay: false,
            mass_radius_scaling: false,
            min_radius: default_min_radius(),
            radius_scale: default_radius_scale(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub population: PopulationConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, range: [f64; 2]) -> Result<(), ConfigError> {
    let [min, max] = range;
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::NonFinite {
            field,
            value: if min.is_finite() { max } else { min },
        });
    }
    if min <= 0.0 {
        return Err(ConfigError::NonPositive { field, value: min });
    }
    if min >= max {
        return Err(ConfigError::EmptyRange { field, min, max });
    }
    Ok(())
}

impl ScenarioConfig {
    /// Reject configurations that would propagate NaN or nonsense
    /// through seeding. Called by `Scenario::build_scenario` before any
    /// system exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("parameters.separation_m", self.parameters.separation_m)?;
        check_positive("parameters.dt", self.parameters.dt)?;
        check_positive("parameters.star_mass", self.parameters.star_mass)?;

        let pop = &self.population;
        check_range("population.mass_range", pop.mass_range)?;
        match pop.distribution {
            DistributionConfig::Uniform => {
                check_range("population.radial_range", pop.radial_range)?;
            }
            DistributionConfig::Gaussian => {
                let mean = pop.radial_mean_m.ok_or(ConfigError::MissingField {
                    field: "population.radial_mean_m",
                })?;
                check_positive("population.radial_mean_m", mean)?;
                if !pop.radial_spread_m.is_finite() {
                    return Err(ConfigError::NonFinite {
                        field: "population.radial_spread_m",
                        value: pop.radial_spread_m,
                    });
                }
                if pop.radial_spread_m < 0.0 {
                    return Err(ConfigError::NonPositive {
                        field: "population.radial_spread_m",
                        value: pop.radial_spread_m,
                    });
                }
            }
        }
        if pop.second_cluster_count > 0 {
            check_positive(
                "population.second_cluster_spread_m",
                pop.second_cluster_spread_m,
            )?;
        }

        Ok(())
    }
}
